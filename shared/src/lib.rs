use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod date;
pub mod display;
pub mod error;
pub mod protocol;

pub use date::Timestamp;
pub use error::ErrorBody;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const STORAGE_TOKEN_KEY: &str = "jwt_token";
pub const STORAGE_ROLE_KEY: &str = "user_role";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

pub const PLACEHOLDER_MATCH_IMAGE: &str = "https://via.placeholder.com/400x250";
pub const PLACEHOLDER_SALE_IMAGE: &str = "https://via.placeholder.com/400x250?text=Sale+Image";

/// 首页与搜索页共用的示例房源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleListing {
    pub site: &'static str,
    pub url: &'static str,
}

impl ExampleListing {
    /// 去掉协议与 `www.` 的短链接，用于按钮文字
    pub fn short_url(&self) -> &'static str {
        let rest = self
            .url
            .strip_prefix("https://")
            .or_else(|| self.url.strip_prefix("http://"))
            .unwrap_or(self.url);
        let rest = rest.strip_prefix("www.").unwrap_or(rest);
        rest.trim_end_matches('/')
    }
}

pub const EXAMPLE_LISTINGS: [ExampleListing; 3] = [
    ExampleListing {
        site: "James Edition",
        url: "https://www.jamesedition.com/real_estate/montepulciano-italy/charming-tuscany-villa-in-montepulciano-12966847",
    },
    ExampleListing {
        site: "Idealista",
        url: "https://www.idealista.com/inmueble/95847362/",
    },
    ExampleListing {
        site: "Immobiliare",
        url: "https://www.immobiliare.it/en/annunci/124171137/",
    },
];

// =========================================================
// 会话与角色 (Session & Role)
// =========================================================

/// 用户角色
///
/// 后端只区分 `admin` 与其他角色，未知字符串一律视为普通用户。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// 从 LocalStorage 中保存的原始字符串恢复角色
    pub fn from_stored(raw: &str) -> Self {
        if raw == "admin" { Role::Admin } else { Role::User }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 登录会话：令牌 + 角色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// 宽松读取角色：缺失、`null` 或非字符串都视为普通用户
fn lenient_role<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Role, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRole {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match RawRole::deserialize(deserializer)? {
        RawRole::Text(raw) => Role::from_stored(&raw),
        RawRole::Other(_) => Role::User,
    })
}

// =========================================================
// 认证请求/响应 (Auth DTOs)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Role,
}

impl From<LoginResponse> for Session {
    fn from(res: LoginResponse) -> Self {
        Session {
            token: res.access_token,
            role: res.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl RegisterRequest {
    /// 构造注册请求，空白手机号视为未填写
    pub fn new(username: String, email: String, password: String, phone: String) -> Self {
        let phone = phone.trim();
        Self {
            username,
            email,
            password,
            phone_number: (!phone.is_empty()).then(|| phone.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpRequest {
    pub email: String,
    pub send_via_sms: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

/// 通用确认响应
///
/// 后端不同端点的字段名不一致 (`msg` / `message` / `detail`)，全部可选。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl MessageResponse {
    pub fn text(&self) -> Option<&str> {
        self.msg
            .as_deref()
            .or(self.message.as_deref())
            .or(self.detail.as_deref())
    }
}

// =========================================================
// 搜索与匹配 (Search & Match)
// =========================================================

/// 一次搜索请求，仅保存在前端 Shell 状态中
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub url: String,
    pub timestamp: Timestamp,
}

impl SearchRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timestamp: Timestamp::now(),
        }
    }
}

/// 数字或字符串 (后端对房间数、索引等字段并不统一)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) if n.fract() == 0.0 => write!(f, "{:.0}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub post_url: String,
}

/// 后端返回的候选租赁房源
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text_similarity: Option<f64>,
    #[serde(default)]
    pub structured_similarity: Option<f64>,
    #[serde(default)]
    pub image_similarity: Option<f64>,
    #[serde(default)]
    pub final_score: Option<f64>,
    #[serde(default)]
    pub rental_index: Option<Scalar>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl MatchResult {
    pub fn title(&self) -> &str {
        non_empty(&self.title).unwrap_or("Untitled")
    }

    pub fn image(&self) -> &str {
        non_empty(&self.image).unwrap_or(PLACEHOLDER_MATCH_IMAGE)
    }

    pub fn platform(&self) -> &str {
        non_empty(&self.platform).unwrap_or("N/A")
    }

    pub fn listing_url(&self) -> &str {
        non_empty(&self.url).unwrap_or("#")
    }

    pub fn score(&self) -> f64 {
        self.final_score.unwrap_or(0.0)
    }
}

/// 被搜索的在售房源
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SaleListing {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// 数字或抓取到的原始文本 (如 `€2,450,000`)
    #[serde(default)]
    pub price: Option<Scalar>,
    #[serde(default)]
    pub rooms: Option<Scalar>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl SaleListing {
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_SALE_IMAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    pub matches: Vec<MatchResult>,
    #[serde(default)]
    pub sale_listing: Option<SaleListing>,
}

// =========================================================
// 管理员视图 (Admin)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Role,
    #[serde(default)]
    pub reset_otp_expires: Option<String>,
}

impl UserRecord {
    pub fn phone(&self) -> &str {
        non_empty(&self.phone_number).unwrap_or("N/A")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPasswordRequest {
    pub new_password: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_listing_short_url() {
        assert_eq!(
            EXAMPLE_LISTINGS[1].short_url(),
            "idealista.com/inmueble/95847362"
        );
        assert_eq!(
            EXAMPLE_LISTINGS[2].short_url(),
            "immobiliare.it/en/annunci/124171137"
        );
        for example in EXAMPLE_LISTINGS {
            assert!(example.url.starts_with("https://www."));
        }
    }

    #[test]
    fn test_role_unknown_string_is_user() {
        let role: Role = serde_json::from_str("\"moderator\"").unwrap();
        assert_eq!(role, Role::User);
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert!(role.is_admin());
    }

    #[test]
    fn test_role_from_stored() {
        assert_eq!(Role::from_stored("admin"), Role::Admin);
        assert_eq!(Role::from_stored("Admin"), Role::User);
        assert_eq!(Role::from_stored(""), Role::User);
    }

    #[test]
    fn test_login_response_without_role() {
        let res: LoginResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        let session = Session::from(res);
        assert_eq!(session.token, "abc");
        assert!(!session.is_admin());
    }

    #[test]
    fn test_register_request_omits_blank_phone() {
        let req = RegisterRequest::new("u".into(), "e@x.io".into(), "pw".into(), "  ".into());
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("phone_number").is_none());

        let req = RegisterRequest::new("u".into(), "e@x.io".into(), "pw".into(), "+1415".into());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["phone_number"], "+1415");
    }

    #[test]
    fn test_scrape_response_missing_matches_is_empty() {
        let res: ScrapeResponse = serde_json::from_str(r#"{"sale_listing":null}"#).unwrap();
        assert!(res.matches.is_empty());
        assert!(res.sale_listing.is_none());
    }

    #[test]
    fn test_match_result_defaults() {
        let m: MatchResult = serde_json::from_str(r#"{"title":"","rental_index":"7"}"#).unwrap();
        assert_eq!(m.title(), "Untitled");
        assert_eq!(m.image(), PLACEHOLDER_MATCH_IMAGE);
        assert_eq!(m.platform(), "N/A");
        assert_eq!(m.listing_url(), "#");
        assert_eq!(m.score(), 0.0);
        assert_eq!(m.rental_index.unwrap().to_string(), "7");
    }

    #[test]
    fn test_sale_listing_rooms_number_or_text() {
        let a: SaleListing = serde_json::from_str(r#"{"rooms":4}"#).unwrap();
        assert_eq!(a.rooms.unwrap().to_string(), "4");
        let b: SaleListing = serde_json::from_str(r#"{"rooms":"4-5"}"#).unwrap();
        assert_eq!(b.rooms.as_ref().unwrap().to_string(), "4-5");
        assert_eq!(b.cover_image(), PLACEHOLDER_SALE_IMAGE);
    }

    #[test]
    fn test_scrape_response_keeps_text_price() {
        let res: ScrapeResponse = serde_json::from_str(
            r#"{"matches":[{"title":"Casa","final_score":41.2}],
                "sale_listing":{"price":"€2,450,000"}}"#,
        )
        .unwrap();
        assert_eq!(res.matches.len(), 1);
        assert_eq!(
            res.sale_listing.unwrap().price,
            Some(Scalar::Text("€2,450,000".into()))
        );

        let listing: SaleListing = serde_json::from_str(r#"{"price":1999.5}"#).unwrap();
        assert_eq!(listing.price, Some(Scalar::Float(1999.5)));
    }

    #[test]
    fn test_user_record_null_role_is_user() {
        let users: Vec<UserRecord> = serde_json::from_str(
            r#"[{"id":1,"username":"a","email":"a@x","role":null},
                {"id":2,"username":"b","email":"b@x"},
                {"id":3,"username":"c","email":"c@x","role":7},
                {"id":4,"username":"d","email":"d@x","role":"admin"}]"#,
        )
        .unwrap();
        let roles: Vec<Role> = users.iter().map(|u| u.role).collect();
        assert_eq!(roles, vec![Role::User, Role::User, Role::User, Role::Admin]);

        let res: LoginResponse =
            serde_json::from_str(r#"{"access_token":"t","role":null}"#).unwrap();
        assert_eq!(res.role, Role::User);
    }

    #[test]
    fn test_user_record_phone_fallback() {
        let user: UserRecord = serde_json::from_str(
            r#"{"id":3,"username":"ann","email":"a@x.io","role":"admin","phone_number":null}"#,
        )
        .unwrap();
        assert_eq!(user.phone(), "N/A");
        assert!(user.role.is_admin());
    }

    #[test]
    fn test_message_response_text_precedence() {
        let res: MessageResponse =
            serde_json::from_str(r#"{"message":"second","detail":"third"}"#).unwrap();
        assert_eq!(res.text(), Some("second"));
        assert_eq!(MessageResponse::default().text(), None);
    }
}
