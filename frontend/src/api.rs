//! 后端 API 客户端
//!
//! 两个独立配置的客户端：
//! - `MatchApi`: 匹配服务，匿名访问
//! - `AuthApi`: 认证/管理服务，请求时从存储中读取令牌并附加 `Authorization: Bearer`

use crate::config::AppConfig;
use crate::session::SessionStore;
use crate::web::http::{FetchClient, HttpClient, HttpError, HttpRequest};
use crate::web::storage::LocalStorage;
use leptos::prelude::{provide_context, use_context};
use propertymatch_shared::protocol::{
    AdminResetOtpRequest, AdminSetPasswordRequest, ApiRequest, DeleteUserRequest,
    ListUsersRequest,
};
use propertymatch_shared::{
    ErrorBody, HEADER_AUTHORIZATION, LoginRequest, LoginResponse, MessageResponse, OtpRequest,
    RegisterRequest, ResetPasswordRequest, ScrapeRequest, ScrapeResponse, UserRecord,
};
use tracing::{debug, warn};

pub type MatchApi = ApiClient<FetchClient>;
pub type AuthApi = ApiClient<FetchClient, SessionStore<LocalStorage>>;

pub fn match_api(config: &AppConfig) -> MatchApi {
    ApiClient::new(&config.api_base_url, FetchClient)
}

pub fn auth_api(config: &AppConfig) -> AuthApi {
    ApiClient::with_tokens(
        &config.auth_api_base_url,
        FetchClient,
        SessionStore::new(LocalStorage),
    )
}

/// 将两个客户端注入 Context
pub fn provide_api_clients(config: &AppConfig) {
    provide_context(match_api(config));
    provide_context(auth_api(config));
}

pub fn use_match_api() -> MatchApi {
    use_context::<MatchApi>().expect("MatchApi should be provided")
}

pub fn use_auth_api() -> AuthApi {
    use_context::<AuthApi>().expect("AuthApi should be provided")
}

// =========================================================
// 错误类型
// =========================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("请求序列化失败: {0}")]
    Encode(String),
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("无错误详情"))]
    Status { status: u16, detail: Option<String> },
    #[error("响应解析失败: {0}")]
    Decode(String),
}

impl ApiError {
    /// 后端给出的错误详情
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// 展示给用户的文本：优先后端详情，否则使用调用方的兜底文案
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

// =========================================================
// 令牌来源
// =========================================================

pub trait TokenSource {
    fn token(&self) -> Option<String>;
}

/// 不附加令牌
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl TokenSource for Anonymous {
    fn token(&self) -> Option<String> {
        None
    }
}

// =========================================================
// 客户端
// =========================================================

#[derive(Debug, Clone)]
pub struct ApiClient<C, T = Anonymous> {
    base_url: String,
    transport: C,
    tokens: T,
}

impl<C: HttpClient> ApiClient<C, Anonymous> {
    pub fn new(base_url: &str, transport: C) -> Self {
        Self::with_tokens(base_url, transport, Anonymous)
    }
}

impl<C: HttpClient, T: TokenSource> ApiClient<C, T> {
    pub fn with_tokens(base_url: &str, transport: C, tokens: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            tokens,
        }
    }

    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    #[cfg(test)]
    pub fn transport(&self) -> &C {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送一个端点请求并解析响应
    pub async fn call<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let body = self.send(req).await?;
        // 204 / 空响应体按 JSON null 处理
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 确认类端点：2xx 即成功，响应体只用于提取提示文本
    pub async fn acknowledge<R>(&self, req: &R) -> Result<Option<MessageResponse>, ApiError>
    where
        R: ApiRequest<Response = Option<MessageResponse>>,
    {
        let body = self.send(req).await?;
        Ok(acknowledgement(&body))
    }

    async fn send<R: ApiRequest>(&self, req: &R) -> Result<String, ApiError> {
        let mut http = HttpRequest::new(self.url(&req.path()), R::METHOD);

        if R::HAS_BODY {
            let body = serde_json::to_string(req).map_err(|e| ApiError::Encode(e.to_string()))?;
            http = http
                .with_header("Content-Type", "application/json")
                .with_body(body);
        }

        if let Some(token) = self.tokens.token() {
            http = http.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
        }

        debug!(method = R::METHOD.as_str(), url = %http.url, "sending request");
        let res = self.transport.send(http).await?;

        if !res.ok() {
            let detail = serde_json::from_str::<ErrorBody>(&res.body)
                .ok()
                .and_then(|b| b.message());
            warn!(status = res.status, detail = ?detail, path = %req.path(), "request rejected");
            return Err(ApiError::Status {
                status: res.status,
                detail,
            });
        }

        Ok(res.body)
    }

    // ---- Match API ----

    pub async fn find_matches(&self, post_url: &str) -> Result<ScrapeResponse, ApiError> {
        self.call(&ScrapeRequest {
            post_url: post_url.to_string(),
        })
        .await
    }

    // ---- Auth API ----

    pub async fn register(&self, req: RegisterRequest) -> Result<Option<MessageResponse>, ApiError> {
        self.acknowledge(&req).await
    }

    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.call(&req).await
    }

    pub async fn request_otp(&self, req: OtpRequest) -> Result<Option<MessageResponse>, ApiError> {
        self.acknowledge(&req).await
    }

    pub async fn reset_password(
        &self,
        req: ResetPasswordRequest,
    ) -> Result<Option<MessageResponse>, ApiError> {
        self.acknowledge(&req).await
    }

    // ---- Admin API ----

    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.call(&ListUsersRequest).await
    }

    pub async fn admin_reset_otp(&self, user_id: i64) -> Result<Option<MessageResponse>, ApiError> {
        self.acknowledge(&AdminResetOtpRequest { user_id }).await
    }

    pub async fn admin_set_password(
        &self,
        user_id: i64,
        new_password: String,
    ) -> Result<Option<MessageResponse>, ApiError> {
        self.acknowledge(&AdminSetPasswordRequest::new(user_id, new_password))
            .await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<Option<MessageResponse>, ApiError> {
        self.acknowledge(&DeleteUserRequest { user_id }).await
    }
}

/// 解析确认响应体
///
/// 对象按 `MessageResponse` 读取，裸字符串作为提示文本，其余形状视为无文本。
fn acknowledgement(body: &str) -> Option<MessageResponse> {
    match serde_json::from_str::<serde_json::Value>(body).ok()? {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(MessageResponse {
            message: Some(text),
            ..Default::default()
        }),
        value @ serde_json::Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::http::MockHttpClient;
    use propertymatch_shared::Scalar;
    use propertymatch_shared::protocol::HttpMethod;
    use serde_json::json;

    const BASE: &str = "http://api.test";

    fn client() -> ApiClient<MockHttpClient> {
        ApiClient::new("http://api.test/", MockHttpClient::new())
    }

    #[tokio::test]
    async fn test_find_matches_posts_json_body() {
        let api = client();
        api.transport().mock_json(
            HttpMethod::Post,
            &format!("{}/scrape_and_match", BASE),
            200,
            json!({
                "matches": [{"title": "Casa", "final_score": 41.2, "platform": "airbnb"}],
                "sale_listing": {"title": "Villa", "price": 2450000}
            }),
        );

        let res = api.find_matches("https://example.com/sale/1").await.unwrap();
        assert_eq!(res.matches.len(), 1);
        assert_eq!(res.matches[0].title(), "Casa");
        assert_eq!(res.sale_listing.unwrap().price, Some(Scalar::Int(2_450_000)));

        let sent = api.transport().last_request().unwrap();
        assert_eq!(sent.header("content-type"), Some("application/json"));
        assert_eq!(sent.header(HEADER_AUTHORIZATION), None);
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"post_url": "https://example.com/sale/1"}));
    }

    #[tokio::test]
    async fn test_error_detail_surfaces() {
        let api = client();
        api.transport().mock_json(
            HttpMethod::Post,
            &format!("{}/auth/login", BASE),
            401,
            json!({"detail": "Incorrect email or password"}),
        );

        let err = api
            .login(LoginRequest {
                email: "a@x.io".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 401, .. }));
        assert_eq!(err.user_message("Login failed"), "Incorrect email or password");
    }

    #[tokio::test]
    async fn test_non_json_error_uses_fallback() {
        let api = client();
        api.transport().mock_response(
            HttpMethod::Post,
            &format!("{}/auth/register", BASE),
            502,
            "<html>Bad Gateway</html>",
        );

        let err = api
            .register(RegisterRequest::new("u".into(), "e@x.io".into(), "pw".into(), String::new()))
            .await
            .unwrap_err();
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message("Registration failed."), "Registration failed.");
    }

    #[tokio::test]
    async fn test_network_error_uses_fallback() {
        let api = client();
        let err = api.find_matches("https://example.com").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[tokio::test]
    async fn test_empty_body_acknowledged() {
        let api = client();
        api.transport().mock_response(
            HttpMethod::Delete,
            &format!("{}/admin/user/5", BASE),
            204,
            "",
        );

        let res = api.delete_user(5).await.unwrap();
        assert!(res.is_none());
        let sent = api.transport().last_request().unwrap();
        assert!(sent.body.is_none());
        assert_eq!(sent.header("Content-Type"), None);
    }

    #[tokio::test]
    async fn test_undecodable_success_body() {
        let api = client();
        api.transport().mock_response(
            HttpMethod::Post,
            &format!("{}/scrape_and_match", BASE),
            200,
            "not json",
        );

        let err = api.find_matches("https://example.com").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_acknowledgement_accepts_any_success_body() {
        let api = client();
        let url = format!("{}/admin/user/5", BASE);

        api.transport()
            .mock_response(HttpMethod::Delete, &url, 200, "\"User deleted\"");
        let res = api.delete_user(5).await.unwrap();
        assert_eq!(res.unwrap().text(), Some("User deleted"));

        api.transport().mock_response(HttpMethod::Delete, &url, 200, "true");
        assert!(api.delete_user(5).await.unwrap().is_none());

        api.transport().mock_response(HttpMethod::Delete, &url, 200, "deleted");
        assert!(api.delete_user(5).await.unwrap().is_none());

        api.transport()
            .mock_json(HttpMethod::Delete, &url, 200, json!({"msg": 7, "detail": "ok"}));
        assert!(api.delete_user(5).await.unwrap().is_none());

        api.transport()
            .mock_json(HttpMethod::Delete, &url, 200, json!({"msg": "User 5 deleted"}));
        let res = api.delete_user(5).await.unwrap();
        assert_eq!(res.unwrap().text(), Some("User 5 deleted"));
    }

    #[tokio::test]
    async fn test_acknowledgement_still_reports_rejection() {
        let api = client();
        api.transport().mock_json(
            HttpMethod::Delete,
            &format!("{}/admin/user/5", BASE),
            403,
            json!({"detail": "Not enough permissions"}),
        );

        let err = api.delete_user(5).await.unwrap_err();
        assert_eq!(err.detail(), Some("Not enough permissions"));
    }
}
