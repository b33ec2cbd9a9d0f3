use crate::{
    LoginRequest, LoginResponse, MessageResponse, OtpRequest, RegisterRequest,
    ResetPasswordRequest, ScrapeRequest, ScrapeResponse, SetPasswordRequest, UserRecord,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    ///
    /// Endpoints that may answer with an empty body use `Option<_>`;
    /// the client feeds `null` for an empty body.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request serializes itself as a JSON body.
    const HAS_BODY: bool = true;
    /// The URL path, relative to the client's base URL.
    fn path(&self) -> String;
}

// =========================================================
// Match API
// =========================================================

impl ApiRequest for ScrapeRequest {
    type Response = ScrapeResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/scrape_and_match".to_string()
    }
}

// =========================================================
// Auth API (public)
// =========================================================

impl ApiRequest for RegisterRequest {
    type Response = Option<MessageResponse>;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/register".to_string()
    }
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/login".to_string()
    }
}

impl ApiRequest for OtpRequest {
    type Response = Option<MessageResponse>;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/forgot-password/request-otp".to_string()
    }
}

impl ApiRequest for ResetPasswordRequest {
    type Response = Option<MessageResponse>;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/forgot-password/reset".to_string()
    }
}

// =========================================================
// Admin API (bearer token)
// =========================================================

/// List all users
#[derive(Debug, Serialize, Deserialize)]
pub struct ListUsersRequest;

impl ApiRequest for ListUsersRequest {
    type Response = Vec<UserRecord>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const HAS_BODY: bool = false;

    fn path(&self) -> String {
        "/admin/users".to_string()
    }
}

/// Send a password-reset OTP to a user
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminResetOtpRequest {
    #[serde(skip)]
    pub user_id: i64,
}

impl ApiRequest for AdminResetOtpRequest {
    type Response = Option<MessageResponse>;
    const METHOD: HttpMethod = HttpMethod::Post;
    const HAS_BODY: bool = false;

    fn path(&self) -> String {
        format!("/admin/user/{}/reset-otp", self.user_id)
    }
}

/// Directly set a user's password
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminSetPasswordRequest {
    #[serde(skip)]
    pub user_id: i64,
    #[serde(flatten)]
    pub body: SetPasswordRequest,
}

impl AdminSetPasswordRequest {
    pub fn new(user_id: i64, new_password: String) -> Self {
        Self {
            user_id,
            body: SetPasswordRequest { new_password },
        }
    }
}

impl ApiRequest for AdminSetPasswordRequest {
    type Response = Option<MessageResponse>;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/admin/user/{}/set-password", self.user_id)
    }
}

/// Delete a user
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    #[serde(skip)]
    pub user_id: i64,
}

impl ApiRequest for DeleteUserRequest {
    type Response = Option<MessageResponse>;
    const METHOD: HttpMethod = HttpMethod::Delete;
    const HAS_BODY: bool = false;

    fn path(&self) -> String {
        format!("/admin/user/{}", self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_paths_embed_user_id() {
        assert_eq!(AdminResetOtpRequest { user_id: 7 }.path(), "/admin/user/7/reset-otp");
        assert_eq!(DeleteUserRequest { user_id: 7 }.path(), "/admin/user/7");
        assert_eq!(
            AdminSetPasswordRequest::new(7, "pw".into()).path(),
            "/admin/user/7/set-password"
        );
    }

    #[test]
    fn test_set_password_body_has_no_user_id() {
        let json = serde_json::to_value(AdminSetPasswordRequest::new(9, "s3cret".into())).unwrap();
        assert_eq!(json, serde_json::json!({ "new_password": "s3cret" }));
    }

    #[test]
    fn test_scrape_request_body() {
        let req = ScrapeRequest {
            post_url: "https://www.idealista.com/inmueble/95847362/".into(),
        };
        assert_eq!(req.path(), "/scrape_and_match");
        assert_eq!(ScrapeRequest::METHOD, HttpMethod::Post);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["post_url"], "https://www.idealista.com/inmueble/95847362/");
    }

    #[test]
    fn test_bodyless_requests() {
        assert!(!ListUsersRequest::HAS_BODY);
        assert!(!DeleteUserRequest::HAS_BODY);
        assert!(AdminSetPasswordRequest::HAS_BODY);
        assert_eq!(DeleteUserRequest::METHOD.as_str(), "DELETE");
    }
}
