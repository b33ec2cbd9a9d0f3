//! 会话持久化与登录流程
//!
//! 令牌与角色分别保存在两个 LocalStorage 键中。
//! 这里不依赖 Leptos，响应式状态的更新由 `auth` 模块负责。

use crate::api::{ApiClient, ApiError, TokenSource};
use crate::web::http::HttpClient;
use crate::web::storage::KeyValueStore;
use propertymatch_shared::{LoginRequest, Role, STORAGE_ROLE_KEY, STORAGE_TOKEN_KEY, Session};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 恢复上次的会话
    ///
    /// 只要令牌存在即视为已登录；角色缺失时按普通用户处理。
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        let role = self
            .store
            .get(STORAGE_ROLE_KEY)
            .map(|r| Role::from_stored(&r))
            .unwrap_or_default();
        Some(Session { token, role })
    }

    pub fn save(&self, session: &Session) {
        self.store.set(STORAGE_TOKEN_KEY, &session.token);
        self.store.set(STORAGE_ROLE_KEY, session.role.as_str());
    }

    pub fn clear(&self) {
        self.store.delete(STORAGE_TOKEN_KEY);
        self.store.delete(STORAGE_ROLE_KEY);
    }
}

impl<S: KeyValueStore> TokenSource for SessionStore<S> {
    fn token(&self) -> Option<String> {
        self.store
            .get(STORAGE_TOKEN_KEY)
            .filter(|t| !t.is_empty())
    }
}

/// 登录并持久化会话
///
/// 失败时存储保持原样，错误交由调用方展示。
pub async fn sign_in<C, S>(
    api: &ApiClient<C, SessionStore<S>>,
    email: String,
    password: String,
) -> Result<Session, ApiError>
where
    C: HttpClient,
    S: KeyValueStore,
{
    let res = api.login(LoginRequest { email, password }).await?;
    let session = Session::from(res);
    api.tokens().save(&session);
    info!(role = %session.role, "signed in");
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::http::MockHttpClient;
    use crate::web::storage::MemoryStorage;
    use propertymatch_shared::protocol::HttpMethod;
    use serde_json::json;

    const BASE: &str = "http://auth.test";

    fn auth_client(storage: MemoryStorage) -> ApiClient<MockHttpClient, SessionStore<MemoryStorage>> {
        ApiClient::with_tokens(BASE, MockHttpClient::new(), SessionStore::new(storage))
    }

    #[tokio::test]
    async fn test_sign_in_success_persists_session() {
        let storage = MemoryStorage::new();
        let api = auth_client(storage.clone());
        api.transport().mock_json(
            HttpMethod::Post,
            &format!("{}/auth/login", BASE),
            200,
            json!({"access_token": "tok-123", "role": "admin"}),
        );

        let session = sign_in(&api, "a@x.io".into(), "pw".into()).await.unwrap();
        assert_eq!(session.token, "tok-123");
        assert!(session.is_admin());

        assert_eq!(storage.get(STORAGE_TOKEN_KEY).as_deref(), Some("tok-123"));
        assert_eq!(storage.get(STORAGE_ROLE_KEY).as_deref(), Some("admin"));
        assert_eq!(SessionStore::new(storage).load(), Some(session));
    }

    #[tokio::test]
    async fn test_sign_in_failure_leaves_session_unset() {
        let storage = MemoryStorage::new();
        let api = auth_client(storage.clone());
        api.transport().mock_json(
            HttpMethod::Post,
            &format!("{}/auth/login", BASE),
            400,
            json!({"detail": "Incorrect email or password"}),
        );

        let err = sign_in(&api, "a@x.io".into(), "bad".into()).await.unwrap_err();
        assert_eq!(err.user_message("Login failed"), "Incorrect email or password");
        assert_eq!(storage.len(), 0);
        assert!(api.tokens().load().is_none());
    }

    #[tokio::test]
    async fn test_bearer_attached_only_with_stored_token() {
        let storage = MemoryStorage::new();
        let api = auth_client(storage.clone());
        api.transport().mock_json(
            HttpMethod::Get,
            &format!("{}/admin/users", BASE),
            200,
            json!([]),
        );

        api.list_users().await.unwrap();
        let sent = api.transport().last_request().unwrap();
        assert_eq!(sent.header("Authorization"), None);

        storage.set(STORAGE_TOKEN_KEY, "tok-9");
        api.list_users().await.unwrap();
        let sent = api.transport().last_request().unwrap();
        assert_eq!(sent.header("Authorization"), Some("Bearer tok-9"));
    }

    #[test]
    fn test_load_without_role_is_regular_user() {
        let storage = MemoryStorage::new();
        storage.set(STORAGE_TOKEN_KEY, "tok");
        let session = SessionStore::new(storage).load().unwrap();
        assert_eq!(session.role, Role::User);
    }

    #[test]
    fn test_load_without_token_is_none() {
        let storage = MemoryStorage::new();
        storage.set(STORAGE_ROLE_KEY, "admin");
        assert!(SessionStore::new(storage).load().is_none());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let storage = MemoryStorage::new();
        let sessions = SessionStore::new(storage.clone());
        sessions.save(&Session {
            token: "t".into(),
            role: Role::Admin,
        });
        assert_eq!(storage.len(), 2);
        sessions.clear();
        assert_eq!(storage.len(), 0);
    }
}
