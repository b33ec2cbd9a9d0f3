//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的访问级别信号来检查认证状态。

use crate::api::AuthApi;
use crate::session::{SessionStore, sign_in};
use crate::web::route::Access;
use crate::web::storage::LocalStorage;
use leptos::prelude::*;
use propertymatch_shared::{Role, Session};
use tracing::{info, warn};

/// 认证状态
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// 当前会话（未登录时为 None）
    pub session: Option<Session>,
}

impl AuthState {
    pub fn access(&self) -> Access {
        match &self.session {
            None => Access::Anonymous,
            Some(s) if s.is_admin() => Access::Admin,
            Some(_) => Access::Member,
        }
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取访问级别信号（用于路由服务注入）
    pub fn access_signal(&self) -> Signal<Access> {
        let state = self.state;
        Signal::derive(move || state.with(AuthState::access))
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从 LocalStorage 恢复上次的会话。令牌有效期由后端判定，这里不做校验。
pub fn init_auth(ctx: &AuthContext) {
    let session = SessionStore::new(LocalStorage).load();
    if let Some(s) = &session {
        info!(role = %s.role, "session restored");
    }
    ctx.set_state.set(AuthState { session });
}

/// 登录并更新状态
///
/// 成功时返回角色；失败时返回可直接展示的错误文本，状态保持未登录。
pub async fn login(
    ctx: &AuthContext,
    api: &AuthApi,
    email: String,
    password: String,
) -> Result<Role, String> {
    match sign_in(api, email, password).await {
        Ok(session) => {
            let role = session.role;
            ctx.set_state.set(AuthState {
                session: Some(session),
            });
            Ok(role)
        }
        Err(e) => {
            warn!(error = %e, "login failed");
            Err(e.user_message("Login failed"))
        }
    }
}

/// 注销并清除状态
///
/// 导航将由路由服务的访问级别监听自动处理。
pub fn logout(ctx: &AuthContext) {
    SessionStore::new(LocalStorage).clear();
    ctx.set_state.set(AuthState::default());
    info!("signed out");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            token: "t".into(),
            role,
        }
    }

    #[test]
    fn test_access_levels() {
        assert_eq!(AuthState::default().access(), Access::Anonymous);
        let member = AuthState {
            session: Some(session(Role::User)),
        };
        assert_eq!(member.access(), Access::Member);

        let admin = AuthState {
            session: Some(session(Role::Admin)),
        };
        assert_eq!(admin.access(), Access::Admin);
    }
}
