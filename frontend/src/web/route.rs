//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其访问规则。

use std::fmt::Display;

/// 访问级别，由认证状态派生
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    #[default]
    Anonymous,
    Member,
    Admin,
}

impl Access {
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Access::Anonymous)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Access::Admin)
    }
}

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    Search,
    Results,
    Comparison,
    Login,
    Signup,
    ForgotPassword,
    /// 用户管理 (需要管理员角色)
    Admin,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        match path {
            "/" | "/home" => Self::Home,
            "/search" => Self::Search,
            "/results" => Self::Results,
            "/comparison" => Self::Comparison,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/forgot-password" => Self::ForgotPassword,
            "/admin" => Self::Admin,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Search => "/search",
            Self::Results => "/results",
            Self::Comparison => "/comparison",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::ForgotPassword => "/forgot-password",
            Self::Admin => "/admin",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要管理员角色**
    pub fn requires_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// 定义已认证用户是否应该离开此路由（登录/注册/找回密码）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Signup | Self::ForgotPassword)
    }

    /// 守卫失败时的重定向目标
    pub fn guard_redirect() -> Self {
        Self::Home
    }

    /// 在给定访问级别下，该路由需要重定向到哪里；`None` 表示放行
    pub fn guard(&self, access: Access) -> Option<AppRoute> {
        if self.requires_admin() && !access.is_admin() {
            return Some(Self::guard_redirect());
        }
        if self.should_redirect_when_authenticated() && access.is_authenticated() {
            return Some(Self::guard_redirect());
        }
        None
    }

    /// 访问级别变化后（登录、登出、会话恢复），当前页面应跳转到哪里
    ///
    /// 只在守卫不再放行且目标与当前页面不同时返回目标。
    pub fn redirect_on_access_change(self, access: Access) -> Option<AppRoute> {
        self.guard(access).filter(|target| *target != self)
    }

    /// 守卫后实际落地的路由
    pub fn resolve(self, access: Access) -> AppRoute {
        self.guard(access).unwrap_or(self)
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AppRoute; 8] = [
        AppRoute::Home,
        AppRoute::Search,
        AppRoute::Results,
        AppRoute::Comparison,
        AppRoute::Login,
        AppRoute::Signup,
        AppRoute::ForgotPassword,
        AppRoute::Admin,
    ];

    #[test]
    fn test_path_roundtrip() {
        for route in ALL {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/search/"), AppRoute::Search);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn test_admin_unreachable_without_admin_role() {
        assert_eq!(AppRoute::Admin.resolve(Access::Anonymous), AppRoute::Home);
        assert_eq!(AppRoute::Admin.resolve(Access::Member), AppRoute::Home);
        assert_eq!(AppRoute::Admin.resolve(Access::Admin), AppRoute::Admin);
    }

    #[test]
    fn test_auth_pages_redirect_when_signed_in() {
        for route in [AppRoute::Login, AppRoute::Signup, AppRoute::ForgotPassword] {
            assert_eq!(route.resolve(Access::Anonymous), route);
            assert_eq!(route.resolve(Access::Member), AppRoute::Home);
            assert_eq!(route.resolve(Access::Admin), AppRoute::Home);
        }
    }

    #[test]
    fn test_public_pages_always_pass() {
        for route in [
            AppRoute::Home,
            AppRoute::Search,
            AppRoute::Results,
            AppRoute::Comparison,
            AppRoute::NotFound,
        ] {
            for access in [Access::Anonymous, Access::Member, Access::Admin] {
                assert_eq!(route.guard(access), None);
            }
        }
    }

    #[test]
    fn test_redirect_on_access_change() {
        assert_eq!(
            AppRoute::Login.redirect_on_access_change(Access::Member),
            Some(AppRoute::Home)
        );
        assert_eq!(
            AppRoute::Signup.redirect_on_access_change(Access::Admin),
            Some(AppRoute::Home)
        );
        assert_eq!(
            AppRoute::Admin.redirect_on_access_change(Access::Anonymous),
            Some(AppRoute::Home)
        );
        assert_eq!(
            AppRoute::Admin.redirect_on_access_change(Access::Member),
            Some(AppRoute::Home)
        );
        assert_eq!(AppRoute::Admin.redirect_on_access_change(Access::Admin), None);
        assert_eq!(AppRoute::Results.redirect_on_access_change(Access::Anonymous), None);
        assert_eq!(AppRoute::Home.redirect_on_access_change(Access::Anonymous), None);
        assert_eq!(AppRoute::Login.redirect_on_access_change(Access::Anonymous), None);
    }
}
