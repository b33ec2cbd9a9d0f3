//! PropertyMatch 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth` / `session`: 认证状态与会话持久化
//! - `shell`: 跨页面共享的搜索状态
//! - `api`: 匹配服务与认证服务客户端
//! - `components`: UI 组件层

mod api;
mod auth;
mod config;
mod logging;
mod session;
mod shell;
mod components {
    pub mod admin;
    pub mod auth;
    pub mod comparison;
    pub mod home;
    mod icons;
    pub mod layout {
        pub mod footer;
        pub mod header;
    }
    pub mod not_found;
    pub mod results;
    pub mod search;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::admin::AdminPage;
use crate::components::auth::{ForgotPasswordPage, LoginPage, SignupPage};
use crate::components::comparison::ComparisonPage;
use crate::components::home::HomePage;
use crate::components::layout::footer::Footer;
use crate::components::layout::header::Header;
use crate::components::not_found::NotFoundPage;
use crate::components::results::ResultsPage;
use crate::components::search::SearchPage;
use crate::config::AppConfig;
use crate::shell::ShellState;

use leptos::prelude::*;
use tracing::info;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod guard;
    pub mod http;
    pub mod route;
    pub mod router;
    pub mod storage;
    pub mod timer;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Search => view! { <SearchPage /> }.into_any(),
        AppRoute::Results => view! { <ResultsPage /> }.into_any(),
        AppRoute::Comparison => view! { <ComparisonPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        AppRoute::Admin => view! { <AdminPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 0. 构建期配置与日志
    let config = AppConfig::from_build_env();
    logging::init(config.log_level);
    info!(api = %config.api_base_url, auth_api = %config.auth_api_base_url, "starting PropertyMatch");

    api::provide_api_clients(&config);
    provide_context(config);
    provide_context(ShellState::new());

    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 初始化认证状态（从 LocalStorage 恢复会话）
    init_auth(&auth_ctx);

    // 3. 获取访问级别信号，用于注入路由服务（解耦！）
    let access = auth_ctx.access_signal();

    view! {
        // 4. 路由器组件：注入访问级别信号实现守卫
        <Router access=access>
            <div class="min-h-screen flex flex-col bg-base-100">
                <Header />
                <main class="flex-1">
                    <RouterOutlet matcher=route_matcher />
                </main>
                <Footer />
            </div>
        </Router>
    }
}
