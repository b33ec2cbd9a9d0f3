mod forgot_password;
mod login;
mod signup;

pub use forgot_password::ForgotPasswordPage;
pub use login::LoginPage;
pub use signup::SignupPage;

use crate::web::route::AppRoute;
use crate::web::router::RouterService;
use crate::web::timer::Timeout;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use tracing::warn;

/// 成功后跳转登录页前的停留时间
const REDIRECT_DELAY_MS: u32 = 2000;

/// 表单提示
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[component]
fn NoticeBanner(notice: ReadSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let class = if n.is_error {
                "alert alert-error text-sm py-2"
            } else {
                "alert alert-success text-sm py-2"
            };
            view! {
                <div role="alert" class=class>
                    <span>{n.text}</span>
                </div>
            }
        })
    }
}

/// 认证页面的卡片外框
#[component]
fn AuthCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="hero min-h-[80vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-2">
                    <h1 class="text-3xl font-bold">{title}</h1>
                    <p class="text-base-content/70">{subtitle}</p>
                </div>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <div class="card-body">{children()}</div>
                </div>
            </div>
        </div>
    }
}

type RedirectSlot = StoredValue<Option<Timeout>, LocalStorage>;

fn redirect_slot() -> RedirectSlot {
    StoredValue::new_local(None)
}

/// 延迟跳转到登录页，组件卸载时自动取消
fn schedule_login_redirect(slot: RedirectSlot, router: RouterService) {
    match Timeout::new(REDIRECT_DELAY_MS, move || router.navigate(AppRoute::Login)) {
        Ok(timeout) => slot.set_value(Some(timeout)),
        Err(e) => {
            warn!(error = ?e, "failed to schedule redirect");
            router.navigate(AppRoute::Login);
        }
    }
}
