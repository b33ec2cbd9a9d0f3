use super::{AuthCard, Notice, NoticeBanner};
use crate::api::use_auth_api;
use crate::auth::{login, use_auth};
use crate::components::icons::LogIn;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_auth_api();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (notice, set_notice) = signal(Option::<Notice>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_notice.set(None);

        let api = api.clone();
        spawn_local(async move {
            // 成功后访问级别变化，路由守卫会把用户送回首页
            match login(&auth, &api, email.get_untracked(), password.get_untracked()).await {
                Ok(role) => info!(%role, "logged in"),
                Err(msg) => set_notice.set(Some(Notice::error(msg))),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <AuthCard title="Welcome Back" subtitle="Log in to continue matching properties">
            <form class="space-y-4" on:submit=on_submit>
                <NoticeBanner notice=notice />
                <input
                    type="email"
                    name="email"
                    placeholder="Email"
                    class="input input-bordered w-full"
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    prop:value=email
                    required
                />
                <input
                    type="password"
                    name="password"
                    placeholder="Password"
                    class="input input-bordered w-full"
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    prop:value=password
                    required
                />
                <button type="submit" class="btn btn-primary w-full gap-2" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() {
                        view! { <span class="loading loading-spinner"></span> "Logging In..." }.into_any()
                    } else {
                        view! { <LogIn attr:class="h-4 w-4" /> "Log In" }.into_any()
                    }}
                </button>
            </form>
            <div class="flex justify-between text-sm mt-4">
                <button class="link link-primary" on:click=move |_| router.navigate(AppRoute::ForgotPassword)>
                    "Forgot Password?"
                </button>
                <button class="link link-primary" on:click=move |_| router.navigate(AppRoute::Signup)>
                    "Sign Up"
                </button>
            </div>
        </AuthCard>
    }
}
