use super::{AuthCard, Notice, NoticeBanner, redirect_slot, schedule_login_redirect};
use crate::api::use_auth_api;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use propertymatch_shared::RegisterRequest;
use tracing::{info, warn};

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = use_auth_api();
    let router = use_router();
    let redirect = redirect_slot();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (notice, set_notice) = signal(Option::<Notice>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_notice.set(None);

        let req = RegisterRequest::new(
            username.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
            phone.get_untracked(),
        );
        let api = api.clone();
        spawn_local(async move {
            match api.register(req).await {
                Ok(_) => {
                    info!("registration succeeded");
                    set_notice.set(Some(Notice::success(
                        "Registration successful! You can now log in.",
                    )));
                    schedule_login_redirect(redirect, router);
                }
                Err(e) => {
                    warn!(error = %e, "registration failed");
                    set_notice.set(Some(Notice::error(e.user_message("Registration failed."))));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <AuthCard title="Create Account" subtitle="Sign up to save and compare your matches">
            <form class="space-y-4" on:submit=on_submit>
                <input
                    type="text"
                    name="username"
                    placeholder="Username"
                    class="input input-bordered w-full"
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    prop:value=username
                    required
                />
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
                <input
                    type="tel"
                    name="phone_number"
                    placeholder="Phone Number (e.g. +14155552671)"
                    class="input input-bordered w-full"
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                    prop:value=phone
                />
                <button type="submit" class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Registering..." } else { "Sign Up" }}
                </button>
                <NoticeBanner notice=notice />
            </form>
            <p class="text-sm text-center mt-4">
                "Already have an account? "
                <button class="link link-primary" on:click=move |_| router.navigate(AppRoute::Login)>
                    "Log In"
                </button>
            </p>
        </AuthCard>
    }
}
