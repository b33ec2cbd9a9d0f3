use super::{AuthCard, Notice, NoticeBanner, redirect_slot, schedule_login_redirect};
use crate::api::use_auth_api;
use crate::components::icons::{Key, Mail, MessageSquare};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use propertymatch_shared::{MessageResponse, OtpRequest, ResetPasswordRequest};
use tracing::{info, warn};

const OTP_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    RequestOtp,
    Reset,
}

/// OTP 请求成功时展示的文本
fn otp_sent_text(res: Option<&MessageResponse>) -> String {
    res.and_then(MessageResponse::text)
        .unwrap_or("OTP request sent.")
        .to_string()
}

/// 只保留前 6 个字符
fn clamp_otp(raw: &str) -> String {
    raw.trim().chars().take(OTP_LENGTH).collect()
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let api = use_auth_api();
    let router = use_router();
    let redirect = redirect_slot();

    let (step, set_step) = signal(Step::RequestOtp);
    let (email, set_email) = signal(String::new());
    let (send_via_sms, set_send_via_sms) = signal(false);
    let (otp, set_otp) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (notice, set_notice) = signal(Option::<Notice>::None);

    let on_request_otp = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            set_loading.set(true);
            set_notice.set(None);

            let req = OtpRequest {
                email: email.get_untracked(),
                send_via_sms: send_via_sms.get_untracked(),
            };
            let sms = req.send_via_sms;
            let api = api.clone();
            spawn_local(async move {
                match api.request_otp(req).await {
                    Ok(res) => {
                        info!(sms, "otp requested");
                        set_notice.set(Some(Notice::success(otp_sent_text(res.as_ref()))));
                        set_step.set(Step::Reset);
                    }
                    Err(e) => {
                        warn!(error = %e, "otp request failed");
                        set_notice.set(Some(Notice::error(e.user_message("Error requesting OTP."))));
                    }
                }
                set_loading.set(false);
            });
        }
    };

    let on_reset = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);
        set_notice.set(None);

        let req = ResetPasswordRequest {
            email: email.get_untracked(),
            otp: clamp_otp(&otp.get_untracked()),
            new_password: new_password.get_untracked(),
        };
        let api = api.clone();
        spawn_local(async move {
            match api.reset_password(req).await {
                Ok(_) => {
                    info!("password reset");
                    set_notice.set(Some(Notice::success(
                        "Password successfully reset. Redirecting to login...",
                    )));
                    schedule_login_redirect(redirect, router);
                }
                Err(e) => {
                    warn!(error = %e, "password reset failed");
                    set_notice.set(Some(Notice::error(
                        e.user_message("Reset failed. Check OTP/Password."),
                    )));
                }
            }
            set_loading.set(false);
        });
    };

    let channel_class = move |sms: bool| {
        move || {
            if send_via_sms.get() == sms {
                "btn btn-sm btn-primary flex-1 gap-2"
            } else {
                "btn btn-sm btn-ghost bg-base-200 flex-1 gap-2"
            }
        }
    };

    view! {
        <AuthCard title="Reset Password" subtitle="We'll send you a one-time code">
            <Show
                when=move || step.get() == Step::RequestOtp
                fallback=move || view! {
                    <form class="space-y-4" on:submit=on_reset.clone()>
                        <input
                            type="text"
                            placeholder="Enter 6-digit OTP"
                            maxlength=OTP_LENGTH.to_string()
                            class="input input-bordered w-full tracking-widest"
                            on:input=move |ev| set_otp.set(clamp_otp(&event_target_value(&ev)))
                            prop:value=otp
                            required
                        />
                        <input
                            type="password"
                            placeholder="New Password"
                            class="input input-bordered w-full"
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                            prop:value=new_password
                            required
                        />
                        <button type="submit" class="btn btn-primary w-full gap-2" disabled=move || loading.get()>
                            <Key attr:class="h-4 w-4" />
                            {move || if loading.get() { "Resetting..." } else { "Reset Password" }}
                        </button>
                    </form>
                }
            >
                <form class="space-y-4" on:submit=on_request_otp.clone()>
                    <input
                        type="email"
                        placeholder="Enter your email"
                        class="input input-bordered w-full"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
                        required
                    />
                    <div>
                        <p class="text-sm mb-2">"Send code via:"</p>
                        <div class="flex gap-2">
                            <button type="button" class=channel_class(false) on:click=move |_| set_send_via_sms.set(false)>
                                <Mail attr:class="h-4 w-4" />
                                "Email"
                            </button>
                            <button type="button" class=channel_class(true) on:click=move |_| set_send_via_sms.set(true)>
                                <MessageSquare attr:class="h-4 w-4" />
                                "SMS"
                            </button>
                        </div>
                    </div>
                    <button type="submit" class="btn btn-primary w-full" disabled=move || loading.get()>
                        {move || if loading.get() { "Sending OTP..." } else { "Request OTP" }}
                    </button>
                </form>
            </Show>

            <div class="mt-4">
                <NoticeBanner notice=notice />
            </div>

            <p class="text-sm text-center mt-4">
                <button class="link link-primary" on:click=move |_| router.navigate(AppRoute::Login)>
                    "Back to Login"
                </button>
            </p>
        </AuthCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_sent_text_prefers_backend_message() {
        let res = MessageResponse {
            msg: Some("OTP sent to your phone".into()),
            ..Default::default()
        };
        assert_eq!(otp_sent_text(Some(&res)), "OTP sent to your phone");
        assert_eq!(otp_sent_text(None), "OTP request sent.");
        assert_eq!(otp_sent_text(Some(&MessageResponse::default())), "OTP request sent.");
    }

    #[test]
    fn test_clamp_otp() {
        assert_eq!(clamp_otp(" 1234567 "), "123456");
        assert_eq!(clamp_otp("12"), "12");
    }
}
