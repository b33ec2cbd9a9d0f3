use crate::api::use_auth_api;
use crate::components::icons::{Key, Mail, Trash2};
use crate::web::timer::Timeout;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;
use propertymatch_shared::UserRecord;
use propertymatch_shared::date::format_expiry;
use tracing::{info, warn};

/// 行内提示的展示时长
const MESSAGE_TTL_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    ResetOtp,
    SetPassword,
    Delete,
}

impl RowAction {
    /// 需要确认的操作返回确认文本
    pub fn confirm_text(&self, user: &UserRecord) -> Option<String> {
        match self {
            RowAction::ResetOtp => Some(format!(
                "Are you sure you want to send a password reset OTP to {}?",
                user.email
            )),
            RowAction::Delete => Some(format!(
                "Are you sure you want to DELETE user {}? This cannot be undone.",
                user.username
            )),
            RowAction::SetPassword => None,
        }
    }

    pub fn success_text(&self, user: &UserRecord) -> String {
        match self {
            RowAction::ResetOtp => format!("OTP sent to {}.", user.email),
            RowAction::SetPassword => format!("Password for {} successfully set.", user.username),
            RowAction::Delete => format!("User {} deleted.", user.username),
        }
    }

    /// 成功后是否需要刷新用户列表
    pub fn refreshes_list(&self) -> bool {
        matches!(self, RowAction::ResetOtp | RowAction::Delete)
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// 空输入或取消均返回 None
fn prompt_password() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.prompt_with_message("Enter the new password for this user:").ok())
        .flatten()
        .filter(|p| !p.is_empty())
}

#[component]
pub fn UserRow(
    /// 行的初始数据
    user: UserRecord,
    /// 全量用户列表，刷新后行内容从这里取最新值
    users: ReadSignal<Vec<UserRecord>>,
    refresh: Callback<()>,
) -> impl IntoView {
    let api = StoredValue::new(use_auth_api());
    let id = user.id;
    let current = Signal::derive(move || {
        users
            .with(|list| list.iter().find(|u| u.id == id).cloned())
            .unwrap_or_else(|| user.clone())
    });

    let (busy, set_busy) = signal(false);
    let (message, set_message) = signal(Option::<(String, bool)>::None);
    let clear_timer = StoredValue::<Option<Timeout>, LocalStorage>::new_local(None);

    let flash = move |text: String, is_error: bool| {
        set_message.set(Some((text, is_error)));
        let timer = Timeout::new(MESSAGE_TTL_MS, move || set_message.set(None)).ok();
        clear_timer.set_value(timer);
    };

    let run = move |action: RowAction| {
        let user = current.get_untracked();

        let new_password = match action {
            RowAction::SetPassword => match prompt_password() {
                Some(p) => Some(p),
                None => return,
            },
            _ => {
                if let Some(question) = action.confirm_text(&user) {
                    if !confirm(&question) {
                        return;
                    }
                }
                None
            }
        };

        set_busy.set(true);
        let api = api.get_value();
        spawn_local(async move {
            let outcome = match (action, new_password) {
                (RowAction::ResetOtp, _) => api.admin_reset_otp(user.id).await,
                (RowAction::SetPassword, Some(password)) => {
                    api.admin_set_password(user.id, password).await
                }
                (RowAction::SetPassword, None) => Ok(None),
                (RowAction::Delete, _) => api.delete_user(user.id).await,
            };

            match outcome {
                Ok(_) => {
                    info!(user_id = user.id, ?action, "admin action succeeded");
                    flash(action.success_text(&user), false);
                    if action.refreshes_list() {
                        refresh.run(());
                    }
                }
                Err(e) => {
                    warn!(user_id = user.id, ?action, error = %e, "admin action failed");
                    flash(e.user_message("An error occurred"), true);
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <tr class="hover">
            <td class="font-mono text-xs">{move || current.with(|u| u.id)}</td>
            <td class="font-medium">{move || current.with(|u| u.username.clone())}</td>
            <td>{move || current.with(|u| u.email.clone())}</td>
            <td>{move || current.with(|u| u.phone().to_string())}</td>
            <td>
                <span class=move || {
                    if current.with(|u| u.role.is_admin()) { "badge badge-error" } else { "badge badge-info" }
                }>
                    {move || current.with(|u| u.role.as_str().to_uppercase())}
                </span>
            </td>
            <td class="text-xs">{move || current.with(|u| format_expiry(u.reset_otp_expires.as_deref()))}</td>
            <td>
                <div class="flex items-center gap-1">
                    <button
                        class="btn btn-ghost btn-sm btn-square text-info"
                        title="Send OTP Reset Email"
                        disabled=move || busy.get()
                        on:click=move |_| run(RowAction::ResetOtp)
                    >
                        <Mail attr:class="h-4 w-4" />
                    </button>
                    <button
                        class="btn btn-ghost btn-sm btn-square text-warning"
                        title="Directly Set New Password"
                        disabled=move || busy.get()
                        on:click=move |_| run(RowAction::SetPassword)
                    >
                        <Key attr:class="h-4 w-4" />
                    </button>
                    <button
                        class="btn btn-ghost btn-sm btn-square text-error"
                        title="Delete User"
                        disabled=move || busy.get()
                        on:click=move |_| run(RowAction::Delete)
                    >
                        <Trash2 attr:class="h-4 w-4" />
                    </button>
                </div>
                {move || message.get().map(|(text, is_error)| {
                    let class = if is_error { "text-xs text-error mt-1" } else { "text-xs text-success mt-1" };
                    view! { <div class=class>{text}</div> }
                })}
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propertymatch_shared::Role;

    fn user() -> UserRecord {
        UserRecord {
            id: 7,
            username: "ann".into(),
            email: "ann@example.com".into(),
            phone_number: None,
            role: Role::User,
            reset_otp_expires: None,
        }
    }

    #[test]
    fn test_confirm_only_for_otp_and_delete() {
        let u = user();
        assert!(
            RowAction::ResetOtp
                .confirm_text(&u)
                .unwrap()
                .contains("ann@example.com")
        );
        assert!(RowAction::Delete.confirm_text(&u).unwrap().contains("DELETE user ann"));
        assert_eq!(RowAction::SetPassword.confirm_text(&u), None);
    }

    #[test]
    fn test_success_text() {
        let u = user();
        assert_eq!(RowAction::ResetOtp.success_text(&u), "OTP sent to ann@example.com.");
        assert_eq!(
            RowAction::SetPassword.success_text(&u),
            "Password for ann successfully set."
        );
        assert_eq!(RowAction::Delete.success_text(&u), "User ann deleted.");
    }

    #[test]
    fn test_refresh_after_otp_and_delete_only() {
        assert!(RowAction::ResetOtp.refreshes_list());
        assert!(RowAction::Delete.refreshes_list());
        assert!(!RowAction::SetPassword.refreshes_list());
    }
}
