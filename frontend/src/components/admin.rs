mod user_row;

use crate::api::use_auth_api;
use crate::components::icons::{RefreshCw, Shield};
use crate::web::guard::RequestGuard;
use leptos::prelude::*;
use leptos::task::spawn_local;
use propertymatch_shared::UserRecord;
use tracing::{debug, error, info};
use user_row::UserRow;

#[component]
pub fn AdminPage() -> impl IntoView {
    let api = use_auth_api();
    let guard = RequestGuard::new();

    let (users, set_users) = signal(Vec::<UserRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    on_cleanup({
        let guard = guard.clone();
        move || guard.invalidate()
    });

    let refresh = Callback::new(move |_: ()| {
        let ticket = guard.begin();
        let api = api.clone();
        set_loading.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let outcome = api.list_users().await;
            if !ticket.is_current() {
                debug!("stale user list discarded");
                return;
            }
            match outcome {
                Ok(list) => {
                    info!(count = list.len(), "users loaded");
                    set_users.set(list);
                }
                Err(e) => {
                    error!(error = %e, "failed to fetch users");
                    set_error_msg.set(Some(
                        e.user_message("Failed to fetch users. Check JWT/Admin Role."),
                    ));
                }
            }
            set_loading.set(false);
        });
    });

    // 初始加载
    refresh.run(());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-7xl mx-auto space-y-6">
                <div class="flex flex-col md:flex-row md:items-center justify-between gap-4">
                    <h1 class="text-2xl md:text-3xl font-bold flex items-center gap-3">
                        <Shield attr:class="h-7 w-7 text-primary" />
                        "Admin Dashboard: User Management"
                    </h1>
                    <button
                        class="btn btn-primary gap-2"
                        disabled=move || loading.get()
                        on:click=move |_| refresh.run(())
                    >
                        <RefreshCw attr:class=move || {
                            if loading.get() { "h-4 w-4 animate-spin" } else { "h-4 w-4" }
                        } />
                        "Refresh User List"
                    </button>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <Show
                    when=move || !(loading.get() && users.with(Vec::is_empty))
                    fallback=|| view! {
                        <div class="flex justify-center py-24">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                >
                    <div class="card bg-base-100 shadow-xl overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Username"</th>
                                    <th>"Email"</th>
                                    <th>"Phone"</th>
                                    <th>"Role"</th>
                                    <th>"OTP Expires"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || users.get()
                                    key=|user| user.id
                                    children=move |user| view! { <UserRow user=user users=users refresh=refresh /> }
                                />
                            </tbody>
                        </table>
                        <Show when=move || !loading.get() && users.with(Vec::is_empty)>
                            <p class="text-center text-base-content/60 py-8">"No users found."</p>
                        </Show>
                    </div>
                </Show>
            </div>
        </div>
    }
}
