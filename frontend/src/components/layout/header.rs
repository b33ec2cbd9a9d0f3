use crate::auth::{AuthState, logout, use_auth};
use crate::components::icons::{BarChart3, Home, LogIn, LogOut, Menu, Search, Shield, X};
use crate::web::route::{Access, AppRoute};
use crate::web::router::use_router;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Route(AppRoute),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

/// 导航项：公共页面 + 按访问级别追加的认证入口
pub fn nav_items(access: Access) -> Vec<NavItem> {
    let mut items = vec![
        NavItem {
            label: "Home",
            target: NavTarget::Route(AppRoute::Home),
        },
        NavItem {
            label: "Search",
            target: NavTarget::Route(AppRoute::Search),
        },
    ];

    if access.is_admin() {
        items.push(NavItem {
            label: "Admin",
            target: NavTarget::Route(AppRoute::Admin),
        });
    }

    items.push(if access.is_authenticated() {
        NavItem {
            label: "Logout",
            target: NavTarget::Logout,
        }
    } else {
        NavItem {
            label: "Login",
            target: NavTarget::Route(AppRoute::Login),
        }
    });

    items
}

fn nav_icon(target: NavTarget) -> AnyView {
    match target {
        NavTarget::Route(AppRoute::Home) => view! { <Home attr:class="h-4 w-4" /> }.into_any(),
        NavTarget::Route(AppRoute::Search) => view! { <Search attr:class="h-4 w-4" /> }.into_any(),
        NavTarget::Route(AppRoute::Admin) => view! { <Shield attr:class="h-4 w-4" /> }.into_any(),
        NavTarget::Route(_) => view! { <LogIn attr:class="h-4 w-4" /> }.into_any(),
        NavTarget::Logout => view! { <LogOut attr:class="h-4 w-4" /> }.into_any(),
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let current = router.current_route();
    let (menu_open, set_menu_open) = signal(false);

    let go = move |route: AppRoute| {
        router.navigate(route);
        set_menu_open.set(false);
    };

    let pick = move |target: NavTarget| match target {
        NavTarget::Route(route) => go(route),
        NavTarget::Logout => {
            logout(&auth);
            go(AppRoute::Home);
        }
    };

    let items = move || nav_items(auth.state.with(AuthState::access));

    let item_class = move |target: NavTarget, base: &'static str| {
        move || {
            if target == NavTarget::Route(current.get()) {
                format!("{} btn-active text-primary", base)
            } else {
                base.to_string()
            }
        }
    };

    view! {
        <header class="navbar bg-base-100/95 backdrop-blur shadow-sm sticky top-0 z-50 px-4">
            <div class="flex-1">
                <button class="btn btn-ghost gap-2" on:click=move |_| go(AppRoute::Home)>
                    <div class="p-2 bg-primary rounded-xl text-primary-content">
                        <BarChart3 attr:class="h-5 w-5" />
                    </div>
                    <div class="text-left">
                        <div class="text-lg font-bold">"PropertyMatch"</div>
                        <div class="text-xs text-base-content/60">"AI-Powered"</div>
                    </div>
                </button>
            </div>

            <nav class="hidden md:flex items-center gap-1" role="navigation">
                <For
                    each=items
                    key=|item| item.label
                    children=move |item| {
                        let target = item.target;
                        view! {
                            <button
                                class=item_class(target, "btn btn-ghost btn-sm gap-2")
                                on:click=move |_| pick(target)
                            >
                                {nav_icon(target)}
                                {item.label}
                            </button>
                        }
                    }
                />
            </nav>

            <div class="flex-none gap-2 ml-2">
                <button class="btn btn-primary btn-sm hidden sm:inline-flex" on:click=move |_| go(AppRoute::Search)>
                    "Start Matching"
                </button>
                <button
                    class="btn btn-ghost btn-square md:hidden"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() {
                        view! { <X attr:class="h-5 w-5" /> }.into_any()
                    } else {
                        view! { <Menu attr:class="h-5 w-5" /> }.into_any()
                    }}
                </button>
            </div>
        </header>

        <Show when=move || menu_open.get()>
            <div class="md:hidden bg-base-100 shadow-lg border-t border-base-200 px-4 py-3 flex flex-col gap-1 sticky top-16 z-40">
                <For
                    each=items
                    key=|item| item.label
                    children=move |item| {
                        let target = item.target;
                        view! {
                            <button
                                class=item_class(target, "btn btn-ghost justify-start gap-2")
                                on:click=move |_| pick(target)
                            >
                                {nav_icon(target)}
                                {item.label}
                            </button>
                        }
                    }
                />
                <button class="btn btn-primary mt-2" on:click=move |_| go(AppRoute::Search)>
                    "Start Matching"
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(access: Access) -> Vec<&'static str> {
        nav_items(access).iter().map(|i| i.label).collect()
    }

    #[test]
    fn test_anonymous_sees_login() {
        assert_eq!(labels(Access::Anonymous), vec!["Home", "Search", "Login"]);
    }

    #[test]
    fn test_member_sees_logout_only() {
        assert_eq!(labels(Access::Member), vec!["Home", "Search", "Logout"]);
    }

    #[test]
    fn test_admin_sees_admin_link() {
        assert_eq!(labels(Access::Admin), vec!["Home", "Search", "Admin", "Logout"]);
        assert!(
            nav_items(Access::Admin)
                .iter()
                .any(|i| i.target == NavTarget::Route(AppRoute::Admin))
        );
    }
}
