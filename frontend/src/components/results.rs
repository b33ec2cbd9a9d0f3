mod match_card;

use crate::api::use_match_api;
use crate::components::icons::{ArrowRight, Home, MapPin, Search};
use crate::shell::use_shell;
use crate::web::guard::RequestGuard;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use match_card::MatchCard;
use propertymatch_shared::display::{
    description_preview, price_label, results_headline, sale_headline,
};
use propertymatch_shared::{MatchResult, SaleListing, ScrapeResponse};
use tracing::{debug, error, info};

/// 结果页加载状态
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Loaded(ScrapeResponse),
    /// 请求失败，结果清空并显示错误文本
    Failed(String),
}

impl FetchState {
    pub fn matches(&self) -> &[MatchResult] {
        match self {
            FetchState::Loaded(res) => &res.matches,
            _ => &[],
        }
    }

    pub fn sale_listing(&self) -> Option<&SaleListing> {
        match self {
            FetchState::Loaded(res) => res.sale_listing.as_ref(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let shell = use_shell();
    let router = use_router();

    view! {
        <Show
            when=move || shell.search.with(Option::is_some)
            fallback=move || view! {
                <div class="min-h-[60vh] flex items-center justify-center px-4">
                    <div class="card bg-base-100 shadow-xl max-w-md w-full">
                        <div class="card-body items-center text-center">
                            <Search attr:class="h-12 w-12 text-base-content/40" />
                            <h2 class="card-title">"No search data"</h2>
                            <p class="text-base-content/70">"Start a search to see matching rentals."</p>
                            <button class="btn btn-primary gap-2 mt-2" on:click=move |_| router.navigate(AppRoute::Search)>
                                "Go to Search"
                                <ArrowRight attr:class="h-4 w-4" />
                            </button>
                        </div>
                    </div>
                </div>
            }
        >
            <ResultsDashboard />
        </Show>
    }
}

#[component]
fn ResultsDashboard() -> impl IntoView {
    let shell = use_shell();
    let router = use_router();
    let api = use_match_api();
    let guard = RequestGuard::new();
    let (state, set_state) = signal(FetchState::Loading);

    on_cleanup({
        let guard = guard.clone();
        move || guard.invalidate()
    });

    // 搜索请求变化 (含首次挂载) 时重新拉取
    Effect::new(move |_| {
        let Some(request) = shell.search.get() else {
            return;
        };
        let ticket = guard.begin();
        let api = api.clone();
        set_state.set(FetchState::Loading);

        spawn_local(async move {
            let outcome = api.find_matches(&request.url).await;
            if !ticket.is_current() {
                debug!(url = %request.url, "stale results discarded");
                return;
            }
            match outcome {
                Ok(res) => {
                    info!(count = res.matches.len(), "results loaded");
                    shell.sale_listing.set(res.sale_listing.clone());
                    set_state.set(FetchState::Loaded(res));
                }
                Err(e) => {
                    error!(error = %e, "failed to load results");
                    shell.sale_listing.set(None);
                    set_state.set(FetchState::Failed(
                        e.user_message("Failed to load results."),
                    ));
                }
            }
        });
    });

    let on_compare = Callback::new(move |result: MatchResult| shell.compare(router, result));
    let search_url = move || shell.search.with(|s| s.as_ref().map(|r| r.url.clone()).unwrap_or_default());

    view! {
        <Show
            when=move || state.with(|s| *s != FetchState::Loading)
            fallback=|| view! {
                <div class="min-h-[60vh] flex items-center justify-center">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <div class="max-w-7xl mx-auto px-4 py-12 space-y-8">
                <div class="card bg-base-100 shadow-lg border-l-4 border-primary">
                    <div class="card-body">
                        <h1 class="text-2xl font-bold">{move || state.with(|s| results_headline(s.matches().len()))}</h1>
                        <p class="text-base-content/70 break-words">
                            "For Sale Listing: "
                            <span class="text-primary font-medium">
                                {move || {
                                    let url = search_url();
                                    state.with(|s| sale_headline(s.sale_listing(), &url).to_string())
                                }}
                            </span>
                        </p>
                        {move || state.with(|s| s.sale_listing().cloned()).map(|listing| view! { <SaleSummary listing=listing /> })}
                        {move || state.with(|s| s.error().map(str::to_string)).map(|msg| view! {
                            <div role="alert" class="alert alert-error mt-4">
                                <span>{msg}</span>
                            </div>
                        })}
                    </div>
                </div>

                {move || {
                    let matches = state.with(|s| s.matches().to_vec());
                    if matches.is_empty() {
                        view! {
                            <div class="card bg-warning/10 border border-warning/40 max-w-lg mx-auto">
                                <div class="card-body items-center text-center">
                                    <Home attr:class="h-12 w-12 text-warning" />
                                    <h2 class="text-2xl font-bold">"No Matches Found"</h2>
                                    <p class="text-base-content/70">"The AI could not find matches for this property. Try another URL."</p>
                                </div>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div>
                                <h2 class="text-2xl font-bold mb-6">"Top Matching Rentals"</h2>
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                                    {matches
                                        .into_iter()
                                        .map(|result| view! { <MatchCard result=result on_compare=on_compare /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </Show>
    }
}

#[component]
fn SaleSummary(listing: SaleListing) -> impl IntoView {
    let price = price_label(listing.price.as_ref());
    let rooms = listing
        .rooms
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "N/A".to_string());
    let location = listing.location.clone().unwrap_or_else(|| "N/A".to_string());
    let title = listing.title.clone().unwrap_or_default();

    view! {
        <div class="flex flex-col sm:flex-row gap-6 mt-4 pt-4 border-t border-base-200">
            <div class="sm:w-1/3 shrink-0">
                <img
                    src=listing.cover_image().to_string()
                    alt=if title.is_empty() { "Sale Property".to_string() } else { title.clone() }
                    class="w-full h-48 object-cover rounded-xl shadow-md"
                />
            </div>
            <div class="sm:w-2/3 space-y-2">
                <h3 class="text-xl font-semibold">{title}</h3>
                <p class="text-sm flex flex-wrap gap-x-3">
                    <span><span class="font-medium">"Price: "</span>{price}</span>
                    <span><span class="font-medium">"Rooms: "</span>{rooms}</span>
                    <span class="flex items-center gap-1">
                        <MapPin attr:class="h-3 w-3" />
                        <span class="font-medium">"Location: "</span>{location}
                    </span>
                </p>
                <p class="text-sm text-base-content/70">{description_preview(listing.desc.as_deref())}</p>
                {listing.url.clone().map(|url| view! {
                    <a href=url target="_blank" rel="noopener noreferrer" class="link link-primary text-sm font-medium">
                        "View Original Listing →"
                    </a>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_state_has_no_matches() {
        let state = FetchState::Failed("boom".into());
        assert!(state.matches().is_empty());
        assert!(state.sale_listing().is_none());
        assert_eq!(state.error(), Some("boom"));
    }

    #[test]
    fn test_missing_matches_render_empty_state() {
        let res: ScrapeResponse =
            serde_json::from_str(r#"{"sale_listing":{"title":"Villa"}}"#).unwrap();
        let state = FetchState::Loaded(res);
        assert!(state.matches().is_empty());
        assert_eq!(results_headline(state.matches().len()), "Found 0 Similar Rental Properties");
        assert_eq!(
            state.sale_listing().and_then(|l| l.title.as_deref()),
            Some("Villa")
        );
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_loading_has_nothing() {
        assert!(FetchState::Loading.matches().is_empty());
        assert!(FetchState::Loading.error().is_none());
    }
}
