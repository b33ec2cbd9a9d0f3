use crate::components::icons::{ArrowLeft, ExternalLink, Search};
use crate::shell::use_shell;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use propertymatch_shared::display::{AmenityDiff, ScoreTier, platform_badge_class, score_breakdown};
use propertymatch_shared::{MatchResult, SaleListing};

#[component]
pub fn ComparisonPage() -> impl IntoView {
    let shell = use_shell();
    let router = use_router();

    move || match shell.selected.get() {
        Some(result) => view! {
            <ComparisonView result=result listing=shell.sale_listing.get_untracked() />
        }
        .into_any(),
        None => view! {
            <div class="min-h-[60vh] flex items-center justify-center px-4">
                <div class="card bg-base-100 shadow-xl max-w-md w-full">
                    <div class="card-body items-center text-center">
                        <Search attr:class="h-12 w-12 text-base-content/40" />
                        <p class="text-lg font-medium">"No property selected for comparison."</p>
                        <button class="btn btn-primary mt-2" on:click=move |_| router.navigate(AppRoute::Search)>
                            "Start a Search"
                        </button>
                    </div>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ComparisonView(result: MatchResult, listing: Option<SaleListing>) -> impl IntoView {
    let router = use_router();

    let tier = ScoreTier::from_score(result.score());
    let platform = result.platform().to_string();
    let bars = score_breakdown(&result);
    let diff = listing
        .as_ref()
        .and_then(|l| AmenityDiff::between(&l.amenities, &result.amenities));

    view! {
        <div class="max-w-7xl mx-auto px-4 py-12 space-y-8">
            <button class="btn btn-ghost gap-2" on:click=move |_| router.navigate(AppRoute::Results)>
                <ArrowLeft attr:class="h-5 w-5" />
                "Back to Results"
            </button>

            <div class="card lg:card-side bg-base-100 shadow-xl overflow-hidden">
                <figure class="lg:w-1/2">
                    <img src=result.image().to_string() alt=result.title().to_string() class="w-full h-72 lg:h-full object-cover" />
                </figure>
                <div class="card-body lg:w-1/2">
                    <div class="flex flex-wrap gap-2">
                        <span class=platform_badge_class(&platform)>{platform.clone()}</span>
                        <span class=tier.badge_class()>{format!("{:.0}%", result.score())}</span>
                    </div>
                    <h1 class="card-title text-2xl">{result.title().to_string()}</h1>
                    <p class="text-base-content/70">{tier.description()}</p>
                    {listing.as_ref().and_then(|l| l.title.clone()).map(|title| view! {
                        <p class="text-sm">
                            <span class="font-medium">"Compared with: "</span>
                            {title}
                        </p>
                    })}
                    <div class="card-actions mt-auto">
                        <a href=result.listing_url().to_string() target="_blank" rel="noopener noreferrer" class="btn btn-primary gap-2">
                            <ExternalLink attr:class="h-4 w-4" />
                            "View Listing"
                        </a>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                {bars
                    .into_iter()
                    .map(|bar| {
                        view! {
                            <div class="card bg-base-100 shadow-md">
                                <div class="card-body p-4 gap-2">
                                    <div class="flex justify-between">
                                        <span class="font-semibold">{bar.label}</span>
                                        <span class="font-bold">{format!("{}%", bar.percent)}</span>
                                    </div>
                                    <div class="w-full bg-base-300 h-3 rounded-full">
                                        <div
                                            class=format!("h-3 rounded-full {}", bar.color)
                                            style=format!("width: {}%", bar.percent)
                                        ></div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            {diff.map(|diff| view! { <AmenityComparison diff=diff /> })}
        </div>
    }
}

#[component]
fn AmenityComparison(diff: AmenityDiff) -> impl IntoView {
    let columns = [
        ("Shared Amenities", diff.shared, "badge-success"),
        ("Only in For-Sale Listing", diff.only_listing, "badge-info"),
        ("Only in Rental", diff.only_rental, "badge-secondary"),
    ];

    view! {
        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <h2 class="card-title">"Amenities Comparison"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {columns
                        .into_iter()
                        .map(|(title, items, badge)| {
                            view! {
                                <div>
                                    <h3 class="font-semibold mb-2">{format!("{} ({})", title, items.len())}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {items
                                            .into_iter()
                                            .map(|item| view! { <span class=format!("badge {}", badge)>{item}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
