use crate::components::icons::{BarChart3, ChevronDown, ExternalLink};
use leptos::prelude::*;
use propertymatch_shared::MatchResult;
use propertymatch_shared::display::{ScoreTier, platform_badge_class, to_percent};

#[component]
pub fn MatchCard(result: MatchResult, on_compare: Callback<MatchResult>) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    let score = result.score();
    let tier = ScoreTier::from_score(score);
    let title = result.title().to_string();
    let platform = result.platform().to_string();
    let image = result.image().to_string();
    let listing_url = result.listing_url().to_string();
    let detail_url = listing_url.clone();
    let rental_index = result
        .rental_index
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "N/A".to_string());

    let sub_scores = [
        ("Description", result.text_similarity, "text-info"),
        ("Features", result.structured_similarity, "text-secondary"),
        ("Visual", result.image_similarity, "text-accent"),
    ];

    view! {
        <div class="card bg-base-100 shadow-lg hover:shadow-2xl transition-shadow overflow-hidden h-full">
            <figure class="relative h-56 bg-base-300">
                <img src=image alt=title.clone() loading="lazy" class="w-full h-full object-cover" />
                <span class=format!("{} absolute top-4 left-4", platform_badge_class(&platform))>{platform.clone()}</span>
                <span class=format!("{} absolute top-4 right-4 font-black", tier.badge_class())>
                    {format!("{:.0}%", score)}
                </span>
            </figure>

            <div class="card-body p-5 gap-3">
                <h3 class="card-title text-lg line-clamp-2">{title}</h3>

                <div class="grid grid-cols-3 gap-2 text-center">
                    {sub_scores
                        .into_iter()
                        .map(|(label, value, color)| {
                            view! {
                                <div class="bg-base-200 rounded-lg p-2">
                                    <div class="text-xs text-base-content/60">{label}</div>
                                    <div class=format!("font-bold text-lg {}", color)>
                                        {format!("{}%", to_percent(value))}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="text-xs bg-base-200 rounded-lg p-2 font-medium">{tier.description()}</p>

                <button
                    class="btn btn-ghost btn-sm justify-between text-primary"
                    on:click=move |_| set_expanded.update(|e| *e = !*e)
                >
                    {move || if expanded.get() { "Show Less" } else { "View Details" }}
                    <ChevronDown attr:class=move || {
                        if expanded.get() { "h-4 w-4 rotate-180 transition-transform" } else { "h-4 w-4 transition-transform" }
                    } />
                </button>

                <Show when=move || expanded.get()>
                    <div class="border-t border-base-200 pt-3 text-sm space-y-2">
                        <p><strong>"Index: "</strong>{rental_index.clone()}</p>
                        <a href=detail_url.clone() target="_blank" rel="noopener noreferrer" class="link link-primary flex items-center gap-1 text-xs">
                            <ExternalLink attr:class="h-3 w-3" />
                            "View Listing"
                        </a>
                    </div>
                </Show>

                <div class="card-actions mt-auto pt-3 grid grid-cols-2 gap-2">
                    <a href=listing_url target="_blank" rel="noopener noreferrer" class="btn btn-primary btn-sm gap-2">
                        <ExternalLink attr:class="h-4 w-4" />
                        "View Listing"
                    </a>
                    <button class="btn btn-outline btn-sm gap-2" on:click=move |_| on_compare.run(result.clone())>
                        <BarChart3 attr:class="h-4 w-4" />
                        "Compare"
                    </button>
                </div>
            </div>
        </div>
    }
}
