use crate::components::icons::{BarChart3, Brain, Download, Globe, Image, Search, Shield, Zap};
use leptos::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("95%", "Matching Accuracy"),
    ("50K+", "Properties Analyzed"),
    ("8", "Rental Platforms"),
    ("30s", "Average Search Time"),
];

#[derive(Clone, Copy)]
enum FeatureIcon {
    Brain,
    Image,
    Search,
    Chart,
    Download,
    Zap,
    Globe,
    Shield,
}

impl FeatureIcon {
    fn view(self) -> AnyView {
        match self {
            FeatureIcon::Brain => view! { <Brain attr:class="h-6 w-6" /> }.into_any(),
            FeatureIcon::Image => view! { <Image attr:class="h-6 w-6" /> }.into_any(),
            FeatureIcon::Search => view! { <Search attr:class="h-6 w-6" /> }.into_any(),
            FeatureIcon::Chart => view! { <BarChart3 attr:class="h-6 w-6" /> }.into_any(),
            FeatureIcon::Download => view! { <Download attr:class="h-6 w-6" /> }.into_any(),
            FeatureIcon::Zap => view! { <Zap attr:class="h-6 w-6" /> }.into_any(),
            FeatureIcon::Globe => view! { <Globe attr:class="h-6 w-6" /> }.into_any(),
            FeatureIcon::Shield => view! { <Shield attr:class="h-6 w-6" /> }.into_any(),
        }
    }
}

const FEATURES: [(FeatureIcon, &str, &str); 8] = [
    (
        FeatureIcon::Brain,
        "AI-Powered Matching",
        "Deep learning models analyze photos, descriptions and amenities to find rental matches.",
    ),
    (
        FeatureIcon::Image,
        "Visual Similarity",
        "CLIP and ResNet models compare property photos to identify visually similar rentals.",
    ),
    (
        FeatureIcon::Search,
        "Multi-Platform Search",
        "Search across Airbnb, Booking, Vrbo, EmmaVillas, PosarelliVillas and Tuscany Now & More.",
    ),
    (
        FeatureIcon::Chart,
        "Similarity Scoring",
        "Detailed similarity percentages based on location, amenities, photos and property features.",
    ),
    (
        FeatureIcon::Download,
        "Export Results",
        "Download your property matches as CSV or PDF reports for sharing and analysis.",
    ),
    (
        FeatureIcon::Zap,
        "Instant Results",
        "Comprehensive matching results in under 30 seconds.",
    ),
    (
        FeatureIcon::Globe,
        "Global Coverage",
        "Support for major real estate platforms in Europe and beyond.",
    ),
    (
        FeatureIcon::Shield,
        "Data Privacy",
        "Your searches are private. No personal data or property information is stored.",
    ),
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="bg-base-100 py-16">
            <div class="max-w-7xl mx-auto px-4 space-y-16">
                <div class="stats stats-vertical md:stats-horizontal shadow w-full">
                    {STATS
                        .iter()
                        .map(|(number, label)| {
                            view! {
                                <div class="stat place-items-center">
                                    <div class="stat-value text-primary">{*number}</div>
                                    <div class="stat-desc">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="text-center space-y-3">
                    <h2 class="text-3xl md:text-4xl font-bold">"Powered by Advanced AI Technology"</h2>
                    <p class="text-base-content/70 max-w-2xl mx-auto">
                        "Computer vision and language models that understand what makes properties similar."
                    </p>
                </div>

                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, description)| {
                            view! {
                                <div class="card bg-base-200 hover:shadow-lg transition-shadow">
                                    <div class="card-body">
                                        <div class="p-3 w-fit rounded-xl bg-primary/10 text-primary">
                                            {icon.view()}
                                        </div>
                                        <h3 class="card-title text-lg">{*title}</h3>
                                        <p class="text-sm text-base-content/70">{*description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
