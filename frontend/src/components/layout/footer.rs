use crate::components::icons::{BarChart3, Globe, Shield, Zap};
use leptos::prelude::*;

const FOOTER_COLUMNS: [(&str, [&str; 5]); 4] = [
    (
        "Product",
        ["How It Works", "AI Technology", "Supported Platforms", "Pricing", "API Access"],
    ),
    ("Company", ["About Us", "Blog", "Careers", "Press Kit", "Contact"]),
    (
        "Resources",
        ["Documentation", "Help Center", "Property Guides", "Market Reports", "Best Practices"],
    ),
    (
        "Legal",
        ["Privacy Policy", "Terms of Service", "Cookie Policy", "Data Processing", "Compliance"],
    ),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-neutral text-neutral-content mt-16">
            <div class="max-w-7xl mx-auto px-4 py-12 grid gap-8 md:grid-cols-6">
                <div class="md:col-span-2 space-y-4">
                    <div class="flex items-center gap-2">
                        <div class="p-2 bg-primary rounded-xl text-primary-content">
                            <BarChart3 attr:class="h-5 w-5" />
                        </div>
                        <span class="text-xl font-bold">"PropertyMatch"</span>
                    </div>
                    <p class="text-sm opacity-70">
                        "AI-powered matching between properties for sale and comparable vacation rentals."
                    </p>
                    <ul class="space-y-2 text-sm opacity-80">
                        <li class="flex items-center gap-2"><Shield attr:class="h-4 w-4" /> "Data Privacy: your searches are secure"</li>
                        <li class="flex items-center gap-2"><Zap attr:class="h-4 w-4" /> "Lightning Fast: results in under 30 seconds"</li>
                        <li class="flex items-center gap-2"><Globe attr:class="h-4 w-4" /> "Global Coverage: 8 rental platforms"</li>
                    </ul>
                </div>
                {FOOTER_COLUMNS
                    .iter()
                    .map(|(title, links)| {
                        view! {
                            <div>
                                <h4 class="footer-title">{*title}</h4>
                                <ul class="space-y-2 text-sm">
                                    {links
                                        .iter()
                                        .map(|name| view! { <li><a class="link link-hover opacity-70" href="#">{*name}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="border-t border-neutral-content/10 py-4 text-center text-xs opacity-60">
                "© PropertyMatch. All rights reserved."
            </div>
        </footer>
    }
}
