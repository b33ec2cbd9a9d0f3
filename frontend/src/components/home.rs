mod features;
mod hero;

use features::Features;
use hero::Hero;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Features />
    }
}
