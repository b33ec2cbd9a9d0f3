use crate::components::icons::{ArrowRight, Search, Sparkles};
use crate::shell::use_shell;
use crate::web::router::use_router;
use leptos::prelude::*;
use propertymatch_shared::EXAMPLE_LISTINGS;

#[component]
pub fn Hero() -> impl IntoView {
    let shell = use_shell();
    let router = use_router();
    let (url, set_url) = signal(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        shell.start_search(router, url.get_untracked());
    };

    view! {
        <section class="hero min-h-[70vh] bg-gradient-to-br from-primary via-secondary to-accent">
            <div class="hero-content text-center text-primary-content flex-col max-w-4xl py-20">
                <div class="flex items-center gap-3 mb-4">
                    <Sparkles attr:class="h-8 w-8 text-warning" />
                    <span class="badge badge-lg bg-white/20 border-none text-white">
                        "AI-Powered Property Matching"
                    </span>
                </div>
                <h1 class="text-4xl md:text-6xl font-bold tracking-tight">
                    "Find Perfect "
                    <span class="text-warning block">"Rental Matches"</span>
                    "for Any Property"
                </h1>
                <p class="text-lg opacity-90 max-w-3xl mt-4 mb-8">
                    "Enter any property-for-sale URL and our AI finds similar vacation rentals from Airbnb, Booking, Vrbo and premium villa collections."
                </p>

                <form class="card bg-base-100 text-base-content shadow-2xl w-full" on:submit=on_submit>
                    <div class="card-body gap-4">
                        <div class="flex flex-col lg:flex-row gap-3">
                            <label class="input input-bordered input-lg flex items-center gap-2 flex-1">
                                <Search attr:class="h-5 w-5 opacity-50" />
                                <input
                                    type="url"
                                    class="grow"
                                    placeholder="Paste property URL (JamesEdition, Idealista, etc.)"
                                    on:input=move |ev| set_url.set(event_target_value(&ev))
                                    prop:value=url
                                    required
                                />
                            </label>
                            <button type="submit" class="btn btn-primary btn-lg gap-2">
                                "Find Matches"
                                <ArrowRight attr:class="h-5 w-5" />
                            </button>
                        </div>

                        <div class="text-left">
                            <p class="text-sm text-base-content/60 mb-2">"Try these examples:"</p>
                            <div class="flex flex-wrap gap-2">
                                {EXAMPLE_LISTINGS
                                    .into_iter()
                                    .map(|example| {
                                        view! {
                                            <button
                                                type="button"
                                                class="btn btn-xs btn-ghost bg-base-200 rounded-full"
                                                title=example.site
                                                on:click=move |_| set_url.set(example.url.to_string())
                                            >
                                                {example.short_url()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </form>
            </div>
        </section>
    }
}
