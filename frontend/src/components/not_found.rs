use crate::components::icons::Home;
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="flex items-center justify-center min-h-[60vh] bg-base-200">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"Page not found"</p>
                <button class="btn btn-primary gap-2" on:click=move |_| navigate(AppRoute::Home)>
                    <Home attr:class="h-4 w-4" />
                    "Back to Home"
                </button>
            </div>
        </div>
    }
}
