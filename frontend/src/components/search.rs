mod upload;

use crate::components::icons::{Globe, Search, Upload};
use crate::shell::use_shell;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use propertymatch_shared::EXAMPLE_LISTINGS;
use tracing::{info, warn};
use upload::{FileKind, UploadError, UploadPreview, UploadPreviewPanel};
use wasm_bindgen_futures::JsFuture;

/// 读取上传文件并生成预览
async fn read_upload(file: web_sys::File) -> Result<UploadPreview, UploadError> {
    let kind = FileKind::detect(&file.type_(), &file.name());
    match kind {
        FileKind::Other => Err(UploadError::Unsupported),
        FileKind::Image => web_sys::Url::create_object_url_with_blob(&file)
            .map(UploadPreview::Image)
            .map_err(|_| UploadError::Invalid),
        FileKind::Json | FileKind::Csv => {
            let text = JsFuture::from(file.text())
                .await
                .map_err(|_| UploadError::Invalid)?
                .as_string()
                .ok_or(UploadError::Invalid)?;
            UploadPreview::from_text(kind, &text)
        }
    }
}

fn release(preview: Option<UploadPreview>) {
    if let Some(UploadPreview::Image(url)) = preview {
        let _ = web_sys::Url::revoke_object_url(&url);
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let shell = use_shell();
    let router = use_router();

    let (url, set_url) = signal(String::new());
    let (preview, set_preview) = signal(Option::<UploadPreview>::None);
    let (upload_error, set_upload_error) = signal(Option::<String>::None);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let is_blank = move || url.with(|u| u.trim().is_empty());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        shell.start_search(router, url.get_untracked());
    };

    let on_file = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // 允许再次选择同一个文件
        input.set_value("");

        info!(name = %file.name(), mime = %file.type_(), "reading upload");
        spawn_local(async move {
            match read_upload(file).await {
                Ok(p) => {
                    set_upload_error.set(None);
                    let old = preview.get_untracked();
                    set_preview.set(Some(p));
                    release(old);
                }
                Err(e) => {
                    warn!(error = %e, "upload rejected");
                    set_upload_error.set(Some(e.to_string()));
                }
            }
        });
    };

    on_cleanup(move || release(preview.get_untracked()));

    view! {
        <div class="min-h-screen bg-base-200 py-12">
            <div class="max-w-4xl mx-auto px-4 space-y-10">
                <div class="text-center space-y-3">
                    <h1 class="text-3xl md:text-4xl font-bold">"Find Similar Rental Properties"</h1>
                    <p class="text-base-content/70">
                        "Enter any property-for-sale URL to discover similar vacation rentals from our database."
                    </p>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <form class="space-y-6" on:submit=on_submit>
                            <div class="form-control">
                                <label class="label" for="sale-url">
                                    <span class="label-text font-medium">"Property For-Sale URL"</span>
                                </label>
                                <label class="input input-bordered input-lg flex items-center gap-2">
                                    <Globe attr:class="h-5 w-5 opacity-50" />
                                    <input
                                        id="sale-url"
                                        type="url"
                                        class="grow"
                                        placeholder="Paste any property URL (Zillow, Redfin, etc.)"
                                        on:input=move |ev| set_url.set(event_target_value(&ev))
                                        prop:value=url
                                        required
                                    />
                                </label>
                            </div>
                            <button type="submit" class="btn btn-primary btn-lg w-full gap-2" disabled=is_blank>
                                <Search attr:class="h-5 w-5" />
                                "Start AI Matching Process"
                            </button>
                        </form>

                        <div class="divider"></div>

                        <div class="text-center">
                            <input
                                node_ref=file_input
                                type="file"
                                accept=".json,.csv,image/*"
                                class="hidden"
                                on:change=on_file
                            />
                            <Upload attr:class="h-8 w-8 mx-auto mb-2 opacity-50" />
                            <p class="text-base-content/70 mb-4">
                                "Don't have a URL? Upload property details manually"
                            </p>
                            <button
                                type="button"
                                class="btn btn-outline btn-primary btn-sm"
                                on:click=move |_| {
                                    if let Some(el) = file_input.get() {
                                        el.click();
                                    }
                                }
                            >
                                "Upload CSV / JSON / Images"
                            </button>

                            <Show when=move || upload_error.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm mt-4">
                                    <span>{move || upload_error.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            {move || preview.get().map(|p| view! { <UploadPreviewPanel preview=p /> })}
                        </div>
                    </div>
                </div>

                <div>
                    <h2 class="text-2xl font-bold text-center mb-6">"Try These Example URLs"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        {EXAMPLE_LISTINGS
                            .into_iter()
                            .map(|example| {
                                let (name, link) = (example.site, example.url);
                                view! {
                                    <button
                                        type="button"
                                        class="card bg-base-100 border-2 border-primary/20 hover:border-primary text-left p-4"
                                        on:click=move |_| set_url.set(link.to_string())
                                    >
                                        <p class="font-semibold text-primary mb-2">{name}</p>
                                        <p class="text-xs text-base-content/60 break-all line-clamp-2">{link}</p>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
