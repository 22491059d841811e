//! アップロードフォームコンポーネント

use leptos::prelude::*;
use statement_dash_common::render::{SUBMIT_LABEL, SUBMIT_LABEL_LOADING, UPLOAD_HINT};
use web_sys::{File, HtmlInputElement};
use crate::api::analyze::files_from_list;

#[component]
pub fn UploadForm<F>(
    files: RwSignal<Vec<File>, LocalStorage>,
    is_loading: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let selected = input
            .files()
            .map(|list| files_from_list(&list))
            .unwrap_or_default();
        files.set(selected);
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit(());
    };

    let no_files = move || files.with(|f| f.is_empty());

    view! {
        <div class="upload-card">
            <form on:submit=on_form_submit>
                <div class="upload-area">
                    <input
                        type="file"
                        accept="application/pdf"
                        multiple=true
                        on:change=on_change
                    />
                    <p class="text-muted">{UPLOAD_HINT}</p>
                    <Show when=move || !no_files()>
                        <p class="text-muted">
                            {move || format!("{} file(s) selected", files.with(Vec::len))}
                        </p>
                    </Show>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || no_files() || is_loading.get()
                    >
                        {move || if is_loading.get() { SUBMIT_LABEL_LOADING } else { SUBMIT_LABEL }}
                    </button>
                </div>
            </form>
        </div>
    }
}
