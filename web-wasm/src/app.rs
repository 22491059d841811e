//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use statement_dash_common::render::NO_RESULTS_MESSAGE;
use statement_dash_common::{
    ChatPanel, FeedbackMap, ResultsDisplay, UploadView, DEFAULT_TIMEOUT_SECS,
};
use web_sys::File;
use crate::api::analyze::analyze_statements;
use crate::components::{
    chat_panel::ChatPanelView,
    header::Header,
    result_panel::ResultPanelView,
    spinner::Spinner,
    upload_form::UploadForm,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let files = RwSignal::new_local(Vec::<File>::new());
    let upload = RwSignal::new(UploadView::new());
    let feedback = RwSignal::new(FeedbackMap::new());
    let chat = RwSignal::new(ChatPanel::new());

    let is_loading = Signal::derive(move || upload.with(UploadView::is_loading));

    // 解析開始ハンドラ（送信中・ファイルなしなら何もしない）
    let on_analyze = move |_: ()| {
        let selected = files.get_untracked();
        let started = upload
            .try_update(|state| state.begin_submit(selected.len()))
            .unwrap_or(false);
        if !started {
            return;
        }

        gloo::console::log!(format!("Uploading {} statement(s)", selected.len()));
        spawn_local(async move {
            let outcome = analyze_statements(&selected, DEFAULT_TIMEOUT_SECS).await;
            if let Err(e) = &outcome {
                gloo::console::error!(format!("Error analyzing PDFs: {}", e));
            }
            upload.update(|state| state.complete(outcome));
        });
    };

    view! {
        <div class="container">
            <div class="left-column">
                <Header />

                <UploadForm files=files is_loading=is_loading on_submit=on_analyze />

                <ChatPanelView chat=chat />

                <Show when=move || upload.with(|state| state.error().is_some())>
                    <div class="error-message">
                        {move || upload.with(|state| state.error_message().unwrap_or_default())}
                    </div>
                </Show>
            </div>

            <div class="right-column">
                {move || upload.with(|state| match state.results_display() {
                    ResultsDisplay::Spinner => view! { <Spinner /> }.into_any(),
                    ResultsDisplay::Placeholder => view! {
                        <div class="placeholder text-muted">{NO_RESULTS_MESSAGE}</div>
                    }
                    .into_any(),
                    ResultsDisplay::Panels(results) => results
                        .iter()
                        .cloned()
                        .map(|result| view! { <ResultPanelView result=result feedback=feedback /> })
                        .collect_view()
                        .into_any(),
                })}
            </div>
        </div>
    }
}
