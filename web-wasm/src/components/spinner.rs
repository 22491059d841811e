//! 不定プログレス表示

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-container" role="status" aria-label="Analyzing">
            <div class="spinner"></div>
        </div>
    }
}
