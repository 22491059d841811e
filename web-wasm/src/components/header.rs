//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Bank Statement Analysis"</h1>
            <p class="text-muted">"Upload statements and chat for detailed analysis"</p>
        </header>
    }
}
