//! チャットパネルコンポーネント

use leptos::html::Div;
use leptos::prelude::*;
use statement_dash_common::{ChatPanel, ChatRole};

#[component]
pub fn ChatPanelView(chat: RwSignal<ChatPanel>) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());
    let messages_end = NodeRef::<Div>::new();

    // 新しいメッセージが来たら末尾までスクロール
    Effect::new(move |_| {
        chat.track();
        if let Some(end) = messages_end.get() {
            end.scroll_into_view();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        let sent = chat
            .try_update(|panel| panel.submit(&text).is_some())
            .unwrap_or(false);
        if sent {
            set_draft.set(String::new());
        }
    };

    view! {
        <div class="chat-panel">
            <div class="chat-messages">
                <For
                    each=move || chat.with(|panel| {
                        panel.messages().iter().cloned().enumerate().collect::<Vec<_>>()
                    })
                    key=|(index, _)| *index
                    children=move |(_, message)| {
                        let class = match message.role {
                            ChatRole::User => "chat-row user",
                            ChatRole::Bot => "chat-row bot",
                        };
                        view! {
                            <div class=class>
                                <div class="chat-bubble">{message.text}</div>
                            </div>
                        }
                    }
                />
                <div node_ref=messages_end></div>
            </div>

            <form class="chat-input" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Ask questions about the analysis..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Send"</button>
            </form>
        </div>
    }
}
