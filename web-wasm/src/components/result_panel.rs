//! 結果パネルコンポーネント

use leptos::prelude::*;
use statement_dash_common::{AnalysisResult, FeedbackMap, ResultPanel};

#[component]
pub fn ResultPanelView(result: AnalysisResult, feedback: RwSignal<FeedbackMap>) -> impl IntoView {
    let panel = ResultPanel::new(&result);

    let title = panel.title.to_string();
    let subtitle = panel.subtitle.clone();
    let account_number = panel.account_number.to_string();
    let decision = panel.decision.to_string();
    let conclusion = panel.conclusion.to_string();
    let tone_class = format!("decision-bar {}", panel.tone.as_str());
    let summary: Vec<(&'static str, String)> = panel
        .summary
        .iter()
        .map(|f| (f.label, f.value.to_string()))
        .collect();
    let sections: Vec<(&'static str, String)> = panel
        .sections
        .iter()
        .map(|f| (f.label, f.value.to_string()))
        .collect();

    view! {
        <div class="result-panel">
            <div class="result-header">
                <div>
                    <h2>{title}</h2>
                    <p class="text-muted">{subtitle}</p>
                </div>
                <div class="account-number">
                    <p>"Account Number"</p>
                    <p class="mono">{account_number}</p>
                </div>
            </div>

            <div class="decision">
                <h3>"Loan Decision"</h3>
                <div class=tone_class></div>
                <p class="decision-text">{decision}</p>
            </div>

            <div class="summary-grid">
                {summary
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="summary-tile">
                            <p class="label">{label}</p>
                            <p class="value">{value}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="analysis-sections">
                {sections
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="analysis-section">
                            <h4>{label}</h4>
                            <p>{value}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="conclusion">
                <h4>"Final Assessment"</h4>
                <p>{conclusion}</p>
            </div>

            <FeedbackBox name=result.name.clone() feedback=feedback />
        </div>
    }
}

/// 窓口担当者フィードバック欄
#[component]
fn FeedbackBox(name: String, feedback: RwSignal<FeedbackMap>) -> impl IntoView {
    let value = {
        let name = name.clone();
        move || feedback.with(|map| map.get(&name).to_string())
    };

    let on_input = {
        let name = name.clone();
        move |ev| {
            let text = event_target_value(&ev);
            feedback.update(|map| map.set(name.clone(), text));
        }
    };

    let on_click = move |_| {
        feedback.with_untracked(|map| {
            let comment = map.submit(&name);
            gloo::console::log!(format!("Feedback for {}: {}", name, comment));
        });
    };

    view! {
        <div class="feedback">
            <h4>"Teller Feedback"</h4>
            <textarea
                rows="3"
                placeholder="Provide feedback on this analysis..."
                prop:value=value
                on:input=on_input
            />
            <button class="btn btn-secondary" on:click=on_click>
                "Submit Feedback"
            </button>
        </div>
    }
}
