//! 端末向けの結果表示

use statement_dash_common::render::{ResultPanel, NO_RESULTS_MESSAGE};
use statement_dash_common::{
    ChatMessage, ChatRole, DecisionTone, FeedbackMap, ResultsDisplay, UploadView,
};
use std::fmt::Write;

const RULE: &str = "────────────────────────────────────────";

/// 結果エリア全体（エラーメッセージ含む）
pub fn render_view(view: &UploadView, feedback: &FeedbackMap) -> String {
    let mut out = String::new();

    if let Some(message) = view.error_message() {
        let _ = writeln!(out, "✖ {}\n", message);
    }

    match view.results_display() {
        ResultsDisplay::Spinner => out.push_str("Analyzing...\n"),
        ResultsDisplay::Placeholder => {
            let _ = writeln!(out, "{}", NO_RESULTS_MESSAGE);
        }
        ResultsDisplay::Panels(results) => {
            for (i, result) in results.iter().enumerate() {
                let comment = feedback.get(&result.name);
                out.push_str(&render_panel(i + 1, &ResultPanel::new(result), comment));
            }
        }
    }

    out
}

pub fn render_panel(index: usize, panel: &ResultPanel<'_>, feedback: &str) -> String {
    let mut out = String::new();
    let mark = match panel.tone {
        DecisionTone::Favourable => "✔",
        DecisionTone::Unfavourable => "✖",
    };

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "[{}] {}", index, panel.title);
    let _ = writeln!(out, "    {}", panel.subtitle);
    let _ = writeln!(out, "    Account Number: {}", panel.account_number);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Loan Decision: {} {}", mark, panel.decision);
    let _ = writeln!(out);

    for field in panel.period.iter().chain(panel.summary.iter()) {
        let _ = writeln!(out, "  {:<18} {}", field.label, field.value);
    }

    for section in &panel.sections {
        let _ = writeln!(out, "\n  ▍{}", section.label);
        let _ = writeln!(out, "    {}", section.value);
    }

    let _ = writeln!(out, "\n  Final Assessment");
    let _ = writeln!(out, "    {}", panel.conclusion);

    if !feedback.is_empty() {
        let _ = writeln!(out, "\n  Teller Feedback: {}", feedback);
    }

    out
}

pub fn render_chat_message(message: &ChatMessage) -> String {
    match message.role {
        ChatRole::User => format!("you > {}", message.text),
        ChatRole::Bot => format!("bot > {}", message.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statement_dash_common::{AnalysisError, AnalysisResult};

    fn sample() -> AnalysisResult {
        let mut result = AnalysisResult::default();
        result.name = "Jane Doe".into();
        result.account_info.bank = "Acme".into();
        result.account_info.account_type = "Checking".into();
        result.account_info.account_number = "****9876".into();
        result.analysis.decision = "Declined".into();
        result.analysis.stats.spending_patterns = "Irregular".into();
        result.analysis.conclusion = "Not eligible".into();
        result.financial_summary.total_deposits = "$1,200.00".into();
        result
    }

    #[test]
    fn test_idle_shows_placeholder() {
        let view = UploadView::new();
        let feedback = FeedbackMap::new();
        assert_eq!(render_view(&view, &feedback).trim(), NO_RESULTS_MESSAGE);
    }

    #[test]
    fn test_error_shows_message_and_placeholder() {
        let mut view = UploadView::new();
        view.begin_submit(1);
        view.complete(Err(AnalysisError::Server("bad file".into())));
        let feedback = FeedbackMap::new();

        let text = render_view(&view, &feedback);
        assert!(text.contains("✖ bad file"));
        assert!(text.contains(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_loading_shows_progress() {
        let mut view = UploadView::new();
        view.begin_submit(1);
        let feedback = FeedbackMap::new();
        assert!(render_view(&view, &feedback).contains("Analyzing..."));
    }

    #[test]
    fn test_panel_contents() {
        let mut view = UploadView::new();
        view.begin_submit(1);
        view.complete(Ok(vec![sample()]));
        let mut feedback = FeedbackMap::new();
        feedback.set("Jane Doe", "call customer");

        let text = render_view(&view, &feedback);
        assert!(text.contains("[1] Jane Doe"));
        assert!(text.contains("Acme \u{2022} Checking"));
        assert!(text.contains("****9876"));
        assert!(text.contains("Loan Decision: ✖ Declined"));
        assert!(text.contains("Total Deposits"));
        assert!(text.contains("$1,200.00"));
        assert!(text.contains("Spending Patterns"));
        assert!(text.contains("Not eligible"));
        assert!(text.contains("Teller Feedback: call customer"));
    }

    #[test]
    fn test_chat_lines() {
        assert_eq!(render_chat_message(&ChatMessage::user("hi")), "you > hi");
        assert_eq!(render_chat_message(&ChatMessage::bot("You said: hi")), "bot > You said: hi");
    }
}
