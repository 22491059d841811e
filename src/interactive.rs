//! 対話モード
//!
//! 解析 → 結果表示 → フィードバック / チャット / 再送信 のループ。

use crate::client::{AnalysisBackend, StatementUpload};
use crate::error::Result;
use crate::report::{render_chat_message, render_view};
use crate::session::Dashboard;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use statement_dash_common::render::SUBMIT_LABEL_LOADING;
use statement_dash_common::{ChatMessage, ResponseGenerator};
use std::time::Duration;

const CHAT_EXIT: &str = "/exit";

/// スピナーを出しながら送信する
pub async fn analyze_with_spinner<B, G>(
    dashboard: &mut Dashboard<B, G>,
    uploads: &[StatementUpload],
) -> bool
where
    B: AnalysisBackend,
    G: ResponseGenerator,
{
    if !dashboard.view().can_submit(uploads.len()) {
        return false;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("{} ({}件)", SUBMIT_LABEL_LOADING, uploads.len()));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let sent = dashboard.submit_files(uploads).await;

    spinner.finish_and_clear();
    sent
}

enum MenuAction {
    Feedback,
    Chat,
    Resubmit,
    Quit,
}

const MENU_ITEMS: &[&str] = &["フィードバックを入力", "チャット", "再解析", "終了"];

fn prompt_menu() -> Result<MenuAction> {
    let choice = Select::new()
        .with_prompt("操作を選択")
        .items(MENU_ITEMS)
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => MenuAction::Feedback,
        1 => MenuAction::Chat,
        2 => MenuAction::Resubmit,
        _ => MenuAction::Quit,
    })
}

pub async fn run_session<B, G>(
    dashboard: &mut Dashboard<B, G>,
    uploads: &[StatementUpload],
) -> Result<()>
where
    B: AnalysisBackend,
    G: ResponseGenerator,
{
    analyze_with_spinner(dashboard, uploads).await;
    println!("{}", render_view(dashboard.view(), dashboard.feedback()));

    loop {
        match prompt_menu()? {
            MenuAction::Feedback => prompt_feedback(dashboard)?,
            MenuAction::Chat => {
                run_chat_loop(|text| dashboard.submit_chat_message(text).cloned())?;
            }
            MenuAction::Resubmit => {
                analyze_with_spinner(dashboard, uploads).await;
                println!("{}", render_view(dashboard.view(), dashboard.feedback()));
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

fn prompt_feedback<B, G>(dashboard: &mut Dashboard<B, G>) -> Result<()>
where
    B: AnalysisBackend,
    G: ResponseGenerator,
{
    let names: Vec<String> = dashboard
        .view()
        .results()
        .iter()
        .map(|r| r.name.clone())
        .collect();

    if names.is_empty() {
        println!("フィードバック対象の結果がありません");
        return Ok(());
    }

    let index = Select::new()
        .with_prompt("対象の結果")
        .items(names.as_slice())
        .default(0)
        .interact()?;
    let name = &names[index];

    let current = dashboard.feedback().get(name).to_string();
    let comment: String = Input::new()
        .with_prompt("Teller Feedback")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    dashboard.set_feedback(name, &comment);
    dashboard.submit_feedback(name);
    println!("✔ フィードバックを受け付けました: {}", name);

    Ok(())
}

/// チャットの入力ループ
///
/// `/exit` か EOF で抜ける。空白だけの入力は何も追加されない。
pub fn run_chat_loop<F>(mut submit: F) -> Result<()>
where
    F: FnMut(&str) -> Option<ChatMessage>,
{
    println!("質問を入力してください（{} で終了）", CHAT_EXIT);

    loop {
        let text: String = match Input::new()
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()
        {
            Ok(text) => text,
            Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        };

        if text.trim() == CHAT_EXIT {
            break;
        }

        if let Some(reply) = submit(&text) {
            println!("{}", render_chat_message(&reply));
        }
    }

    Ok(())
}
