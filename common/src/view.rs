//! アップロード画面の状態機械
//!
//! `Idle → Loading → Success / Error` を1つの列挙型で持つ。
//! 結果とエラーメッセージは各バリアントの中にだけ存在するので、
//! 「Loading中なのに古いエラーが残っている」状態は表現できない。

use crate::error::AnalysisError;
use crate::response::AnalysisOutcome;
use crate::types::AnalysisResult;

/// アップロードの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Loading,
    Success(Vec<AnalysisResult>),
    Error(AnalysisError),
}

impl UploadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::Loading => "loading",
            UploadState::Success(_) => "success",
            UploadState::Error(_) => "error",
        }
    }
}

/// 結果エリアに何を出すか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsDisplay<'a> {
    /// 不定プログレス表示
    Spinner,
    /// 結果がまだない / 0件 / エラー後
    Placeholder,
    /// 結果パネルをレスポンス順に表示
    Panels(&'a [AnalysisResult]),
}

/// アップロード画面1つ分の状態
#[derive(Debug, Clone, Default)]
pub struct UploadView {
    state: UploadState,
}

impl UploadView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, UploadState::Loading)
    }

    /// 送信ボタンを押せるか
    pub fn can_submit(&self, file_count: usize) -> bool {
        file_count > 0 && !self.is_loading()
    }

    /// 送信開始
    ///
    /// ファイルがない、または送信中なら何もせず `false` を返す。
    /// `true` の場合、呼び出し側はリクエストを1回だけ発行すること。
    pub fn begin_submit(&mut self, file_count: usize) -> bool {
        if !self.can_submit(file_count) {
            return false;
        }
        self.state = UploadState::Loading;
        true
    }

    /// 送信完了
    ///
    /// Loading中以外に届いた結果は無視する。
    pub fn complete(&mut self, outcome: AnalysisOutcome) {
        if !self.is_loading() {
            return;
        }
        self.state = match outcome {
            Ok(results) => UploadState::Success(results),
            Err(error) => UploadState::Error(error),
        };
    }

    /// 表示中の結果（Success以外は空）
    pub fn results(&self) -> &[AnalysisResult] {
        match &self.state {
            UploadState::Success(results) => results,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match &self.state {
            UploadState::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(|e| e.to_string())
    }

    pub fn results_display(&self) -> ResultsDisplay<'_> {
        match &self.state {
            UploadState::Loading => ResultsDisplay::Spinner,
            UploadState::Success(results) if !results.is_empty() => {
                ResultsDisplay::Panels(results)
            }
            _ => ResultsDisplay::Placeholder,
        }
    }
}
