//! エラー型定義

use thiserror::Error;

/// サーバーがメッセージを返さなかった場合の既定メッセージ
pub const DEFAULT_SERVER_ERROR: &str = "Failed to analyze files";

/// 2xxだが本文が規約に合わない場合のメッセージ
pub const INVALID_RESPONSE_FORMAT: &str = "Invalid response format";

/// 通信レベルの失敗
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkFailure {
    /// クライアント側タイムアウトで中断した
    #[error("Request timed out after {secs} seconds")]
    Timeout { secs: u64 },

    #[error("Failed to reach analysis service: {0}")]
    Transport(String),
}

/// 1回の送信を終わらせるエラー
///
/// `Display` がそのまま画面に出すメッセージになる。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error(transparent)]
    Network(#[from] NetworkFailure),

    /// 非2xx。サーバーのメッセージをそのまま出す
    #[error("{0}")]
    Server(String),

    /// 2xxだが `results` がない、またはJSONでない
    #[error("Invalid response format")]
    Malformed(String),
}

impl AnalysisError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, AnalysisError::Network(NetworkFailure::Timeout { .. }))
    }
}
