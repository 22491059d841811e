use statement_dash_common::AnalysisError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("PDFではありません: {0}")]
    NotPdf(String),

    #[error("PDFの取引明細が見つかりません: {0}")]
    NoStatementsFound(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

pub type Result<T> = std::result::Result<T, DashError>;
