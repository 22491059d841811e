//! Statement Dash Common Library
//!
//! CLIとWeb(WASM)で共有される型と画面ロジック。通信は持たない。

pub mod types;
pub mod error;
pub mod response;
pub mod view;
pub mod feedback;
pub mod chat;
pub mod render;

pub use types::{AccountInfo, AnalysisResult, AnalysisStats, FinancialSummary, LoanAnalysis};
pub use error::{AnalysisError, NetworkFailure};
pub use response::{
    interpret_response, resolve, AnalysisOutcome, RawResponse, DEFAULT_TIMEOUT_SECS, FILE_FIELD,
    WEB_ENDPOINT,
};
pub use view::{ResultsDisplay, UploadState, UploadView};
pub use feedback::FeedbackMap;
pub use chat::{ChatMessage, ChatPanel, ChatRole, EchoResponder, ResponseGenerator};
pub use render::{DecisionTone, ResultPanel};
