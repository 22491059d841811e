//! 解析エンドポイントのレスポンス判定
//!
//! HTTPステータスと本文テキストから `AnalysisOutcome` を組み立てる。
//! 通信層（reqwest / fetch）はここに生のレスポンスを渡すだけにする。

use serde_json::Value;

use crate::error::{AnalysisError, NetworkFailure, DEFAULT_SERVER_ERROR};
use crate::types::AnalysisResult;

/// ファイルを添付するマルチパートのフィールド名（複数回繰り返す）
pub const FILE_FIELD: &str = "files[]";

/// クライアント側タイムアウト（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// ブラウザ版が叩く同一オリジンのエンドポイント
pub const WEB_ENDPOINT: &str = "/api/analyze";

/// 1回の送信の結果
pub type AnalysisOutcome = std::result::Result<Vec<AnalysisResult>, AnalysisError>;

/// 通信層から受け取る生レスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 通信結果を判定する
///
/// 通信失敗はそのまま `Network` になる。レスポンスが得られた場合は
/// `interpret_response` に任せる。
pub fn resolve(transport: std::result::Result<RawResponse, NetworkFailure>) -> AnalysisOutcome {
    match transport {
        Ok(raw) => interpret_response(&raw),
        Err(failure) => Err(AnalysisError::Network(failure)),
    }
}

/// ステータスと本文から結果を判定する
///
/// * 非2xx: 本文のJSON `error` 文字列 → 生テキスト → 既定メッセージの順で採用
/// * 2xx: JSONオブジェクトで `results` 配列を持つことを要求
pub fn interpret_response(raw: &RawResponse) -> AnalysisOutcome {
    if !raw.is_success() {
        return Err(AnalysisError::Server(server_error_message(&raw.body)));
    }

    let value: Value = serde_json::from_str(&raw.body)
        .map_err(|e| AnalysisError::Malformed(format!("body is not JSON: {}", e)))?;

    let Value::Object(mut map) = value else {
        return Err(AnalysisError::Malformed("body is not a JSON object".into()));
    };

    match map.remove("results") {
        None | Some(Value::Null) => {
            Err(AnalysisError::Malformed("missing `results` field".into()))
        }
        Some(results @ Value::Array(_)) => serde_json::from_value(results)
            .map_err(|e| AnalysisError::Malformed(format!("invalid result record: {}", e))),
        Some(_) => Err(AnalysisError::Malformed("`results` is not an array".into())),
    }
}

/// 非2xxレスポンスの本文からメッセージを取り出す
pub fn server_error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json
            .get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(DEFAULT_SERVER_ERROR)
            .to_string(),
        Err(_) if body.is_empty() => DEFAULT_SERVER_ERROR.to_string(),
        Err(_) => body.to_string(),
    }
}
