//! 解析エンドポイントへの送信
//!
//! 全ファイルを1回のマルチパートPOSTで送る。判定は
//! `statement_dash_common::resolve` に任せ、ここでは生レスポンスを返すだけ。

use crate::config::Config;
use crate::error::Result;
use crate::scanner::StatementFile;
use reqwest::multipart::{Form, Part};
use statement_dash_common::{NetworkFailure, RawResponse};
use std::future::Future;

const PDF_MIME: &str = "application/pdf";

/// 読み込み済みのアップロードファイル
#[derive(Debug, Clone)]
pub struct StatementUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl StatementUpload {
    pub async fn load(file: &StatementFile) -> Result<Self> {
        let bytes = tokio::fs::read(&file.path).await?;
        Ok(Self { file_name: file.file_name.clone(), bytes })
    }
}

pub async fn load_uploads(files: &[StatementFile]) -> Result<Vec<StatementUpload>> {
    let mut uploads = Vec::with_capacity(files.len());
    for file in files {
        uploads.push(StatementUpload::load(file).await?);
    }
    Ok(uploads)
}

/// 解析バックエンド
pub trait AnalysisBackend {
    fn analyze(
        &self,
        uploads: &[StatementUpload],
    ) -> impl Future<Output = std::result::Result<RawResponse, NetworkFailure>>;
}

/// reqwestによるHTTPバックエンド
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
    field_name: String,
    timeout_secs: u64,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            field_name: config.field_name.clone(),
            timeout_secs: config.timeout_seconds,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(&self, uploads: &[StatementUpload]) -> std::result::Result<Form, NetworkFailure> {
        uploads.iter().try_fold(Form::new(), |form, upload| {
            let part = Part::bytes(upload.bytes.clone())
                .file_name(upload.file_name.clone())
                .mime_str(PDF_MIME)
                .map_err(|e| self.map_error(e))?;
            Ok(form.part(self.field_name.clone(), part))
        })
    }

    fn map_error(&self, error: reqwest::Error) -> NetworkFailure {
        if error.is_timeout() {
            NetworkFailure::Timeout { secs: self.timeout_secs }
        } else {
            NetworkFailure::Transport(error.to_string())
        }
    }
}

impl AnalysisBackend for HttpBackend {
    async fn analyze(
        &self,
        uploads: &[StatementUpload],
    ) -> std::result::Result<RawResponse, NetworkFailure> {
        let form = self.build_form(uploads)?;

        tracing::debug!(endpoint = %self.endpoint, files = uploads.len(), "送信開始");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        tracing::info!(status, bytes = body.len(), "解析レスポンス受信");

        Ok(RawResponse { status, body })
    }
}
