//! アップロード画面のコントローラ
//!
//! `UploadView`（状態機械）とチャットパネルを持ち、送信時だけバックエンドを呼ぶ。

use crate::client::{AnalysisBackend, StatementUpload};
use statement_dash_common::{
    resolve, ChatMessage, ChatPanel, EchoResponder, FeedbackMap, ResponseGenerator, UploadView,
};

pub struct Dashboard<B, G = EchoResponder> {
    backend: B,
    view: UploadView,
    feedback: FeedbackMap,
    chat: ChatPanel<G>,
}

impl<B: AnalysisBackend> Dashboard<B, EchoResponder> {
    pub fn new(backend: B) -> Self {
        Self::with_generator(backend, EchoResponder)
    }
}

impl<B: AnalysisBackend, G: ResponseGenerator> Dashboard<B, G> {
    pub fn with_generator(backend: B, generator: G) -> Self {
        Self {
            backend,
            view: UploadView::new(),
            feedback: FeedbackMap::new(),
            chat: ChatPanel::with_generator(generator),
        }
    }

    pub fn view(&self) -> &UploadView {
        &self.view
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// ファイルを送信して結果を画面状態に反映する
    ///
    /// ファイルなし・送信中なら何もせず `false`。リクエストを出したら `true`。
    pub async fn submit_files(&mut self, uploads: &[StatementUpload]) -> bool {
        if !self.view.begin_submit(uploads.len()) {
            return false;
        }

        let outcome = resolve(self.backend.analyze(uploads).await);
        match &outcome {
            Ok(results) => tracing::info!(results = results.len(), "解析成功"),
            Err(e) => tracing::warn!(error = %e, "解析失敗"),
        }
        self.view.complete(outcome);
        true
    }

    pub fn feedback(&self) -> &FeedbackMap {
        &self.feedback
    }

    pub fn set_feedback(&mut self, key: &str, comment: &str) {
        self.feedback.set(key, comment);
    }

    /// フィードバック送信（現状はログに出すだけ）
    pub fn submit_feedback(&self, key: &str) {
        let comment = self.feedback.submit(key);
        tracing::info!(result_name = key, comment, "フィードバック");
    }

    pub fn submit_chat_message(&mut self, text: &str) -> Option<&ChatMessage> {
        self.chat.submit(text)
    }

    pub fn chat_messages(&self) -> &[ChatMessage] {
        self.chat.messages()
    }
}
