//! チャットパネル
//!
//! メッセージ列は追記のみ。ボットの返答は `ResponseGenerator` で差し替え可能で、
//! 今あるのは入力を繰り返すだけの `EchoResponder`。

use serde::{Deserialize, Serialize};

/// 発言者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: ChatRole::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { role: ChatRole::Bot, text: text.into() }
    }
}

/// ボット返答の生成
///
/// 履歴（直前のユーザー発言を含む）を受け取り、次のボット発言を返す。
pub trait ResponseGenerator {
    fn respond(&self, history: &[ChatMessage]) -> String;
}

/// 入力をそのまま返すスタブ
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoResponder;

impl EchoResponder {
    pub const PREFIX: &'static str = "You said: ";
}

impl ResponseGenerator for EchoResponder {
    fn respond(&self, history: &[ChatMessage]) -> String {
        let last = history
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.text.as_str())
            .unwrap_or("");
        format!("{}{}", Self::PREFIX, last)
    }
}

/// チャットパネルの状態
#[derive(Debug, Clone, Default)]
pub struct ChatPanel<G = EchoResponder> {
    messages: Vec<ChatMessage>,
    generator: G,
}

impl ChatPanel<EchoResponder> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: ResponseGenerator> ChatPanel<G> {
    pub fn with_generator(generator: G) -> Self {
        Self { messages: Vec::new(), generator }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// 発言を送る
    ///
    /// 空白だけなら何もしない。それ以外はユーザー発言と
    /// ボット返答をこの順で追記し、追記したボット発言を返す。
    pub fn submit(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        let reply = self.generator.respond(&self.messages);
        self.messages.push(ChatMessage::bot(reply));
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_appends_user_then_bot() {
        let mut panel = ChatPanel::new();
        panel.submit("hello");

        let messages = panel.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], ChatMessage::user("hello"));
        assert_eq!(messages[1].role, ChatRole::Bot);
        assert!(messages[1].text.contains("hello"));
        assert_eq!(messages[1].text, "You said: hello");
    }

    #[test]
    fn test_blank_input_appends_nothing() {
        let mut panel = ChatPanel::new();
        assert!(panel.submit("   ").is_none());
        assert!(panel.submit("").is_none());
        assert!(panel.submit("\t\n").is_none());
        assert!(panel.messages().is_empty());
    }

    #[test]
    fn test_echo_is_verbatim() {
        let mut panel = ChatPanel::new();
        let reply = panel.submit("  spaced  ").unwrap();
        assert_eq!(reply.text, "You said:   spaced  ");
        assert_eq!(panel.messages()[0].text, "  spaced  ");
    }

    #[test]
    fn test_messages_accumulate_in_order() {
        let mut panel = ChatPanel::new();
        panel.submit("one");
        panel.submit("two");
        let texts: Vec<&str> = panel.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["one", "You said: one", "two", "You said: two"]);
    }

    struct CountingResponder;

    impl ResponseGenerator for CountingResponder {
        fn respond(&self, history: &[ChatMessage]) -> String {
            format!("{} messages so far", history.len())
        }
    }

    #[test]
    fn test_custom_generator_sees_history() {
        let mut panel = ChatPanel::with_generator(CountingResponder);
        panel.submit("a");
        panel.submit("b");
        assert_eq!(panel.messages()[1].text, "1 messages so far");
        assert_eq!(panel.messages()[3].text, "3 messages so far");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::bot("x")).unwrap();
        assert_eq!(json, r#"{"role":"bot","text":"x"}"#);
    }
}
