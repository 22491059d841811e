//! 窓口担当者フィードバック
//!
//! 結果の名義をキーにしたコメント置き場。画面のメモリ上にだけあり、
//! 送信しても外部には何も送らない（将来のバックエンド呼び出し用の場所）。

use std::collections::HashMap;

/// 名義 → コメント
///
/// 名義は一意とは限らない。同名の結果は同じコメントを共有する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackMap {
    comments: HashMap<String, String>,
}

impl FeedbackMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, comment: impl Into<String>) {
        self.comments.insert(key.into(), comment.into());
    }

    /// 未入力なら空文字
    pub fn get(&self, key: &str) -> &str {
        self.comments.get(key).map(String::as_str).unwrap_or("")
    }

    /// フィードバック送信
    ///
    /// 現状は保持しているコメントを返すだけで、状態は変えない。
    pub fn submit(&self, key: &str) -> &str {
        self.get(key)
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_is_empty() {
        let map = FeedbackMap::new();
        assert_eq!(map.get("nobody"), "");
        assert_eq!(map.submit("nobody"), "");
    }

    #[test]
    fn test_duplicate_names_share_comment() {
        let mut map = FeedbackMap::new();
        map.set("Jane Doe", "first");
        map.set("Jane Doe", "second");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Jane Doe"), "second");
    }

    #[test]
    fn test_submit_leaves_map_unchanged() {
        let mut map = FeedbackMap::new();
        map.set("A", "ok");
        let before = map.clone();
        assert_eq!(map.submit("A"), "ok");
        assert_eq!(map, before);
    }
}
