//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use statement_dash::error::DashError;
use statement_dash::scanner;
use statement_dash_common::{AnalysisError, NetworkFailure};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// 存在しないパスを指定した場合
#[test]
fn test_collect_nonexistent_path() {
    let result = scanner::collect_statements(&[PathBuf::from("/nonexistent/path/12345.pdf")], false);
    assert!(matches!(result, Err(DashError::FileNotFound(_))));
}

/// PDFのないフォルダは空のVec
#[test]
fn test_scan_folder_without_pdfs() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("test.txt"), "hello").unwrap();

    let result = scanner::scan_folder(dir.path(), false);
    assert!(result.unwrap().is_empty());
}

/// 存在しないフォルダ
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/folder/12345"), true);
    assert!(matches!(result, Err(DashError::FileNotFound(_))));
}

/// DashErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        DashError::Config("テスト設定エラー".to_string()),
        DashError::FileNotFound("jan.pdf".to_string()),
        DashError::NotPdf("notes.txt".to_string()),
        DashError::NoStatementsFound("/tmp/empty".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 解析エラーは透過的に表示される
#[test]
fn test_analysis_error_transparent() {
    let err: DashError = AnalysisError::Server("bad file".to_string()).into();
    assert!(matches!(err, DashError::Analysis(_)));
    assert_eq!(format!("{}", err), "bad file");

    let err: DashError = AnalysisError::from(NetworkFailure::Timeout { secs: 300 }).into();
    assert_eq!(format!("{}", err), "Request timed out after 300 seconds");
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: DashError = io_err.into();

    assert!(matches!(err, DashError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: DashError = json_err.into();

    assert!(matches!(err, DashError::JsonParse(_)));
}
