use crate::error::{DashError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// アップロード対象の取引明細PDF
#[derive(Debug, Clone)]
pub struct StatementFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl StatementFile {
    fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { path: path.to_path_buf(), file_name }
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// ファイルとフォルダの指定からPDFを集める
///
/// ファイルを直接指定した場合はPDFでなければエラー。フォルダはPDFだけを拾う。
/// 指定順を保ち、フォルダ内はファイル名順。同じパスは1回だけ。
pub fn collect_statements(paths: &[PathBuf], recursive: bool) -> Result<Vec<StatementFile>> {
    let mut statements: Vec<StatementFile> = Vec::new();

    for path in paths {
        if path.is_dir() {
            for found in scan_folder(path, recursive)? {
                if !statements.iter().any(|s| s.path == found.path) {
                    statements.push(found);
                }
            }
        } else if path.is_file() {
            if !is_pdf(path) {
                return Err(DashError::NotPdf(path.display().to_string()));
            }
            if !statements.iter().any(|s| &s.path == path) {
                statements.push(StatementFile::from_path(path));
            }
        } else {
            return Err(DashError::FileNotFound(path.display().to_string()));
        }
    }

    Ok(statements)
}

pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<StatementFile>> {
    if !folder.exists() {
        return Err(DashError::FileNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut statements: Vec<StatementFile> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && is_pdf(e.path()))
        .map(|e| StatementFile::from_path(e.path()))
        .collect();

    statements.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(statements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf(Path::new("a.pdf")));
        assert!(is_pdf(Path::new("a.PDF")));
        assert!(!is_pdf(Path::new("a.txt")));
        assert!(!is_pdf(Path::new("pdf")));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), false);
        assert!(matches!(result, Err(DashError::FileNotFound(_))));
    }

    #[test]
    fn test_scan_folder_filters_and_sorts() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("b.pdf")).unwrap();
        File::create(dir.path().join("a.PDF")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let result = scan_folder(dir.path(), false).unwrap();
        let names: Vec<&str> = result.iter().map(|s| s.file_name.as_str()).collect();
        assert_eq!(names, ["a.PDF", "b.pdf"]);
    }

    #[test]
    fn test_scan_folder_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("march")).unwrap();
        File::create(dir.path().join("jan.pdf")).unwrap();
        File::create(dir.path().join("march").join("mar.pdf")).unwrap();

        assert_eq!(scan_folder(dir.path(), false).unwrap().len(), 1);
        assert_eq!(scan_folder(dir.path(), true).unwrap().len(), 2);
    }

    #[test]
    fn test_collect_rejects_non_pdf_file() {
        let dir = tempdir().unwrap();
        let txt = dir.path().join("statement.txt");
        File::create(&txt).unwrap();

        let result = collect_statements(&[txt], false);
        assert!(matches!(result, Err(DashError::NotPdf(_))));
    }

    #[test]
    fn test_collect_deduplicates() {
        let dir = tempdir().unwrap();
        let pdf = dir.path().join("jan.pdf");
        File::create(&pdf).unwrap();

        let result =
            collect_statements(&[pdf.clone(), dir.path().to_path_buf(), pdf], false).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "jan.pdf");
    }
}
