//! 패턴 매칭 모듈
//!
//! glob 패턴으로 변환 대상 파일을 수집합니다.

use glob::{MatchOptions, Pattern};
use std::path::PathBuf;

use crate::error::{OidConvError, Result};

/// 기본 대상 파일 패턴 (현재 작업 폴더 기준)
pub const DEFAULT_PATTERN: &str = "mongo/*.json";

/// `*`는 경로 구분자와 숨김 파일의 첫 `.`을 넘지 않습니다.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// 검증된 파일 패턴
#[derive(Debug, Clone)]
pub struct FilePattern {
    source: String,
}

impl FilePattern {
    /// 새 파일 패턴 생성
    ///
    /// # Arguments
    /// * `pattern` - 글로브 패턴 문자열 (None이면 `mongo/*.json`)
    ///
    /// # Examples
    /// ```
    /// use oidconv::pattern::FilePattern;
    ///
    /// let pattern = FilePattern::new(None).unwrap();
    /// assert_eq!(pattern.as_str(), "mongo/*.json");
    /// assert!(FilePattern::new(Some("mongo/[".to_string())).is_err());
    /// ```
    pub fn new(pattern: Option<String>) -> Result<Self> {
        let source = pattern.unwrap_or_else(|| DEFAULT_PATTERN.to_string());
        Pattern::new(&source).map_err(|e| OidConvError::InvalidPattern {
            pattern: source.clone(),
            reason: e.msg.to_string(),
        })?;

        Ok(Self { source })
    }

    /// 패턴 문자열 반환
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// 패턴과 일치하는 일반 파일 수집
    ///
    /// 폴더가 없으면 빈 목록을 반환합니다. 읽을 수 없는 항목은 건너뜁니다.
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let paths = glob::glob_with(&self.source, MATCH_OPTIONS).map_err(|e| {
            OidConvError::InvalidPattern {
                pattern: self.source.clone(),
                reason: e.msg.to_string(),
            }
        })?;

        Ok(paths
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn glob_in(dir: &Path, rest: &str) -> FilePattern {
        let source = format!("{}/{}", Pattern::escape(&dir.to_string_lossy()), rest);
        FilePattern::new(Some(source)).unwrap()
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_default_pattern() {
        let pattern = FilePattern::new(None).unwrap();
        assert_eq!(pattern.as_str(), DEFAULT_PATTERN);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = FilePattern::new(Some("mongo/[invalid".to_string()));
        assert!(matches!(result, Err(OidConvError::InvalidPattern { .. })));
    }

    #[test]
    fn test_collect_regular_files_only() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.json"), "{}").unwrap();
        fs::write(root.join("b.json"), "{}").unwrap();
        fs::write(root.join("c.txt"), "{}").unwrap();
        fs::create_dir(root.join("dir.json")).unwrap();

        let files = glob_in(root, "*.json").collect().unwrap();

        assert_eq!(names(&files), vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_star_does_not_cross_separator() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("archive")).unwrap();
        fs::write(root.join("archive").join("old.json"), "{}").unwrap();
        fs::write(root.join("new.json"), "{}").unwrap();

        let files = glob_in(root, "*.json").collect().unwrap();

        assert_eq!(names(&files), vec!["new.json"]);
    }

    #[test]
    fn test_hidden_files_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(".backup.json"), "{}").unwrap();
        fs::write(root.join("users.json"), "{}").unwrap();

        let files = glob_in(root, "*.json").collect().unwrap();

        assert_eq!(names(&files), vec!["users.json"]);
    }

    #[test]
    fn test_collect_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let files = glob_in(temp_dir.path(), "missing/*.json").collect().unwrap();
        assert!(files.is_empty());
    }
}
