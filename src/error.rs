//! 에러 타입 정의 모듈
//!
//! oidconv에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// oidconv에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum OidConvError {
    /// 유효하지 않은 글로브 패턴
    #[error("유효하지 않은 패턴 ({pattern}): {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// 파일 읽기 실패
    #[error("파일을 읽을 수 없습니다 ({file}): {source}")]
    ReadError {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// UTF-8 디코딩 실패
    #[error("UTF-8 텍스트가 아닙니다 ({file}): {source}")]
    EncodingError {
        file: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({file}): {source}")]
    WriteError {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// oidconv 결과 타입 별칭
pub type Result<T> = std::result::Result<T, OidConvError>;
