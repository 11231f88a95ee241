//! oidconv - MONGO OBJECTID CONVERTER
//!
//! JSON 파일 안의 24자리 hex 문자열을 MongoDB Extended JSON `{"$oid" : "..." }`
//! 객체로 변환해 제자리에 덮어쓰는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔑 **ObjectId 변환**: `"5f1d7a9b2c3e4f5a6b7c8d9e"` → `{"$oid" : "5f1d7a9b2c3e4f5a6b7c8d9e" }`
//! - 🔍 **패턴 선택**: glob 패턴으로 대상 파일 지정 (기본값 `mongo/*.json`)
//! - ♻️ **재실행 안전**: 이미 `$oid` 값인 문자열은 건너뜀
//! - 📊 **변환 통계**: 변경 파일 수, 치환 수, 입출력 용량 표시
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법 (mongo/*.json)
//! oidconv
//!
//! # 다른 폴더
//! oidconv --pattern "export/*.json" --verbose
//! ```

pub mod cli;
pub mod error;
pub mod oid;
pub mod pattern;
pub mod processor;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use error::{OidConvError, Result};
pub use oid::{convert_text, Conversion};
pub use pattern::{FilePattern, DEFAULT_PATTERN};
pub use processor::{convert_all, convert_file, ConvertOptions, ConvertResult};
pub use stats::{format_bytes, Statistics};
