//! ObjectId 변환 모듈
//!
//! 따옴표로 감싼 24자리 hex 문자열을 MongoDB Extended JSON
//! `{"$oid" : "..." }` 객체로 치환합니다.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// 이미 `"$oid"` 키의 값인 경우 `wrapped` 그룹이 함께 매칭됩니다.
static RE_QUOTED_OID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<wrapped>"\$oid"\s*:\s*)?"(?P<hex>\b[0-9a-fA-F]{24}\b)""#)
        .expect("Invalid regex")
});

/// 텍스트 변환 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// 변환된 텍스트
    pub text: String,
    /// 치환된 ObjectId 수
    pub replaced: usize,
}

impl Conversion {
    /// 내용이 바뀌었는지 여부
    pub fn is_changed(&self) -> bool {
        self.replaced > 0
    }
}

/// 텍스트 내 모든 ObjectId 문자열을 `$oid` 객체로 변환
///
/// 16진수 대소문자는 그대로 유지됩니다. 이미 `$oid` 값으로 들어가 있는
/// 문자열은 건드리지 않으므로 같은 파일에 여러 번 실행해도 결과가 같습니다.
///
/// # Examples
/// ```
/// use oidconv::oid::convert_text;
///
/// let out = convert_text(r#"{"_id": "abcdef0123456789abcdef01"}"#);
/// assert_eq!(out.text, r#"{"_id": {"$oid" : "abcdef0123456789abcdef01" }}"#);
/// assert_eq!(out.replaced, 1);
/// ```
pub fn convert_text(input: &str) -> Conversion {
    let mut replaced = 0;
    let text = RE_QUOTED_OID.replace_all(input, |caps: &Captures| {
        if caps.name("wrapped").is_some() {
            return caps[0].to_string();
        }
        replaced += 1;
        format!(r#"{{"$oid" : "{}" }}"#, &caps["hex"])
    });

    Conversion {
        text: text.into_owned(),
        replaced,
    }
}
