//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;

use crate::pattern::DEFAULT_PATTERN;

/// oidconv CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "oidconv",
    author = "YourName <your@email.com>",
    version,
    about = "MONGO OBJECTID CONVERTER - JSON 파일 내 24자리 hex 문자열을 $oid 객체로 변환",
    long_about = r#"
MONGO OBJECTID CONVERTER
========================

패턴과 일치하는 JSON 파일에서 따옴표로 감싼 24자리 hex 문자열을 찾아
MongoDB Extended JSON 형식 {"$oid" : "..." } 으로 바꾸고 같은 파일에 덮어씁니다.
이미 $oid 값인 문자열은 건드리지 않습니다.

주의: 백업을 만들지 않습니다.

예제:
  oidconv
  oidconv --pattern "export/*.json"
  oidconv -v
"#
)]
pub struct Args {
    /// 변환할 파일 패턴 (glob 형식, 현재 폴더 기준)
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// 파일별 변환 결과 출력
    #[arg(short, long)]
    pub verbose: bool,

    /// 진행률 바 숨기기
    #[arg(long)]
    pub no_progress: bool,
}
