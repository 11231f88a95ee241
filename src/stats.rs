//! 통계 및 유틸리티 모듈
//!
//! 변환 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

use crate::processor::ConvertResult;

/// 변환 통계 구조체
#[derive(Debug)]
pub struct Statistics {
    /// 대상 파일 수
    pub total_files: usize,
    /// 처리 완료 파일 수
    pub processed: usize,
    /// 다시 쓴 파일 수
    pub changed: usize,
    /// 치환된 ObjectId 총 수
    pub replaced: usize,
    /// 읽은 총 바이트
    pub bytes_read: u64,
    /// 쓴 총 바이트
    pub bytes_written: u64,
    start_time: Instant,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            processed: 0,
            changed: 0,
            replaced: 0,
            bytes_read: 0,
            bytes_written: 0,
            start_time: Instant::now(),
        }
    }

    /// 파일 하나의 변환 결과 반영
    pub fn record(&mut self, result: &ConvertResult) {
        self.processed += 1;
        self.replaced += result.replaced;
        self.bytes_read += result.bytes_read;
        self.bytes_written += result.bytes_written;
        if result.is_changed() {
            self.changed += 1;
        }
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 변환 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 변환 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 대상 파일:    {}",
            "📁".bright_cyan(),
            self.total_files
        );
        println!(
            "  {} 변경 파일:    {}",
            "✏️".bright_green(),
            self.changed.to_string().green()
        );
        println!(
            "  {} 변경 없음:    {}",
            "➖".bright_white(),
            self.processed - self.changed
        );
        println!(
            "  {} ObjectId:     {}",
            "🔑".bright_yellow(),
            self.replaced.to_string().bright_yellow()
        );
        println!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.bytes_read)
        );
        println!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.bytes_written)
        );
        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Examples
/// ```
/// use oidconv::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 60 {
        format!("{}분 {}초", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn result(replaced: usize, bytes_read: u64, bytes_written: u64) -> ConvertResult {
        ConvertResult {
            path: PathBuf::from("mongo/test.json"),
            replaced,
            bytes_read,
            bytes_written,
        }
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1073741824), "1.00 GB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(5)), "5.000초");
        assert_eq!(format_duration(Duration::from_secs(65)), "1분 5초");
    }

    #[test]
    fn test_record() {
        let mut stats = Statistics::new(3);

        stats.record(&result(2, 100, 140));
        stats.record(&result(0, 50, 0));
        stats.record(&result(1, 10, 30));

        assert_eq!(stats.processed, 3);
        assert_eq!(stats.changed, 2);
        assert_eq!(stats.replaced, 3);
        assert_eq!(stats.bytes_read, 160);
        assert_eq!(stats.bytes_written, 170);
    }
}
