//! oidconv - MONGO OBJECTID CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use oidconv::{
    cli::Args,
    pattern::FilePattern,
    processor::{convert_all, ConvertOptions},
    stats::Statistics,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let pattern = FilePattern::new(Some(args.pattern.clone())).context("패턴 컴파일 실패")?;

    // 헤더 출력
    print_header(&pattern);

    // 대상 파일 수집
    let files = pattern.collect().context("파일 검색 실패")?;

    if files.is_empty() {
        println!("{}", "⚠️ 변환할 JSON 파일이 없습니다.".yellow());
        return Ok(());
    }

    println!(
        "  {} 발견된 파일 수: {}",
        "📋".bright_white(),
        files.len().to_string().bright_green()
    );

    run_conversion(&args, &pattern, &files)
}

/// 헤더 출력
fn print_header(pattern: &FilePattern) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 🔑 MONGO OBJECTID CONVERTER".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 대상 패턴: {}", "🔍".bright_magenta(), pattern.as_str());
    println!(
        "  {} {}",
        "⚠️".bright_yellow(),
        "파일을 제자리에 덮어씁니다 (백업 없음)".yellow()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!("\n{}", "📁 파일 검색 중...".bright_cyan());
}

/// 순차 변환 실행
fn run_conversion(args: &Args, pattern: &FilePattern, files: &[PathBuf]) -> Result<()> {
    let mut stats = Statistics::new(files.len());
    let pb = create_progress_bar(files.len(), args.no_progress);
    let options = ConvertOptions::new();

    println!("\n{}", "⚡ 변환 중...".bright_cyan());

    let outcome = convert_all(files, &options, |result| {
        stats.record(result);
        pb.inc(1);

        if args.verbose {
            let name = result.path.display().to_string();
            if result.is_changed() {
                pb.println(format!(
                    "  {} {} ({}개)",
                    "✓".green(),
                    name,
                    result.replaced
                ));
            } else {
                pb.println(format!("  {} {}", "-".dimmed(), name.dimmed()));
            }
        }
    });

    if let Err(e) = outcome {
        pb.abandon_with_message("중단됨");
        println!(
            "\n{} {} 개 파일 처리 후 중단되었습니다.",
            "❌".bright_red(),
            stats.processed.to_string().red()
        );
        return Err(e).context("변환 실패");
    }

    pb.finish_with_message("완료!");

    // 통계 출력
    stats.print_summary();

    println!("\n{} 변환 완료: {}\n", "✅".bright_green(), pattern.as_str());

    Ok(())
}

/// 진행률 바 생성
fn create_progress_bar(total: usize, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args_for(dir: &std::path::Path) -> Args {
        Args {
            pattern: format!("{}/*.json", glob::Pattern::escape(&dir.to_string_lossy())),
            verbose: true,
            no_progress: true,
        }
    }

    #[test]
    fn test_run_conversion() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("staff.json");
        fs::write(&path, r#"{"_id": "0123456789abcdef01234567"}"#).unwrap();

        let args = args_for(temp_dir.path());
        let pattern = FilePattern::new(Some(args.pattern.clone())).unwrap();
        let files = pattern.collect().unwrap();

        run_conversion(&args, &pattern, &files).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"{"_id": {"$oid" : "0123456789abcdef01234567" }}"#
        );
    }

    #[test]
    fn test_run_conversion_reports_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, b"\xc3\x28").unwrap();

        let args = args_for(temp_dir.path());
        let pattern = FilePattern::new(Some(args.pattern.clone())).unwrap();
        let err = run_conversion(&args, &pattern, &[path]).unwrap_err();

        assert!(err.to_string().contains("변환 실패"));
    }
}
