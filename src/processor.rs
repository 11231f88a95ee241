//! 파일 변환 모듈
//!
//! 개별 JSON 파일의 읽기, ObjectId 변환, 덮어쓰기를 담당합니다.

use memmap2::Mmap;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{OidConvError, Result};
use crate::oid::convert_text;

/// 파일 변환 결과
#[derive(Debug)]
pub struct ConvertResult {
    /// 처리된 파일 경로
    pub path: PathBuf,
    /// 치환된 ObjectId 수
    pub replaced: usize,
    /// 원본 파일 크기
    pub bytes_read: u64,
    /// 기록한 바이트 수 (변경 없으면 0)
    pub bytes_written: u64,
}

impl ConvertResult {
    /// 파일이 다시 쓰였는지 여부
    pub fn is_changed(&self) -> bool {
        self.replaced > 0
    }
}

/// 변환 옵션
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// 대용량 파일 임계값 (이상이면 메모리 매핑 사용)
    pub mmap_threshold: u64,
}

impl ConvertOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self {
            mmap_threshold: 10 * 1024 * 1024, // 10MB
        }
    }

    /// 메모리 매핑 임계값 설정
    pub fn with_mmap_threshold(mut self, threshold: u64) -> Self {
        self.mmap_threshold = threshold;
        self
    }
}

/// 단일 JSON 파일 변환
///
/// 파일 전체를 읽어 ObjectId 문자열을 치환한 뒤 같은 경로에 덮어씁니다.
/// 치환할 문자열이 없으면 파일을 다시 쓰지 않습니다.
///
/// # Arguments
/// * `path` - 변환할 JSON 파일 경로
/// * `options` - 변환 옵션
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
    let file_size = fs::metadata(path)
        .map_err(|e| read_error(path, e))?
        .len();

    let content = if file_size >= options.mmap_threshold {
        read_with_mmap(path)?
    } else {
        read_with_reader(path)?
    };

    let conversion = convert_text(&content);
    let mut bytes_written = 0;

    if conversion.is_changed() {
        fs::write(path, conversion.text.as_bytes()).map_err(|e| OidConvError::WriteError {
            file: path.to_path_buf(),
            source: e,
        })?;
        bytes_written = conversion.text.len() as u64;
    }

    Ok(ConvertResult {
        path: path.to_path_buf(),
        replaced: conversion.replaced,
        bytes_read: file_size,
        bytes_written,
    })
}

/// 여러 파일을 순서대로 변환
///
/// 첫 번째 실패에서 즉시 중단합니다. 이미 변환된 파일은 그대로 남고,
/// 아직 처리하지 않은 파일은 건드리지 않습니다.
///
/// # Arguments
/// * `paths` - 변환할 파일 목록
/// * `options` - 변환 옵션
/// * `on_file` - 파일 하나가 끝날 때마다 호출되는 콜백
pub fn convert_all<F>(
    paths: &[PathBuf],
    options: &ConvertOptions,
    mut on_file: F,
) -> Result<Vec<ConvertResult>>
where
    F: FnMut(&ConvertResult),
{
    let mut results = Vec::with_capacity(paths.len());

    for path in paths {
        let result = convert_file(path, options)?;
        on_file(&result);
        results.push(result);
    }

    Ok(results)
}

/// 버퍼 리더를 사용한 텍스트 읽기
fn read_with_reader(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| read_error(path, e))?;

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| read_error(path, e))?;

    decode(path, bytes)
}

/// 메모리 매핑을 사용한 텍스트 읽기 (대용량 파일용)
///
/// 덮어쓰기 전에 매핑이 해제되도록 내용을 복사해 반환합니다.
fn read_with_mmap(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| read_error(path, e))?;

    let mmap = unsafe { Mmap::map(&file).map_err(|e| read_error(path, e))? };

    std::str::from_utf8(&mmap)
        .map(str::to_owned)
        .map_err(|e| OidConvError::EncodingError {
            file: path.to_path_buf(),
            source: e,
        })
}

fn decode(path: &Path, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| OidConvError::EncodingError {
        file: path.to_path_buf(),
        source: e.utf8_error(),
    })
}

fn read_error(path: &Path, source: std::io::Error) -> OidConvError {
    OidConvError::ReadError {
        file: path.to_path_buf(),
        source,
    }
}
