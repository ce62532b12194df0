//! 파일 목록 확장 모듈
//!
//! 패턴마다 glob 매칭을 수행해 처리할 파일 목록을 만듭니다.

use crate::cli::RunMode;
use crate::error::{B64fError, Result};
use crate::fs::{MatchError, SourceFs};
use crate::transcode::MARKER_SUFFIX;

/// 모드에 맞게 패턴 보정
///
/// 디코딩 모드에서는 이미 인코딩된 파일만 대상이 되도록 `.b64`를 붙입니다.
pub fn effective_pattern(pattern: &str, mode: RunMode) -> String {
    match mode {
        RunMode::Decode => format!("{}{}", pattern, MARKER_SUFFIX),
        RunMode::Encode => pattern.to_string(),
    }
}

/// 패턴 목록을 파일 목록으로 확장
///
/// 패턴 순서, 그리고 패턴 내 매칭 순서를 그대로 유지합니다. 여러 패턴에
/// 걸리는 파일은 중복 제거 없이 여러 번 포함됩니다. 일치 항목이 없는 패턴은
/// 건너뜁니다.
pub fn resolve_file_set<S>(source: &S, patterns: &[String], mode: RunMode) -> Result<Vec<String>>
where
    S: SourceFs + ?Sized,
{
    let mut files = Vec::new();

    for pattern in patterns {
        let pattern = effective_pattern(pattern, mode);

        match source.glob(&pattern) {
            Ok(matched) => files.extend(matched),
            Err(MatchError::NoMatch) => continue,
            Err(source) => return Err(B64fError::PatternResolution { pattern, source }),
        }
    }

    Ok(files)
}
