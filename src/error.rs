//! 에러 타입 정의 모듈
//!
//! b64f에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::fmt;
use std::io;
use thiserror::Error;

use crate::fs::MatchError;

/// 실패한 파일 작업의 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    /// 원본 파일 읽기용 열기
    OpenRead,
    /// 대상 파일 쓰기용 생성
    OpenWrite,
    /// 스트림 복사 (읽기/쓰기)
    Copy,
    /// 인코더 마무리 및 플러시
    Flush,
}

impl fmt::Display for IoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoOperation::OpenRead => write!(f, "읽기용 열기"),
            IoOperation::OpenWrite => write!(f, "쓰기용 열기"),
            IoOperation::Copy => write!(f, "스트림 복사"),
            IoOperation::Flush => write!(f, "플러시"),
        }
    }
}

/// b64f에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum B64fError {
    /// 제어 파일과 표준 입력 모두에서 패턴을 읽지 못함
    #[error("패턴 목록을 읽을 수 없습니다: {source}")]
    PatternSource {
        #[source]
        source: io::Error,
    },

    /// 패턴 확장 실패 (일치 항목 없음은 제외)
    #[error("패턴 '{pattern}'으로 파일을 찾지 못했습니다: {source}")]
    PatternResolution {
        pattern: String,
        #[source]
        source: MatchError,
    },

    /// 파일 열기/복사/플러시 실패
    #[error("{op} 실패 ({path}): {source}")]
    Io {
        path: String,
        op: IoOperation,
        #[source]
        source: io::Error,
    },

    /// 올바르지 않은 base64 데이터
    #[error("base64 디코딩 실패 ({path}): {source}")]
    Codec {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl B64fError {
    pub(crate) fn io(path: &str, op: IoOperation, source: io::Error) -> Self {
        B64fError::Io {
            path: path.to_string(),
            op,
            source,
        }
    }
}

/// b64f 결과 타입 별칭
pub type Result<T> = std::result::Result<T, B64fError>;
