//! 파일 시스템 접근 모듈
//!
//! 읽기는 루트 기준의 읽기 전용 뷰(`SourceFs`)를 통해, 쓰기는 같은 상대 경로
//! 문자열로 주소를 지정하는 쓰기 기능(`SinkFs`)을 통해 수행합니다.

use glob::{MatchOptions, Pattern, PatternError};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// glob 매칭 실패 원인
#[derive(Error, Debug)]
pub enum MatchError {
    /// 패턴과 일치하는 파일 없음
    #[error("일치하는 파일이 없습니다")]
    NoMatch,

    /// 패턴 문법 오류
    #[error("유효하지 않은 패턴: {0}")]
    Pattern(#[from] PatternError),

    /// 디렉터리 탐색 중 I/O 실패
    #[error("디렉터리 탐색 실패 ({path:?}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 루트 기준 읽기 전용 파일 시스템 뷰
pub trait SourceFs {
    /// 루트 기준 상대 경로의 파일을 읽기용으로 엽니다.
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>>;

    /// 패턴과 일치하는 파일들의 상대 경로를 반환합니다.
    ///
    /// 일치하는 파일이 없으면 `MatchError::NoMatch`를 반환합니다.
    fn glob(&self, pattern: &str) -> Result<Vec<String>, MatchError>;
}

/// 상대 경로로 주소를 지정하는 쓰기 기능
pub trait SinkFs {
    /// 파일을 생성하거나 기존 내용을 비우고 쓰기용으로 엽니다.
    fn create(&self, path: &str) -> io::Result<Box<dyn Write + '_>>;
}

/// glob 매칭 옵션: `*`, `?`, `[..]`는 `/`를 넘지 않음
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// 디스크 디렉터리를 루트로 하는 읽기 전용 뷰
#[derive(Debug, Clone)]
pub struct RootFs {
    root: PathBuf,
}

impl RootFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 루트 기준 상대 경로 (UTF-8이 아니면 `None`)
    fn relative(&self, path: &Path) -> Option<String> {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_str()
            .map(str::to_owned)
    }
}

impl SourceFs for RootFs {
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        let file = File::open(self.root.join(path))?;
        Ok(Box::new(file))
    }

    fn glob(&self, pattern: &str) -> Result<Vec<String>, MatchError> {
        if pattern.is_empty() {
            return Err(MatchError::NoMatch);
        }

        let root = Pattern::escape(&self.root.to_string_lossy());
        let full = format!("{}/{}", root.trim_end_matches('/'), pattern);

        let mut files = Vec::new();
        for entry in glob::glob_with(&full, MATCH_OPTIONS)? {
            match entry {
                Ok(path) if path.is_file() => files.extend(self.relative(&path)),
                Ok(_) => {}
                // 탐색 중 사라진 디렉터리
                Err(e) if e.error().kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(MatchError::Io {
                        path: e.path().to_path_buf(),
                        source: e.into(),
                    })
                }
            }
        }

        if files.is_empty() {
            return Err(MatchError::NoMatch);
        }
        Ok(files)
    }
}

/// 실제 디스크에 쓰는 쓰기 기능
#[derive(Debug, Clone)]
pub struct DiskWriter {
    base: PathBuf,
}

impl DiskWriter {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl SinkFs for DiskWriter {
    fn create(&self, path: &str) -> io::Result<Box<dyn Write + '_>> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.base.join(path))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}
