//! 패턴 목록 로딩 모듈
//!
//! 작업 폴더의 제어 파일을 우선 읽고, 열거나 읽을 수 없으면 표준 입력으로
//! 대체합니다.

use std::io::{self, BufRead, BufReader};

use crate::error::{B64fError, Result};
use crate::fs::SourceFs;
use crate::output;

/// 패턴 목록이 담긴 제어 파일 이름
pub const CONTROL_FILE: &str = ".b64f";

/// 패턴을 읽어 온 출처
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternOrigin {
    ControlFile,
    Stdin,
}

/// 읽어 온 패턴 목록
#[derive(Debug, Clone)]
pub struct PatternList {
    /// 입력 순서 그대로의 패턴 (빈 줄은 빈 문자열)
    pub patterns: Vec<String>,
    pub origin: PatternOrigin,
}

/// 패턴 목록 로딩
///
/// 제어 파일을 읽지 못하면 경고를 한 번 출력하고 `stdin`에서 읽습니다.
/// 제어 파일을 읽은 경우 `stdin`은 건드리지 않습니다.
pub fn load_patterns<S, R>(source: &S, stdin: R) -> Result<PatternList>
where
    S: SourceFs + ?Sized,
    R: BufRead,
{
    match read_control_file(source) {
        Ok(patterns) => Ok(PatternList {
            patterns,
            origin: PatternOrigin::ControlFile,
        }),
        Err(e) => {
            output::print_warning(&format!(
                "{} 파일에서 패턴을 읽지 못했습니다: {}. 표준 입력에서 읽습니다.",
                CONTROL_FILE, e
            ));
            let patterns =
                read_patterns(stdin).map_err(|source| B64fError::PatternSource { source })?;
            Ok(PatternList {
                patterns,
                origin: PatternOrigin::Stdin,
            })
        }
    }
}

fn read_control_file<S: SourceFs + ?Sized>(source: &S) -> io::Result<Vec<String>> {
    let file = source.open(CONTROL_FILE)?;
    read_patterns(BufReader::new(file))
}

/// 한 줄에 하나씩 패턴 읽기
///
/// 줄 끝의 `\n` 또는 `\r\n`만 제거하고 그 외 공백은 그대로 둡니다.
pub fn read_patterns<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::memory::MemFs;
    use std::io::{Cursor, Read};

    /// 읽으면 항상 실패하는 입력
    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    #[test]
    fn test_read_patterns_keeps_blank_lines_and_spaces() {
        let input = Cursor::new("*.txt\n\n docs/*.md \r\nlast");
        let patterns = read_patterns(input).unwrap();
        assert_eq!(patterns, vec!["*.txt", "", " docs/*.md ", "last"]);
    }

    #[test]
    fn test_read_patterns_empty_input() {
        let patterns = read_patterns(Cursor::new("")).unwrap();
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_control_file_takes_precedence() {
        let fs = MemFs::new().with_file(CONTROL_FILE, b"*.txt\n*.md\n");

        // 표준 입력을 읽으면 실패하므로, 성공은 stdin을 건드리지 않았다는 뜻
        let list = load_patterns(&fs, BufReader::new(BrokenInput)).unwrap();

        assert_eq!(list.origin, PatternOrigin::ControlFile);
        assert_eq!(list.patterns, vec!["*.txt", "*.md"]);
    }

    #[test]
    fn test_fallback_to_stdin_when_missing() {
        let fs = MemFs::new();
        let list = load_patterns(&fs, Cursor::new("*.bin\n")).unwrap();

        assert_eq!(list.origin, PatternOrigin::Stdin);
        assert_eq!(list.patterns, vec!["*.bin"]);
    }

    #[test]
    fn test_fallback_to_stdin_when_unreadable() {
        let fs = MemFs::new().with_unreadable(CONTROL_FILE, b"*.txt\n");
        let list = load_patterns(&fs, Cursor::new("*.log")).unwrap();

        assert_eq!(list.origin, PatternOrigin::Stdin);
        assert_eq!(list.patterns, vec!["*.log"]);
    }

    #[test]
    fn test_both_sources_fail() {
        let fs = MemFs::new();
        let err = load_patterns(&fs, BufReader::new(BrokenInput)).unwrap_err();

        match err {
            B64fError::PatternSource { source } => {
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe)
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
