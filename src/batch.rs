//! 일괄 변환 모듈
//!
//! 패턴 로딩, 파일 목록 확장, 파일별 변환을 순서대로 실행합니다. 첫 에러에서
//! 전체 작업을 중단하며, 이미 쓴 파일은 되돌리지 않습니다.

use std::io::BufRead;

use crate::cli::RunMode;
use crate::error::Result;
use crate::fs::{SinkFs, SourceFs};
use crate::output;
use crate::patterns::load_patterns;
use crate::resolver::resolve_file_set;
use crate::transcode::{decode_file, encode_file, MARKER_SUFFIX};

/// 파일 하나에 적용할 작업
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Encode,
    Decode,
}

/// 일괄 처리 옵션
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// 실행 모드 (실행 중 변하지 않음)
    pub mode: RunMode,
    /// 변환된 파일 출력 여부
    pub verbose: bool,
    /// 목록만 표시하고 쓰지 않음
    pub dry_run: bool,
}

impl BatchOptions {
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// 상세 출력 설정
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 드라이런 설정
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// 모드와 경로로 작업 결정
///
/// 인코딩 모드에서 이미 `.b64`로 끝나는 파일은 건너뜁니다(`None`).
///
/// # Examples
/// ```
/// use b64f::batch::{plan, Action};
/// use b64f::cli::RunMode;
///
/// assert_eq!(plan(RunMode::Encode, "a.txt"), Some(Action::Encode));
/// assert_eq!(plan(RunMode::Encode, "a.txt.b64"), None);
/// assert_eq!(plan(RunMode::Decode, "a.txt.b64"), Some(Action::Decode));
/// ```
pub fn plan(mode: RunMode, path: &str) -> Option<Action> {
    match mode {
        RunMode::Decode => Some(Action::Decode),
        RunMode::Encode if path.ends_with(MARKER_SUFFIX) => None,
        RunMode::Encode => Some(Action::Encode),
    }
}

/// 파일 목록을 순서대로 변환
///
/// 첫 에러를 그대로 반환하며 나머지 파일은 처리하지 않습니다.
pub fn transcode_all<S, W>(
    source: &S,
    sink: &W,
    files: &[String],
    options: &BatchOptions,
) -> Result<()>
where
    S: SourceFs + ?Sized,
    W: SinkFs + ?Sized,
{
    for path in files {
        let Some(action) = plan(options.mode, path) else {
            continue;
        };

        let target = match action {
            Action::Encode => encode_file(source, sink, path)?,
            Action::Decode => decode_file(source, sink, path)?,
        };

        if options.verbose {
            output::print_conversion(path, &target);
        }
    }

    Ok(())
}

/// 전체 파이프라인 실행
///
/// `stdin`은 제어 파일을 읽을 수 없을 때만 사용됩니다.
pub fn run<S, W, R>(source: &S, sink: &W, stdin: R, options: &BatchOptions) -> Result<()>
where
    S: SourceFs + ?Sized,
    W: SinkFs + ?Sized,
    R: BufRead,
{
    let list = load_patterns(source, stdin)?;
    let files = resolve_file_set(source, &list.patterns, options.mode)?;

    if options.dry_run {
        print_dry_run(&files, options.mode);
        return Ok(());
    }

    transcode_all(source, sink, &files, options)
}

/// 드라이런 출력
fn print_dry_run(files: &[String], mode: RunMode) {
    let planned: Vec<&String> = files
        .iter()
        .filter(|path| plan(mode, path).is_some())
        .collect();

    output::print_info(&format!("처리 예정 파일: {}개", planned.len()));
    for path in planned {
        output::print_planned(mode, path);
    }
}
