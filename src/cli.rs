//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

/// 실행 모드
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// 원본 파일을 base64로 인코딩
    Encode,
    /// `.b64` 파일을 원본으로 디코딩
    #[default]
    Decode,
}

impl RunMode {
    /// 모드 인자 해석
    ///
    /// 정확히 `encode`일 때만 인코딩 모드이고, 그 외의 값이나 인자가 없으면
    /// 디코딩 모드입니다.
    ///
    /// # Examples
    /// ```
    /// use b64f::cli::RunMode;
    ///
    /// assert_eq!(RunMode::from_arg(Some("encode")), RunMode::Encode);
    /// assert_eq!(RunMode::from_arg(Some("decode")), RunMode::Decode);
    /// assert_eq!(RunMode::from_arg(None), RunMode::Decode);
    /// ```
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("encode") => RunMode::Encode,
            _ => RunMode::Decode,
        }
    }
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunMode::Encode => f.pad("encode"),
            RunMode::Decode => f.pad("decode"),
        }
    }
}

/// b64f CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "b64f",
    author = "YourName <your@email.com>",
    version,
    about = "BASE64 FILE TRANSCODER - glob 패턴으로 찾은 파일들을 base64로 일괄 인코딩/디코딩",
    long_about = r#"
BASE64 FILE TRANSCODER
======================

작업 폴더의 .b64f 파일(없으면 표준 입력)에서 한 줄에 하나씩 glob 패턴을 읽어
일치하는 파일들을 변환합니다.

  encode: <파일>     -> <파일>.b64
  decode: <파일>.b64 -> <파일>   (기본값)

예제:
  echo "*.txt" > .b64f && b64f encode
  b64f
  printf 'docs/*.md\n' | b64f encode --verbose
"#
)]
pub struct Args {
    /// 실행 모드 ("encode"이면 인코딩, 그 외에는 디코딩)
    #[arg(allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// 모드 뒤에 오는 추가 인자 (무시됨)
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// 작업 폴더 (읽기 루트이자 쓰기 기준 경로)
    #[arg(short = 'C', long, default_value = ".")]
    pub dir: PathBuf,

    /// 변환된 파일마다 한 줄씩 출력
    #[arg(short, long)]
    pub verbose: bool,

    /// 실제 변환 없이 처리될 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// 인자로부터 실행 모드 결정
    pub fn run_mode(&self) -> RunMode {
        RunMode::from_arg(self.mode.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_decode() {
        let args = Args::try_parse_from(["b64f"]).unwrap();
        assert_eq!(args.run_mode(), RunMode::Decode);
        assert_eq!(args.dir, PathBuf::from("."));
        assert!(!args.verbose);
        assert!(!args.dry_run);
    }

    #[test]
    fn test_encode_argument() {
        let args = Args::try_parse_from(["b64f", "encode", "-v"]).unwrap();
        assert_eq!(args.run_mode(), RunMode::Encode);
        assert!(args.verbose);
    }

    #[test]
    fn test_other_argument_is_decode() {
        for value in ["decode", "Encode", "ENCODE", "x"] {
            let args = Args::try_parse_from(["b64f", value]).unwrap();
            assert_eq!(args.run_mode(), RunMode::Decode, "mode {value}");
        }
    }

    #[test]
    fn test_dir_and_dry_run() {
        let args = Args::try_parse_from(["b64f", "encode", "-C", "data", "--dry-run"]).unwrap();
        assert_eq!(args.dir, PathBuf::from("data"));
        assert!(args.dry_run);
    }

    #[test]
    fn test_unknown_dash_argument_is_decode() {
        let args = Args::try_parse_from(["b64f", "-x"]).unwrap();
        assert_eq!(args.mode.as_deref(), Some("-x"));
        assert_eq!(args.run_mode(), RunMode::Decode);
    }

    #[test]
    fn test_known_flags_still_parse_as_flags() {
        let args = Args::try_parse_from(["b64f", "-v"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.mode, None);
        assert_eq!(args.run_mode(), RunMode::Decode);
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let args = Args::try_parse_from(["b64f", "encode", "extra", "more"]).unwrap();
        assert_eq!(args.run_mode(), RunMode::Encode);
        assert_eq!(args.extra, vec!["extra", "more"]);
    }
}
