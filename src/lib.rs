//! b64f - BASE64 FILE TRANSCODER
//!
//! glob 패턴으로 찾은 파일들을 base64로 일괄 인코딩하거나, 인코딩된 `.b64`
//! 파일들을 원본으로 되돌리는 CLI 도구입니다.
//!
//! # 동작 방식
//!
//! - 📄 **패턴 입력**: 작업 폴더의 `.b64f` 파일에서 한 줄에 하나씩 읽고, 없으면 표준 입력에서 읽음
//! - 🔍 **파일 검색**: 디코딩 모드에서는 패턴 뒤에 `.b64`를 붙여서 검색
//! - 🔄 **변환**: `a.txt` → `a.txt.b64` (encode), `a.txt.b64` → `a.txt` (decode)
//! - ⛔ **즉시 중단**: 첫 에러에서 전체 작업 중단 (이미 쓴 파일은 유지)
//!
//! # 예제
//!
//! ```bash
//! # .b64f의 패턴으로 인코딩
//! echo "*.txt" > .b64f
//! b64f encode
//!
//! # 디코딩 (기본값)
//! b64f
//!
//! # 표준 입력으로 패턴 전달
//! printf 'docs/*.md\n' | b64f encode --verbose
//! ```

pub mod batch;
pub mod cli;
pub mod error;
pub mod fs;
pub mod output;
pub mod patterns;
pub mod resolver;
pub mod transcode;

// Re-exports for convenient access
pub use batch::{plan, run, transcode_all, Action, BatchOptions};
pub use cli::{Args, RunMode};
pub use error::{B64fError, IoOperation, Result};
pub use fs::{DiskWriter, MatchError, RootFs, SinkFs, SourceFs};
pub use patterns::{load_patterns, PatternList, PatternOrigin, CONTROL_FILE};
pub use resolver::resolve_file_set;
pub use transcode::{decode_file, decoded_path, encode_file, encoded_path, MARKER_SUFFIX};
