//! base64 스트림 변환 모듈
//!
//! 원본 파일을 읽어 base64 인코더/디코더를 통과시킨 결과를 대상 파일에
//! 씁니다. 대상 경로는 원본 경로에 `.b64`를 붙이거나 떼어서 만듭니다.

use base64::alphabet;
use base64::engine::general_purpose::{self, GeneralPurpose, STANDARD};
use base64::read::DecoderReader;
use base64::write::EncoderWriter;
use std::io::{self, Read, Write};

use crate::error::{B64fError, IoOperation, Result};
use crate::fs::{SinkFs, SourceFs};

/// 인코딩된 파일을 나타내는 확장자
pub const MARKER_SUFFIX: &str = ".b64";

/// 스트림 복사 버퍼 크기
const CHUNK_SIZE: usize = 8 * 1024;

/// 디코딩 엔진: 패딩은 필수, 마지막 문자의 남는 비트는 허용
const DECODE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    general_purpose::PAD.with_decode_allow_trailing_bits(true),
);

/// 인코딩 결과 경로
///
/// # Examples
/// ```
/// use b64f::transcode::encoded_path;
///
/// assert_eq!(encoded_path("a.txt"), "a.txt.b64");
/// ```
pub fn encoded_path(path: &str) -> String {
    format!("{}{}", path, MARKER_SUFFIX)
}

/// 디코딩 결과 경로
///
/// 끝의 `.b64`를 한 번 제거합니다. 없으면 그대로 반환합니다.
///
/// # Examples
/// ```
/// use b64f::transcode::decoded_path;
///
/// assert_eq!(decoded_path("a.txt.b64"), "a.txt");
/// assert_eq!(decoded_path("a.b64.b64"), "a.b64");
/// assert_eq!(decoded_path("a.txt"), "a.txt");
/// ```
pub fn decoded_path(path: &str) -> &str {
    path.strip_suffix(MARKER_SUFFIX).unwrap_or(path)
}

/// 파일 하나를 base64로 인코딩
///
/// `<path>.b64`를 생성(또는 비우고 덮어쓰기)하고, 인코더 마무리(패딩 출력)와
/// 플러시까지 끝낸 뒤 대상 경로를 반환합니다.
pub fn encode_file<S, W>(source: &S, sink: &W, path: &str) -> Result<String>
where
    S: SourceFs + ?Sized,
    W: SinkFs + ?Sized,
{
    let mut reader = source
        .open(path)
        .map_err(|e| B64fError::io(path, IoOperation::OpenRead, e))?;

    let target = encoded_path(path);
    let writer = sink
        .create(&target)
        .map_err(|e| B64fError::io(&target, IoOperation::OpenWrite, e))?;
    let mut encoder = EncoderWriter::new(writer, &STANDARD);

    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(B64fError::io(path, IoOperation::Copy, e)),
        };
        encoder
            .write_all(&buf[..n])
            .map_err(|e| B64fError::io(&target, IoOperation::Copy, e))?;
    }

    let mut writer = encoder
        .finish()
        .map_err(|e| B64fError::io(&target, IoOperation::Flush, e))?;
    writer
        .flush()
        .map_err(|e| B64fError::io(&target, IoOperation::Flush, e))?;

    Ok(target)
}

/// `.b64` 파일 하나를 원본으로 디코딩
///
/// 입력의 줄바꿈(`\r`, `\n`)은 무시합니다. 잘못된 base64 데이터는
/// `B64fError::Codec`으로 실패합니다. 대상 파일은 첫 디코딩 결과가 나왔을 때
/// (빈 입력이면 끝에서) 생성되므로, 첫 블록에서 거부된 입력은 대상 파일을
/// 남기지 않습니다.
pub fn decode_file<S, W>(source: &S, sink: &W, path: &str) -> Result<String>
where
    S: SourceFs + ?Sized,
    W: SinkFs + ?Sized,
{
    let reader = source
        .open(path)
        .map_err(|e| B64fError::io(path, IoOperation::OpenRead, e))?;

    let target = decoded_path(path);
    let mut decoder = DecoderReader::new(SkipLineBreaks::new(reader), &DECODE_ENGINE);
    let mut output = PendingOutput::new(sink, target);

    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = match decoder.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) if is_decode_error(&e) => {
                return Err(B64fError::Codec {
                    path: path.to_string(),
                    source: e,
                })
            }
            Err(e) => return Err(B64fError::io(path, IoOperation::Copy, e)),
        };
        output.write_all(&buf[..n])?;
    }
    output.finish()?;

    Ok(target.to_string())
}

/// 디코더가 낸 데이터 오류인지 판별
fn is_decode_error(e: &io::Error) -> bool {
    e.get_ref()
        .is_some_and(|inner| inner.is::<base64::DecodeError>())
}

/// 줄바꿈 바이트를 걸러내는 리더
struct SkipLineBreaks<R> {
    inner: R,
}

impl<R: Read> SkipLineBreaks<R> {
    fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read> Read for SkipLineBreaks<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = self.inner.read(buf)?;
            if n == 0 {
                return Ok(0);
            }

            let mut kept = 0;
            for i in 0..n {
                let b = buf[i];
                if b != b'\r' && b != b'\n' {
                    buf[kept] = b;
                    kept += 1;
                }
            }
            if kept > 0 {
                return Ok(kept);
            }
        }
    }
}

/// 첫 쓰기 시점에 생성되는 대상 파일
struct PendingOutput<'a, W: SinkFs + ?Sized> {
    sink: &'a W,
    path: &'a str,
    writer: Option<Box<dyn Write + 'a>>,
}

impl<'a, W: SinkFs + ?Sized> PendingOutput<'a, W> {
    fn new(sink: &'a W, path: &'a str) -> Self {
        Self {
            sink,
            path,
            writer: None,
        }
    }

    fn writer(&mut self) -> Result<&mut Box<dyn Write + 'a>> {
        let writer = match self.writer.take() {
            Some(writer) => writer,
            None => {
                let sink: &'a W = self.sink;
                sink.create(self.path)
                    .map_err(|e| B64fError::io(self.path, IoOperation::OpenWrite, e))?
            }
        };
        Ok(self.writer.insert(writer))
    }

    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        let path = self.path;
        self.writer()?
            .write_all(data)
            .map_err(|e| B64fError::io(path, IoOperation::Copy, e))
    }

    fn finish(mut self) -> Result<()> {
        let path = self.path;
        self.writer()?
            .flush()
            .map_err(|e| B64fError::io(path, IoOperation::Flush, e))
    }
}
