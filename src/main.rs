//! b64f - BASE64 FILE TRANSCODER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use b64f::{
    batch::{self, BatchOptions},
    cli::Args,
    fs::{DiskWriter, RootFs},
    output,
};

fn main() {
    // Windows 터미널 색상 지원
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// 인자로 파이프라인 구성 후 실행
fn run(args: &Args) -> Result<()> {
    let options = BatchOptions::new(args.run_mode())
        .with_verbose(args.verbose)
        .with_dry_run(args.dry_run);

    let source = RootFs::new(args.dir.clone());
    let sink = DiskWriter::new(args.dir.clone());
    let stdin = io::stdin().lock();

    batch::run(&source, &sink, stdin, &options)
        .with_context(|| format!("{} 작업 실패", options.mode))?;

    Ok(())
}
