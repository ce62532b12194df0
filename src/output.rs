//! 터미널 출력 모듈
//!
//! 경고/에러는 표준 에러로, 진행 정보는 표준 출력으로 내보냅니다.

use colored::Colorize;

use crate::cli::RunMode;

/// 경고 메시지 출력
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 에러 메시지 출력
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 정보 메시지 출력
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 변환 완료 메시지 출력
pub fn print_conversion(from: &str, to: &str) {
    println!(
        "{} {} {} {}",
        "[OK]".green().bold(),
        from.dimmed(),
        "->".cyan(),
        to
    );
}

/// 드라이런 예정 항목 출력
pub fn print_planned(mode: RunMode, path: &str) {
    println!("  {} {}", format!("{:<6}", mode).bright_magenta(), path);
}
