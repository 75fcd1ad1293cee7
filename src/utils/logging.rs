//! 로그 출력 보조 함수

use crate::handlers::HandlerResponse;
use tracing::{info, warn};

/// 명령 시작 배너
///
/// # 매개변수
/// - `command`: 실행할 명령 이름
pub fn log_startup(command: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 {} 시작 - {}", command, chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("{}", "=".repeat(60));
}

/// 핸들러 응답 요약
pub fn log_response(response: &HandlerResponse, verbose: bool) {
    if response.is_success() {
        info!("✅ 상태 코드 {}", response.status_code);
    } else {
        warn!("⚠️ 상태 코드 {}", response.status_code);
    }
    if verbose {
        info!("본문: {}", truncate_text(&response.body, 200));
    }
}

/// KB 문서 변환 통계
///
/// # 매개변수
/// - `mountains`: 산 수
/// - `courses`: 전체 코스 수
/// - `removed`: 최소 거리 조건으로 제외된 코스 수
/// - `written`: 저장한 문서 수
/// - `output_path`: 저장 경로
pub fn print_kb_stats(
    mountains: usize,
    courses: usize,
    removed: usize,
    written: usize,
    output_path: &str,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 KB 문서 변환 완료");
    info!(
        "완료 시각: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("⛰️ 산: {}개", mountains);
    info!("🥾 코스: {}개", courses);
    info!("✂️ 제외: {}개", removed);
    info!("✅ 저장: {}개", written);
    info!("{}", "=".repeat(60));
    info!("\n저장 위치: {}", output_path);
}

/// 긴 텍스트를 로그용으로 자름
///
/// # 반환
/// `max_len` 글자를 넘으면 잘라서 `...` 를 붙인 문자열
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("서울특별시", 2), "서울...");
        assert_eq!(truncate_text("서울", 2), "서울");
    }
}
