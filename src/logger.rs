//! tracing 초기화

use tracing_subscriber::EnvFilter;

/// 기본 레벨(info)로 로그 초기화
pub fn init() {
    init_with_level("info");
}

/// 지정한 레벨로 로그 초기화
///
/// `RUST_LOG` 가 설정되어 있으면 그 값이 우선한다. 이미 초기화된 경우 무시.
pub fn init_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
