//! tracing 구독자 초기화.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogConfig;

/// 로그 시스템을 초기화한다.
///
/// `RUST_LOG`가 있으면 그 값을, 없으면 설정 파일의 필터를 쓴다.
/// 이미 초기화되어 있으면 아무것도 하지 않는다.
pub fn init(cfg: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    let _ = if cfg.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// 테스트용. debug 수준까지 테스트 출력으로 보낸다.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
