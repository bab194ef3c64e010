//! tracing 구독자 초기화.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// stderr로 출력하는 fmt 레이어를 설치한다. `RUST_LOG`가 있으면 `default_level`보다 우선한다.
///
/// 이미 전역 구독자가 있으면 아무 것도 하지 않는다.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
    if result.is_ok() {
        tracing::debug!(default_level, "logging initialised");
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_twice_is_harmless() {
        super::init("debug");
        super::init("not a valid filter ===");
    }
}
