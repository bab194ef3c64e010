//! 핵심 계산/상태 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 코드를 사용한다.

pub mod agronomy;
pub mod app;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod feedback;
pub mod i18n;
pub mod logging;
pub mod navigation;
pub mod ui_cli;
