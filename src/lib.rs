//! 시험 보고서의 온도 보정 로직을 라이브러리로 분리하여 CLI 뿐 아니라 다른 화면에서도 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod correction;
pub mod logging;
pub mod quantity;
pub mod reports;
pub mod session;
pub mod sink;
pub mod tcf;
pub mod ui_cli;
pub mod units;
