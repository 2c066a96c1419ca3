//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 밖에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod i18n;
pub mod rating;
pub mod reference;
pub mod session;
pub mod transcript;
pub mod ui_cli;
