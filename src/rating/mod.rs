//! 허용 전류와 송전 가능 전력 계산, 그리고 결과표 재배열.

pub mod engine;
pub mod formatter;

pub use engine::*;
pub use formatter::*;
