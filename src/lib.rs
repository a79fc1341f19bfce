//! 단위 변환 엔진. 변환 규칙과 저장소를 라이브러리로 분리하여 CLI 외의 화면에서도 재사용한다.

pub mod advanced;
pub mod app;
pub mod category;
pub mod config;
pub mod conversion;
pub mod favorites;
pub mod format;
pub mod history;
pub mod i18n;
pub mod id;
pub mod quick;
pub mod session;
pub mod store;
pub mod ui_cli;
pub mod units;

pub use category::Category;
pub use conversion::convert;
pub use format::format_number;
