// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod cli;
pub mod message;
pub mod runner;

pub use cli::{Cli, LogLevel};
pub use message::{compose, Composed};
pub use runner::{missing_variables_notice, RunSummary, ServiceRunner};
