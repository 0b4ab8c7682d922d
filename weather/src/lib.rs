// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod config;
pub mod models;
pub mod service;

pub use config::WeatherConfig;
pub use models::report::{Report, WeatherReport};
pub use service::{report_or_degraded, WeatherProvider, WeatherService};

pub mod constants {
  /// Condition, temperature, wind and moon phase; only the first three are read.
  pub(crate) const REPORT_QUERY: &str = "format=%C+%t+%w+%m";
}
