// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod dispatch;
pub mod dotenv;

pub use dispatch::{status_line, DispatchResult, DispatchStatus, PLACEHOLDER};
pub use error::{Error, ErrorKind};

#[cfg(feature = "testing")]
pub mod testing;
