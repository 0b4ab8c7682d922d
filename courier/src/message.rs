// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use chrono::NaiveDate;
use weather::Report;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composed {
  pub subject: String,
  pub email_body: String,
  pub chat_body: String,
}

/// Builds the subject and both bodies; depends on nothing but its arguments.
pub fn compose(report: &Report, city: &str, date: NaiveDate) -> Composed {
  let date = date.format(DATE_FORMAT);
  let headline = format!("🦞 Lobster weather briefing: {} {} forecast", date, city);

  Composed {
    email_body: format!(
      "Hi, here is your daily weather report.\n\n{}\n\n[This email was sent automatically by courier]",
      report
    ),
    chat_body: format!(
      "🌟 *{}* 🌟\n\nHi, here is today's weather report!\n\n{}",
      headline, report
    ),
    subject: headline,
  }
}
