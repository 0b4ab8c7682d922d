// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use config::{Config, Settings};
use courier::{missing_variables_notice, Cli, ServiceRunner};
use tracing::{level_filters::LevelFilter, warn};

#[cfg(debug_assertions)]
fn setup_logging(level: LevelFilter) {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_max_level(level)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging(level: LevelFilter) {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_max_level(level)
    .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.log_level.into());
  #[cfg(debug_assertions)]
  base::dotenv::load().context("Failed to load .env")?;

  let settings = Settings::load(cli.settings.as_deref()).context("Failed to load settings")?;
  let config = Config::from_env(settings);

  let missing = config.mail.missing();
  if !missing.is_empty() {
    warn!("Mail configuration incomplete, nothing will be sent");
    for line in missing_variables_notice(&missing) {
      println!("{}", line);
    }
    return Ok(());
  }

  let runner =
    ServiceRunner::new(&config, cli.email_only).context("Failed to set up notification services")?;
  let summary = runner.run(cli.report, Local::now().date_naive()).await;

  for line in summary.status_lines() {
    println!("{}", line);
  }

  Ok(())
}
