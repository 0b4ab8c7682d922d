// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::Error;
use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::debug;

pub(in crate::dotenv) static INIT: Once = Once::new();
pub(in crate::dotenv) static DEFAULT_FILENAME: &str = ".env";

#[derive(Debug, Default)]
pub struct Dotenv {
  vars: HashMap<String, String>,
}

impl Dotenv {
  pub fn new() -> Self {
    Self {
      vars: HashMap::new(),
    }
  }

  /// Reads `KEY=value` pairs from a dotenv file.
  ///
  /// Blank lines and `#` comments are skipped, an `export ` prefix is accepted
  /// and one pair of matching surrounding quotes is stripped from the value.
  /// Passing `None` reads `.env` from the working directory.
  pub fn load_from_file<P: AsRef<Path>>(&mut self, filename: Option<P>) -> Result<(), Error> {
    let path = filename.map_or_else(
      || PathBuf::from(DEFAULT_FILENAME),
      |p| p.as_ref().to_path_buf(),
    );

    if !path.exists() {
      return Err(Error::PathNotFound(path));
    }

    let reader = BufReader::new(File::open(&path)?);
    for (line_num, line) in reader.lines().enumerate() {
      let line = line?;
      let trimmed = line.trim();
      if trimmed.is_empty() || trimmed.starts_with('#') {
        continue;
      }

      let (key, value) = parse_line(trimmed)
        .map_err(|e| Error::ConfigError(format!("{}:{}: {}", path.display(), line_num + 1, e)))?;
      self.vars.insert(key, value);
    }

    Ok(())
  }

  /// Exports the loaded pairs, leaving variables that are already set untouched.
  pub fn apply(&self) -> usize {
    let mut applied = 0;
    for (key, value) in &self.vars {
      if env::var_os(key).is_none() {
        env::set_var(key, value);
        applied += 1;
      }
    }
    applied
  }

  pub fn get(&self, key: &str) -> Option<&String> {
    self.vars.get(key)
  }
}

fn parse_line(line: &str) -> Result<(String, String), String> {
  let line = line.strip_prefix("export ").unwrap_or(line);
  let (key, value) = line
    .split_once('=')
    .ok_or_else(|| "invalid format: missing '='".to_string())?;

  let key = key.trim();
  if key.is_empty() {
    return Err("empty key".to_string());
  }

  Ok((key.to_string(), unquote(value.trim()).to_string()))
}

fn unquote(value: &str) -> &str {
  for quote in ['"', '\''] {
    if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
      return &value[1..value.len() - 1];
    }
  }
  value
}

/// Loads `.env` once per process. A missing file is not an error.
pub fn load() -> Result<(), Error> {
  let mut result = Ok(());
  INIT.call_once(|| {
    let mut dotenv = Dotenv::new();
    match dotenv.load_from_file::<&str>(None) {
      Ok(()) => {
        let applied = dotenv.apply();
        debug!("Applied {} variables from {}", applied, DEFAULT_FILENAME);
      }
      Err(Error::PathNotFound(_)) => debug!("No {} file found", DEFAULT_FILENAME),
      Err(err) => result = Err(err),
    }
  });
  result
}
