use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Failures that end a run. `main` reports them and exits non-zero.
#[derive(Debug, Error)]
pub enum WeeklyError {
  #[error(transparent)]
  Usage(#[from] UsageError),

  #[error("writing dataview block to {}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
  #[error("you must provide at least the markdown file path (or an end date and then the file path)\n\n{}", USAGE)]
  NoArguments,

  #[error("end date {end_date} given but no file path provided\n\n{}", USAGE)]
  NoPath { end_date: NaiveDate },
}

const USAGE: &str = "Usage: weekly-done [YYYY-MM-DD] <PATH_SEGMENT>...";
