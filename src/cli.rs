use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{UsageError, WeeklyError};
use crate::window;

#[derive(Parser, Debug)]
#[command(
    name = "weekly-done",
    version,
    about = "Append a Dataview query for the last week of completed tasks to a markdown note",
    long_about = None
)]
pub struct Cli {
  /// Optional end date (YYYY-MM-DD, default: today) followed by the note's path.
  /// Remaining segments are joined into one path, so unquoted spaces are fine.
  /// Flags are only recognized before the first segment.
  #[arg(
    value_name = "[END_DATE] PATH",
    value_parser = clap::value_parser!(OsString),
    trailing_var_arg = true,
    allow_hyphen_values = true
  )]
  pub segments: Vec<OsString>,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override "today" for the default end date (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub end_date: NaiveDate,
  pub end_date_explicit: bool,
  pub file_path: PathBuf,
}

/// Split the positional arguments into an end date and a target path.
///
/// Argument 0 is the end date when it parses as `YYYY-MM-DD`; otherwise
/// `today` is used and every argument is a path segment.
pub fn resolve(segments: &[OsString], today: NaiveDate) -> Result<EffectiveConfig, UsageError> {
  let Some((first, rest)) = segments.split_first() else {
    return Err(UsageError::NoArguments);
  };

  let explicit_end = first.to_str().and_then(window::parse_end_date);
  let (end_date, end_date_explicit, path_segments) = match explicit_end {
    Some(end_date) => {
      if rest.is_empty() {
        return Err(UsageError::NoPath { end_date });
      }
      (end_date, true, rest)
    }
    None => (today, false, segments),
  };

  Ok(EffectiveConfig {
    end_date,
    end_date_explicit,
    file_path: path_segments.iter().collect(),
  })
}

pub fn normalize(cli: Cli, today: NaiveDate) -> Result<EffectiveConfig> {
  let cfg = resolve(&cli.segments, today).map_err(WeeklyError::Usage)?;
  tracing::debug!(
    end_date = %cfg.end_date,
    explicit = cfg.end_date_explicit,
    path = %cfg.file_path.display(),
    "resolved invocation"
  );
  Ok(cfg)
}
