use anyhow::{Result, bail};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

// Date-window types live here to keep main focused.

/// Days between the first and last date of a window; the window itself holds one more.
pub const WINDOW_DAYS: i64 = 7;

static CANONICAL_DATE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("canonical date pattern"));

/// Parse a canonical `YYYY-MM-DD` calendar date.
///
/// Only the zero-padded form is accepted; `2024-1-1` or `2024-13-01` yield `None`.
/// Dates whose window would start before 0001-01-01 are rejected too, since
/// their start could not be rendered as a four-digit year.
pub fn parse_end_date(raw: &str) -> Option<NaiveDate> {
  if !CANONICAL_DATE.is_match(raw) {
    return None;
  }
  let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
  let earliest_start = NaiveDate::from_ymd_opt(1, 1, 1)?;
  (date - chrono::Duration::days(WINDOW_DAYS) >= earliest_start).then_some(date)
}

/// Parse a `--now-override` string into the local calendar date it names.
/// Accepts `YYYY-MM-DD`, RFC3339 (e.g. 2025-08-15T12:00:00Z) or a naive local
/// timestamp formatted as `%Y-%m-%dT%H:%M:%S`.
pub fn parse_now_override(s: Option<&str>) -> Result<Option<NaiveDate>> {
  let Some(raw) = s else {
    return Ok(None);
  };

  if let Some(date) = parse_end_date(raw) {
    return Ok(Some(date));
  }

  if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
    return Ok(Some(dt.with_timezone(&Local).date_naive()));
  }

  if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
    return Ok(Some(ndt.date()));
  }

  bail!("invalid --now-override {raw:?}, expected YYYY-MM-DD or an RFC3339 timestamp")
}

/// The eight consecutive calendar dates `end - 7 days ..= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateWindow {
  start: NaiveDate,
  end: NaiveDate,
}

impl DateWindow {
  pub fn ending_on(end: NaiveDate) -> Self {
    Self {
      start: end - chrono::Duration::days(WINDOW_DAYS),
      end,
    }
  }

  pub fn start(&self) -> NaiveDate {
    self.start
  }

  pub fn end(&self) -> NaiveDate {
    self.end
  }

  /// Ascending, one day apart, both ends included.
  pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
    self.start.iter_days().take(WINDOW_DAYS as usize + 1)
  }
}
