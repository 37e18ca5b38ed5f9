// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for the effective "today", log setup, and man page rendering
// role: utilities/helpers
// inputs: Optional date override; clap CommandFactory; RUST_LOG
// outputs: Calendar date, initialized subscriber, man page text
// side_effects: init_tracing installs the global subscriber (stderr)
// invariants:
// - effective_today is the only place that reads the system clock
// - log output never goes to stdout
// errors: render_man_page surfaces io errors from clap_mangen
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{Local, NaiveDate};
use clap::CommandFactory;
use tracing_subscriber::EnvFilter;

/// Returns the effective "today" given an optional override.
///
/// When `override_today` is `Some`, that date is returned; otherwise the
/// current local calendar date is used. Keeps `Local::now()` out of the
/// resolver so it stays deterministic under test.
pub fn effective_today(override_today: Option<NaiveDate>) -> NaiveDate {
  override_today.unwrap_or_else(|| Local::now().date_naive())
}

/// Install a stderr `fmt` subscriber honoring `RUST_LOG` (default `warn`).
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
