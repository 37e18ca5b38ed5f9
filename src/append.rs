// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Append a rendered dataview block to the target markdown file
// role: io/sink
// inputs: Target path, rendered block text
// outputs: Bytes appended at the end of the file
// side_effects: Creates the file when absent; never truncates or reads it
// invariants:
// - existing content is a byte-for-byte prefix of the file after a successful append
// - the handle is closed on every exit path (dropped at scope end)
// errors: WeeklyError::Io carrying the path and the underlying io::Error; no retry, partial writes stay
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::WeeklyError;

pub fn append_block(path: &Path, block: &str) -> Result<(), WeeklyError> {
  let io_err = |source: std::io::Error| WeeklyError::Io {
    path: path.to_path_buf(),
    source,
  };

  let mut file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .map_err(io_err)?;

  file.write_all(block.as_bytes()).map_err(io_err)?;
  file.flush().map_err(io_err)?;

  tracing::debug!(path = %path.display(), bytes = block.len(), "appended block");
  Ok(())
}
