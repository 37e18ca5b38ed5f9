use anyhow::Result;
use clap::Parser;

mod append;
mod cli;
mod error;
mod render;
mod util;
mod window;

use crate::cli::{Cli, normalize};
use crate::window::DateWindow;

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  util::init_tracing();

  // Phase 1: resolve end date and target path
  let today = util::effective_today(window::parse_now_override(cli.now_override.as_deref())?);
  let cfg = normalize(cli, today)?;

  // Phase 2: render the block for the week ending on end_date
  let week = DateWindow::ending_on(cfg.end_date);
  tracing::debug!(start = %week.start(), end = %week.end(), "rendering window");
  let block = render::render_block(&week);

  // Phase 3: append, then point the operator at the file
  append::append_block(&cfg.file_path, &block)?;
  println!("Appended dataview block to {}", cfg.file_path.display());

  Ok(())
}
