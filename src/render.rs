use crate::window::DateWindow;

const FENCE_OPEN: &str = "```dataview";
const QUERY_KIND: &str = "TASK";
const NOT_NULL_FILTER: &str = "AND completion != null";
const SORT_CLAUSE: &str = "SORT completion ASC";
const FENCE_CLOSE: &str = "```";

fn date_literal(date: chrono::NaiveDate) -> String {
  format!("date(\"{}\")", date.format("%Y-%m-%d"))
}

/// Lines of the Dataview `TASK` query matching tasks completed inside `window`.
///
/// The first date opens a `WHERE` clause; every later date is an `OR` alternative.
pub fn render_lines(window: &DateWindow) -> Vec<String> {
  let mut lines = vec![FENCE_OPEN.to_string(), QUERY_KIND.to_string()];

  for (i, date) in window.dates().enumerate() {
    let keyword = if i == 0 { "WHERE" } else { "OR" };
    lines.push(format!("{keyword} completion = {}", date_literal(date)));
  }

  lines.push(NOT_NULL_FILTER.to_string());
  lines.push(SORT_CLAUSE.to_string());
  lines.push(FENCE_CLOSE.to_string());
  lines
}

/// The block as appended to disk: lines joined by `\n` plus a trailing newline.
pub fn render_block(window: &DateWindow) -> String {
  let mut block = render_lines(window).join("\n");
  block.push('\n');
  block
}
