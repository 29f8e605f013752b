//! Run list table.

use super::status_pill;
use super::style::Style;
use crate::net::types::Run;
use crate::util::timestamp;

const ID_WIDTH: usize = 11;
const PROMPT_WIDTH: usize = 40;
const STATUS_WIDTH: usize = 13;
const CREATED_WIDTH: usize = 10;

pub fn render(runs: &[&Run], loading: bool, style: Style) -> String {
    if loading {
        return "Loading runs...\n".to_owned();
    }
    if runs.is_empty() {
        return "No runs found. Create your first run with `adgen new --prompt ...`\n".to_owned();
    }

    let mut out = format!(
        "{:<ID_WIDTH$}  {:<PROMPT_WIDTH$}  {:<STATUS_WIDTH$}  {:<CREATED_WIDTH$}  {}\n",
        "RUN ID", "PROMPT", "STATUS", "CREATED", "DURATION"
    );
    for run in runs {
        let pill = status_pill::render(&run.status, style);
        let pad = STATUS_WIDTH.saturating_sub(status_pill::width(&run.status));
        out.push_str(&format!(
            "{:<ID_WIDTH$}  {:<PROMPT_WIDTH$}  {pill}{:pad$}  {:<CREATED_WIDTH$}  {}\n",
            short_id(&run.run_id),
            truncate(&run.prompt, PROMPT_WIDTH),
            "",
            timestamp::format_date(&run.created_at),
            timestamp::format_duration(run.duration),
        ));
    }
    out
}

/// First eight characters followed by `...`.
pub fn short_id(run_id: &str) -> String {
    let head: String = run_id.chars().take(8).collect();
    format!("{head}...")
}

/// Cut to `max` characters, ending in `...` when shortened. Newlines are
/// flattened so each run stays on one row.
pub fn truncate(text: &str, max: usize) -> String {
    let flat: String = text.chars().map(|c| if c.is_control() { ' ' } else { c }).collect();
    if flat.chars().count() <= max {
        return flat;
    }
    let head: String = flat.chars().take(max.saturating_sub(3)).collect();
    format!("{head}...")
}

#[cfg(test)]
#[path = "run_table_test.rs"]
mod tests;
