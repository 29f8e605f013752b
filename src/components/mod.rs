//! Text renderers for the terminal front-end.

pub mod asset_grid;
pub mod run_table;
pub mod status_pill;
pub mod style;
pub mod toast;
