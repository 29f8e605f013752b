//! # adgen-studio
//!
//! Client for the AdGen advertisement generation backend.
//!
//! The backend owns runs and their execution; this crate submits new runs,
//! lists and inspects existing ones, and renders their status and generated
//! assets. Views are split the same way a browser front-end would split
//! them: `state` holds plain view models, `pages` wires them to the network
//! and to periodic refresh, and `components` renders them as terminal text.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
