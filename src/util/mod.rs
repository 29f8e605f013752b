//! Shared helpers: periodic polling and timestamp formatting.

pub mod poll;
pub mod timestamp;
