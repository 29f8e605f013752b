//! Network layer: wire types, the REST client and file downloads.

pub mod api;
pub mod download;
pub mod types;
