//! View state for each screen.
//!
//! DESIGN
//! ======
//! These are plain data models with no I/O, so every rule about what a
//! view shows (filtering, finalize guard, cancel availability, status
//! colors) is testable without a backend. `pages` owns the I/O around them.

pub mod assets;
pub mod run_detail;
pub mod run_form;
pub mod run_list;
pub mod status;
pub mod toast;
