//! Shared utilities: arrow column access and logging helpers.

pub mod arrow;
pub mod logging;
