//! Shared pieces used by every crate in the workspace: runtime configuration
//! and the logging macros the terminal formatter knows how to render.

pub mod config;
pub mod log;
