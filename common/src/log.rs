//! Logging macros.
//!
//! Thin wrappers over `tracing` that tag each event with a target the
//! terminal formatter maps to a status symbol. Library code logs through these
//! so the binary decides how (and whether) anything gets shown.

pub use tracing;

/// Target used for events that report a completed, positive outcome.
pub const SUCCESS_TARGET: &str = "testbed::success";

/// Target used for raw lines that should be printed without a prefix.
pub const PRINT_TARGET: &str = "testbed::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!(target: "testbed::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}
