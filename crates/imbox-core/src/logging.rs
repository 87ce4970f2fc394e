#![forbid(unsafe_code)]

//! Logging support for the layout hot path.
//!
//! With the `tracing` feature enabled, `trace!`, `debug!` and `warn!` are
//! the `tracing` macros re-exported from the crate root, so layout code can
//! write `imbox_core::debug!(...)` unconditionally. Without the feature they
//! expand to nothing and a frame of layout pays no logging cost.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}
