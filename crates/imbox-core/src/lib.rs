#![forbid(unsafe_code)]

//! Core: pixel geometry, the spacing grid, and the logging facade shared by
//! the imbox layout crates.

pub mod geometry;
pub mod grid;
pub mod logging;

pub use geometry::{Rect, Sides};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
