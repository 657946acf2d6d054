//! Logging for the converter.
//!
//! With the `tracing` feature, `debug!` and `warn!` are the `tracing` macros
//! and the binary prints them to stderr according to `RUST_LOG`. Without it
//! both macros expand to nothing, so library code can log unconditionally:
//!
//! ```ignore
//! use crate::log::{debug, warn};
//! debug!(section = "FontInfo", "loaded");
//! ```

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
