//! Crate-local prelude: conveniently import macros which are generally
//! useful and should be available everywhere.

/// Logging macros
pub use tracing::{debug, error, info, trace, warn};

/// Error macros
pub use anomaly::{fail, format_err};
