//! Result type alias for oxcp operations

use crate::Error;

/// Result type alias for oxcp operations
pub type Result<T> = std::result::Result<T, Error>;
