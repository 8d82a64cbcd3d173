//! Error types for header-bits decoding

use thiserror::Error;

/// Result type for strict disposition decoding
pub type Result<T> = std::result::Result<T, UnknownDisposition>;

/// A raw field value that is not one of the `MACH_MSG_TYPE_*` port
/// dispositions (and not zero).
///
/// Only the strict decode paths produce this; composing bits never
/// fails.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown port disposition: {0}")]
pub struct UnknownDisposition(pub u32);
