//! Error type shared by all value-type constructors and operations.

use thiserror::Error;

/// Failures raised while building or transforming addresses, masks and
/// networks.
///
/// Every operation in this crate is either total or fails immediately
/// with one of these two kinds; nothing is retried or absorbed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetError {
    /// A numeric value fell outside its type's valid domain, e.g. a
    /// prefix length over 32 or a block pushed past the end of the
    /// address space.
    #[error("value out of range: {0}")]
    Range(String),
    /// A textual representation could not be parsed.
    #[error("invalid format: {0}")]
    Format(String),
}
