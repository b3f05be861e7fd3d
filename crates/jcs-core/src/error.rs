//! Error types for canonical JSON encoding.

use thiserror::Error;

/// Errors that can occur while canonicalizing a value.
///
/// Every failure is a deterministic function of the input value (or of the
/// sink), so retrying never helps. When an error is returned, bytes may
/// already have been written to the sink; callers must discard them.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// An integer whose magnitude exceeds 2^53 - 1 cannot be represented
    /// exactly as an IEEE 754 double, which is what JSON numbers are.
    #[error("{0} exceeds the safe integer range for JSON numbers")]
    IntegerDomain(i64),

    /// NaN and the infinities have no canonical JSON representation.
    #[error("{0} is not representable in canonical JSON")]
    FloatDomain(f64),

    /// A value at the conversion boundary has no representation in the
    /// canonical value model (e.g. a `u64` beyond `i64::MAX`).
    #[error("unsupported value: {0}")]
    Unsupported(String),

    /// The output sink failed to accept bytes.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout jcs-core.
pub type Result<T> = std::result::Result<T, CanonicalizationError>;
