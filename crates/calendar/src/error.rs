//! Error types for the fdate-calendar crate.

/// Error type for all fallible operations in the fdate-calendar crate.
///
/// Only [`DateValue`](crate::DateValue) construction can fail. Every
/// derivation from an existing value is total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the normalised year falls outside the supported range.
    #[error("year {year} is outside the representable calendar range")]
    OutOfRange {
        /// The normalised year that was rejected.
        year: i64,
    },

    /// Returned when an epoch timestamp cannot be represented as a local date.
    #[error("invalid timestamp: {millis} ms since the epoch")]
    InvalidTimestamp {
        /// The rejected milliseconds since 1970-01-01T00:00:00Z.
        millis: i64,
    },
}
