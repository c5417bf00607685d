//! Common error infrastructure for wordsearch-core.
//!
//! Interactive paths (geometry, matching, selection, pointer input) never fail:
//! they return empty or sentinel results so a malformed event costs at most a
//! dropped frame. Errors only surface where data enters the crate, for example
//! when a [`PuzzleConfig`](crate::PuzzleConfig) is validated.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the data is usable but degraded; callers may log and continue
/// - **Validation**: invalid input that should be rejected without retry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Usable but degraded input.
    ///
    /// Examples: a target word that cannot be traced anywhere in the grid
    Recoverable,

    /// Invalid input data, should not be accepted.
    ///
    /// Examples: ragged grid rows, empty word list
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all wordsearch-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
