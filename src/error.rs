//! Errors raised while parsing sort directions and sort orders.
//!
//! Building and evaluating comparators never fails; only the textual forms in
//! [`crate::direction`] and [`crate::sort_order`] can be rejected.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SortOrderError>;

/// Reasons a sort direction or sort order string is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortOrderError {
    /// A `column-DIRECTION` segment has no `-` separator.
    #[error("Sort segment `{segment}` is missing a direction")]
    MissingDirection { segment: String },

    /// The direction is neither `ASC` nor `DESC`.
    #[error("Unknown sort direction `{value}`")]
    UnknownDirection { value: String },

    /// The column could not be parsed by the caller.
    #[error("Invalid sort column `{column}`: {reason}")]
    InvalidColumn { column: String, reason: String },
}

impl SortOrderError {
    pub fn invalid_column(column: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColumn {
            column: column.into(),
            reason: reason.into(),
        }
    }
}
