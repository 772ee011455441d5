//! Sort direction and its textual forms.

use crate::comparator::Comparator;
use crate::error::{Result, SortOrderError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a sort on a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Every [`SortDirection`], in declaration order.
pub const SORT_DIRECTIONS: [SortDirection; 2] =
    [SortDirection::Ascending, SortDirection::Descending];

impl SortDirection {
    /// The short form used in query parameters: `ASC` or `DESC`.
    pub const fn as_param(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }

    /// The other direction.
    pub const fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for SortDirection {
    type Err = SortOrderError;

    /// Accepts `ASC`/`DESC` in any case, or the variant names.
    fn from_str(value: &str) -> Result<Self> {
        if value.eq_ignore_ascii_case("ASC") || value == "Ascending" {
            Ok(SortDirection::Ascending)
        } else if value.eq_ignore_ascii_case("DESC") || value == "Descending" {
            Ok(SortDirection::Descending)
        } else {
            Err(SortOrderError::UnknownDirection {
                value: value.to_string(),
            })
        }
    }
}

impl<'a, T: ?Sized + 'a> Comparator<'a, T> {
    /// Applies `direction`: unchanged when ascending, [`Comparator::reverse`] when
    /// descending.
    pub fn directed(self, direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => self,
            SortDirection::Descending => self.reverse(),
        }
    }
}
