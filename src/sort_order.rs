//! Multi-column sort orders.
//!
//! A [`SortOrder`] is a list of `(column, direction)` pairs, most significant first.
//! It can be rendered to (and parsed from) the `ordering` query parameter, whose value
//! looks like `name-ASC;created-DESC`, and turned into a chained [`Comparator`].

use crate::comparator::Comparator;
use crate::direction::SortDirection;
use crate::error::{Result, SortOrderError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Name of the query parameter carrying a rendered [`SortOrder`].
pub const ORDERING_PARAM: &str = "ordering";

const SEGMENT_SEPARATOR: &str = ";";
const DIRECTION_SEPARATOR: char = '-';

/// Columns to sort on, most significant first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortOrder<C> {
    columns: Vec<(C, SortDirection)>,
}

impl<C> Default for SortOrder<C> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
        }
    }
}

impl<C> SortOrder<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a less significant column.
    pub fn then_by(mut self, column: C, direction: SortDirection) -> Self {
        self.columns.push((column, direction));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(C, SortDirection)> {
        self.columns.iter()
    }

    /// Renders the value of the [`ORDERING_PARAM`] parameter, or `None` when there
    /// are no columns.
    pub fn to_param_value<F>(&self, serialize_column: F) -> Option<String>
    where
        F: Fn(&C) -> String,
    {
        if self.columns.is_empty() {
            return None;
        }

        let value = self
            .columns
            .iter()
            .map(|(column, direction)| {
                format!(
                    "{}{}{}",
                    serialize_column(column),
                    DIRECTION_SEPARATOR,
                    direction.as_param()
                )
            })
            .collect::<Vec<_>>()
            .join(SEGMENT_SEPARATOR);

        log::trace!("Rendered sort order `{}`", value);
        Some(value)
    }

    /// Query parameters for a GET request sorted by this order.
    ///
    /// Empty when there are no columns; otherwise a single [`ORDERING_PARAM`] pair.
    ///
    /// ```
    /// use ordkit::{SortDirection, SortOrder};
    ///
    /// let order = SortOrder::new()
    ///     .then_by("name", SortDirection::Ascending)
    ///     .then_by("age", SortDirection::Descending);
    ///
    /// assert_eq!(
    ///     order.query_params(|c| c.to_string()),
    ///     vec![("ordering".to_string(), "name-ASC;age-DESC".to_string())]
    /// );
    /// ```
    pub fn query_params<F>(&self, serialize_column: F) -> Vec<(String, String)>
    where
        F: Fn(&C) -> String,
    {
        self.to_param_value(serialize_column)
            .map(|value| vec![(ORDERING_PARAM.to_string(), value)])
            .unwrap_or_default()
    }

    /// Parses the value of the [`ORDERING_PARAM`] parameter.
    ///
    /// The column is everything before the last `-` of a segment, so columns may
    /// themselves contain dashes. An empty value is an empty order.
    pub fn parse<F, E>(value: &str, parse_column: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<C, E>,
        E: fmt::Display,
    {
        if value.is_empty() {
            return Ok(Self::default());
        }

        let columns = value
            .split(SEGMENT_SEPARATOR)
            .map(|segment| -> Result<(C, SortDirection)> {
                let (column, direction) =
                    segment.rsplit_once(DIRECTION_SEPARATOR).ok_or_else(|| {
                        log::debug!("Rejecting sort segment without a direction: `{}`", segment);
                        SortOrderError::MissingDirection {
                            segment: segment.to_string(),
                        }
                    })?;
                let direction = direction.parse::<SortDirection>()?;
                let column = parse_column(column).map_err(|error| {
                    log::debug!("Rejecting sort column `{}`: {}", column, error);
                    SortOrderError::invalid_column(column, error.to_string())
                })?;
                Ok((column, direction))
            })
            .collect::<Result<Vec<_>>>()?;

        log::trace!("Parsed sort order `{}` into {} column(s)", value, columns.len());
        Ok(Self { columns })
    }

    /// Builds a comparator sorting on every column in turn.
    ///
    /// `column_comparator` gives the ascending comparator of a column; descending
    /// columns get it reversed. An empty order ties everything.
    pub fn comparator<'a, T, F>(&self, column_comparator: F) -> Comparator<'a, T>
    where
        T: ?Sized + 'a,
        F: Fn(&C) -> Comparator<'a, T>,
    {
        self.columns
            .iter()
            .map(|(column, direction)| column_comparator(column).directed(*direction))
            .reduce(Comparator::then)
            .unwrap_or_else(|| Comparator::new(|_: &T, _: &T| Ordering::Equal))
    }
}

impl<C> FromIterator<(C, SortDirection)> for SortOrder<C> {
    fn from_iter<I: IntoIterator<Item = (C, SortDirection)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

impl<C> IntoIterator for SortOrder<C> {
    type Item = (C, SortDirection);
    type IntoIter = std::vec::IntoIter<(C, SortDirection)>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}
