//! # Ordkit
//!
//! `ordkit` builds reusable, composable orderings. A [`Comparator`] wraps a comparison
//! function and can be chained, reversed and given a terminal tie-breaker, then handed to
//! any sort routine that takes a `Fn(&T, &T) -> Ordering`.
//!
//! ## Key Features
//!
//! - **Composition**: [`Comparator::then`] breaks ties with a second comparator,
//!   [`Comparator::reverse`] flips the order and [`Comparator::finally`] attaches a
//!   terminal fallback that survives reversal.
//! - **Sentinels**: [`Comparable::AlwaysLess`] and [`Comparable::AlwaysGreater`] pin
//!   values to the front or back of a sort, whatever the values around them.
//! - **Missing values**: [`nulls_first`] and [`nulls_last`] order `None` explicitly.
//! - **Reductions**: [`minimum_by`] and [`maximum_by`] pick the earliest extremum.
//! - **Sort orders**: [`SortOrder`] describes multi-column sorts, renders them to query
//!   parameters and turns them back into comparators.
//!
//! ## Usage
//!
//! ```rust
//! use ordkit::prelude::*;
//!
//! struct User {
//!     name: &'static str,
//!     age: Option<u32>,
//! }
//!
//! let mut users = vec![
//!     User { name: "carol", age: None },
//!     User { name: "bob", age: Some(31) },
//!     User { name: "alice", age: Some(31) },
//!     User { name: "dave", age: Some(25) },
//! ];
//!
//! // Oldest first, unknown ages last, then by name.
//! let cmp = nulls_first(|u: &User| u.age)
//!     .reverse()
//!     .then(comparing(|u: &User| u.name));
//! cmp.sort(&mut users);
//!
//! let names: Vec<_> = users.iter().map(|u| u.name).collect();
//! assert_eq!(names, vec!["alice", "bob", "dave", "carol"]);
//!
//! let youngest = minimum_by(&users, &nulls_last(|u: &User| u.age));
//! assert_eq!(youngest.map(|u| u.name), Some("dave"));
//! ```
//!
//! ## Sorting Plain Slices
//!
//! [`Comparator::as_fn`] borrows a comparator as a closure for the standard library sorts:
//!
//! ```rust
//! use ordkit::natural_order;
//!
//! let cmp = natural_order::<i32>().reverse();
//! let mut data = vec![3, 1, 2];
//! data.sort_unstable_by(cmp.as_fn());
//! assert_eq!(data, vec![3, 2, 1]);
//! ```

pub mod comparator;
pub mod comparators;
pub mod direction;
pub mod error;
pub mod sort_order;

pub use comparator::{Comparator, to_sign};
pub use comparators::{
    Comparable, Priority, compare_by, comparing, comparing_with_priority, in_order,
    maximum_by, minimum_by, natural_order, nulls_first, nulls_last,
};
pub use direction::{SORT_DIRECTIONS, SortDirection};
pub use error::{Result, SortOrderError};
pub use sort_order::{ORDERING_PARAM, SortOrder};

pub mod prelude {
    pub use crate::comparator::Comparator;
    pub use crate::comparators::{
        Comparable, Priority, compare_by, comparing, comparing_with_priority, in_order,
        maximum_by, minimum_by, natural_order, nulls_first, nulls_last,
    };
    pub use crate::direction::SortDirection;
    pub use crate::sort_order::SortOrder;
}
