//! Comparator constructors and aggregate operations.
//!
//! This module provides:
//! - [`Comparable`]: wraps a value so it can be forced to the front or back of a sort.
//! - [`natural_order`], [`comparing`], [`comparing_with_priority`], [`nulls_first`],
//!   [`nulls_last`], [`in_order`] and [`compare_by`]: ways to build a [`Comparator`].
//! - [`minimum_by`] and [`maximum_by`]: reductions driven by a [`Comparator`].

use crate::comparator::Comparator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A value in the comparable domain, or one of two sentinels.
///
/// [`Comparable::AlwaysLess`] sorts before every value and [`Comparable::AlwaysGreater`]
/// sorts after every value. Sentinels are checked before the wrapped values are looked
/// at, so they win against anything, including values that do not compare (`NaN`).
/// Two identical sentinels are equal.
///
/// ```
/// use ordkit::{Comparable, comparing};
///
/// let cmp = comparing(|name: &&str| match *name {
///     "pinned" => Comparable::AlwaysLess,
///     "archived" => Comparable::AlwaysGreater,
///     other => Comparable::Value(other.len()),
/// });
///
/// let mut names = vec!["archived", "bb", "pinned", "a"];
/// cmp.sort(&mut names);
/// assert_eq!(names, vec!["pinned", "a", "bb", "archived"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparable<V> {
    /// Sorts first, regardless of direction of the value ordering.
    AlwaysLess,
    /// A plain value, ordered naturally.
    Value(V),
    /// Sorts last, regardless of direction of the value ordering.
    AlwaysGreater,
}

impl<V: PartialOrd> PartialOrd for Comparable<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Comparable::*;
        match (self, other) {
            (AlwaysLess, AlwaysLess) | (AlwaysGreater, AlwaysGreater) => Some(Ordering::Equal),
            (AlwaysLess, _) | (_, AlwaysGreater) => Some(Ordering::Less),
            (AlwaysGreater, _) | (_, AlwaysLess) => Some(Ordering::Greater),
            (Value(a), Value(b)) => a.partial_cmp(b),
        }
    }
}

impl<V: Ord> Ord for Comparable<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        use Comparable::*;
        match (self, other) {
            (Value(a), Value(b)) => a.cmp(b),
            _ => natural(self, other),
        }
    }
}

impl<V> Comparable<V> {
    /// Returns `true` for [`Comparable::AlwaysLess`] and [`Comparable::AlwaysGreater`].
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Comparable::Value(_))
    }

    /// Returns the wrapped value, if any.
    pub fn value(&self) -> Option<&V> {
        match self {
            Comparable::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// Which end of a sort the prioritized values go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Prioritized values sort before the rest.
    First,
    /// Prioritized values sort after the rest.
    #[default]
    Last,
}

impl Priority {
    /// The sentinel that pushes a value to this end.
    fn sentinel(self) -> Comparable<()> {
        match self {
            Priority::First => Comparable::AlwaysLess,
            Priority::Last => Comparable::AlwaysGreater,
        }
    }

    /// The sentinel that pushes a value to the opposite end.
    fn opposite(self) -> Comparable<()> {
        match self {
            Priority::First => Comparable::AlwaysGreater,
            Priority::Last => Comparable::AlwaysLess,
        }
    }
}

/// Natural ordering of two values; `Equal` when neither is greater than the other.
#[inline]
fn natural<V: PartialOrd + ?Sized>(a: &V, b: &V) -> Ordering {
    if a > b {
        Ordering::Greater
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Compares values in their natural order, e.g. `[1, 2, 3, 4, 5]`.
///
/// Works for any [`PartialOrd`] type. Wrap values in [`Comparable`] to use the
/// sentinels. Values that do not compare (`NaN`) are treated as equal to each other
/// and to everything else, which makes such inputs unsuitable for sorting.
pub fn natural_order<'a, V: PartialOrd + ?Sized + 'a>() -> Comparator<'a, V> {
    Comparator::new(|a: &V, b: &V| natural(a, b))
}

/// Compares on the values returned by `getter`, in natural order.
///
/// ```
/// use ordkit::comparing;
///
/// let mut words = vec!["ccc", "a", "bb"];
/// comparing(|w: &&str| w.len()).sort(&mut words);
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// ```
pub fn comparing<'a, A, B, G>(getter: G) -> Comparator<'a, A>
where
    A: ?Sized + 'a,
    B: PartialOrd,
    G: Fn(&A) -> B + Send + Sync + 'a,
{
    Comparator::new(move |a1: &A, a2: &A| natural(&getter(a1), &getter(a2)))
}

/// Compares on the values returned by `getter`, but values matching `predicate` are
/// pushed to the `priority` end as a final tie-break.
///
/// The push only applies to values that `getter` ties, since it is attached with
/// [`Comparator::finally`]. For the same reason, reversing the returned comparator
/// reverses the `getter` ordering but not the priority.
///
/// ```
/// use ordkit::{comparing_with_priority, Priority};
///
/// let cmp = comparing_with_priority(|(rank, _): &(u8, bool)| *rank, |(_, pinned)| *pinned, Priority::First);
/// let mut rows = vec![(1, false), (0, false), (1, true)];
/// cmp.sort(&mut rows);
/// assert_eq!(rows, vec![(0, false), (1, true), (1, false)]);
/// ```
pub fn comparing_with_priority<'a, A, B, G, P>(
    getter: G,
    predicate: P,
    priority: Priority,
) -> Comparator<'a, A>
where
    A: ?Sized + 'a,
    B: PartialOrd,
    G: Fn(&A) -> B + Send + Sync + 'a,
    P: Fn(&A) -> bool + Send + Sync + 'a,
{
    comparing(getter).finally(comparing(move |a: &A| {
        if predicate(a) {
            priority.sentinel()
        } else {
            priority.opposite()
        }
    }))
}

/// Compares on the values returned by `getter`, in natural order, with `None`
/// sorting before every other value.
pub fn nulls_first<'a, A, B, G>(getter: G) -> Comparator<'a, A>
where
    A: ?Sized + 'a,
    B: PartialOrd,
    G: Fn(&A) -> Option<B> + Send + Sync + 'a,
{
    Comparator::new(move |a1: &A, a2: &A| match (getter(a1), getter(a2)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(b1), Some(b2)) => natural(&b1, &b2),
    })
}

/// Compares on the values returned by `getter`, in natural order, with `None`
/// sorting after every other value.
pub fn nulls_last<'a, A, B, G>(getter: G) -> Comparator<'a, A>
where
    A: ?Sized + 'a,
    B: PartialOrd,
    G: Fn(&A) -> Option<B> + Send + Sync + 'a,
{
    Comparator::new(move |a1: &A, a2: &A| match (getter(a1), getter(a2)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(b1), Some(b2)) => natural(&b1, &b2),
    })
}

/// Orders items by the position of their first occurrence in `ordering`.
///
/// Items missing from `ordering` get position `-1`, so they sort *before* every
/// listed item and tie with each other.
///
/// ```
/// use ordkit::in_order;
///
/// let cmp = in_order(vec!["b", "a", "c"]);
/// let mut letters = vec!["a", "z", "b", "c"];
/// cmp.sort(&mut letters);
/// assert_eq!(letters, vec!["z", "b", "a", "c"]);
/// ```
pub fn in_order<'a, T, I>(ordering: I) -> Comparator<'a, T>
where
    T: PartialEq + Send + Sync + 'a,
    I: IntoIterator<Item = T>,
{
    let ordering: Vec<T> = ordering.into_iter().collect();
    comparing(move |item: &T| position(&ordering, item))
}

fn position<T: PartialEq>(ordering: &[T], item: &T) -> isize {
    ordering
        .iter()
        .position(|candidate| candidate == item)
        .map_or(-1, |index| index as isize)
}

/// Compares on the values returned by `getter`, using `comparator`.
///
/// ```
/// use ordkit::{compare_by, natural_order};
///
/// let by_len_desc = compare_by(|s: &String| s.len(), natural_order().reverse());
/// let mut words = vec!["a".to_string(), "ccc".to_string(), "bb".to_string()];
/// by_len_desc.sort(&mut words);
/// assert_eq!(words, vec!["ccc", "bb", "a"]);
/// ```
pub fn compare_by<'a, T, V, G>(getter: G, comparator: Comparator<'a, V>) -> Comparator<'a, T>
where
    T: ?Sized + 'a,
    V: 'a,
    G: Fn(&T) -> V + Send + Sync + 'a,
{
    Comparator::new(move |t1: &T, t2: &T| comparator.compare(&getter(t1), &getter(t2)))
}

/// Returns the smallest value according to `comparator`, or `None` if `values` is empty.
///
/// Ties keep the earliest value: a later value only wins if it is strictly less.
pub fn minimum_by<'v, A>(values: &'v [A], comparator: &Comparator<'_, A>) -> Option<&'v A> {
    values
        .iter()
        .reduce(|acc, next| if comparator.lt(next, acc) { next } else { acc })
}

/// Returns the largest value according to `comparator`, or `None` if `values` is empty.
///
/// Ties keep the earliest value: a later value only wins if it is strictly greater.
pub fn maximum_by<'v, A>(values: &'v [A], comparator: &Comparator<'_, A>) -> Option<&'v A> {
    values
        .iter()
        .reduce(|acc, next| if comparator.gt(next, acc) { next } else { acc })
}
