//! The [`Comparator`] type and its combinators.
//!
//! A comparator is made of two parts:
//! - a **primary** comparison function, which [`Comparator::then`] extends and
//!   [`Comparator::reverse`] negates;
//! - an optional **terminal fallback**, set by [`Comparator::finally`], which is only
//!   consulted when the primary function returns [`Ordering::Equal`]. The fallback is
//!   never reversed and never stacked: a second `finally` replaces the first.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A reusable, composable ordering between two values of type `T`.
///
/// Comparators are immutable. Every combinator returns a new comparator and leaves
/// the receiver untouched; cloning is cheap since the underlying functions are
/// reference counted.
///
/// # Examples
///
/// ```
/// use ordkit::{Comparator, comparing};
///
/// let by_letter = comparing(|(letter, _): &(char, u32)| *letter);
/// let by_number = comparing(|(_, number): &(char, u32)| *number);
///
/// let mut entries = vec![('a', 2), ('b', 1), ('a', 1)];
/// by_letter.then(by_number).sort(&mut entries);
///
/// assert_eq!(entries, vec![('a', 1), ('a', 2), ('b', 1)]);
/// ```
pub struct Comparator<'a, T: ?Sized + 'a> {
    primary: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync + 'a>,
    fallback: Option<Arc<Comparator<'a, T>>>,
}

impl<'a, T: ?Sized + 'a> Comparator<'a, T> {
    /// Wraps a comparison function into a [`Comparator`] with no terminal fallback.
    pub fn new<F>(compare_fn: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'a,
    {
        Self {
            primary: Arc::new(compare_fn),
            fallback: None,
        }
    }

    /// Wraps a comparison function and attaches `fallback` as the terminal tie-breaker.
    pub fn with_fallback<F>(compare_fn: F, fallback: Comparator<'a, T>) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'a,
    {
        Self::new(compare_fn).finally(fallback)
    }

    /// Wraps a function returning a signed number (negative, zero or positive).
    ///
    /// Only the sign of the result is kept. Results that are neither above nor below
    /// zero (e.g. `NaN`) are treated as equal.
    ///
    /// ```
    /// use ordkit::Comparator;
    /// use std::cmp::Ordering;
    ///
    /// let by_difference = Comparator::from_sign(|a: &i64, b: &i64| a - b);
    /// assert_eq!(by_difference.compare(&3, &10), Ordering::Less);
    /// ```
    pub fn from_sign<F, N>(sign_fn: F) -> Self
    where
        F: Fn(&T, &T) -> N + Send + Sync + 'a,
        N: PartialOrd + Default,
    {
        Self::new(move |a: &T, b: &T| {
            let zero = N::default();
            let result = sign_fn(a, b);
            if result > zero {
                Ordering::Greater
            } else if result < zero {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
    }

    /// Compares `a` with `b`.
    ///
    /// The primary function decides unless it returns [`Ordering::Equal`], in which
    /// case the terminal fallback (if any) decides.
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match (self.primary)(a, b) {
            Ordering::Equal => self
                .fallback
                .as_ref()
                .map_or(Ordering::Equal, |fallback| fallback.compare(a, b)),
            decided => decided,
        }
    }

    /// Breaks ties of this comparator's primary function with `next`.
    ///
    /// `next` becomes part of the primary function, so it is reversed along with it.
    /// The terminal fallback of `self` is kept.
    pub fn then(self, next: Comparator<'a, T>) -> Self {
        let primary = self.primary;
        Self {
            primary: Arc::new(move |a: &T, b: &T| match primary(a, b) {
                Ordering::Equal => next.compare(a, b),
                decided => decided,
            }),
            fallback: self.fallback,
        }
    }

    /// Reverses the primary function. The terminal fallback keeps its direction.
    pub fn reverse(self) -> Self {
        let primary = self.primary;
        Self {
            primary: Arc::new(move |a: &T, b: &T| primary(a, b).reverse()),
            fallback: self.fallback,
        }
    }

    /// Replaces the terminal fallback with `fallback`.
    pub fn finally(self, fallback: Comparator<'a, T>) -> Self {
        Self {
            primary: self.primary,
            fallback: Some(Arc::new(fallback)),
        }
    }

    /// Returns `true` if a terminal fallback is attached.
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Borrows this comparator as a plain closure, e.g. for [`slice::sort_by`].
    ///
    /// ```
    /// use ordkit::natural_order;
    ///
    /// let cmp = natural_order::<u8>().reverse();
    /// let mut bytes = vec![1, 3, 2];
    /// bytes.sort_by(cmp.as_fn());
    /// assert_eq!(bytes, vec![3, 2, 1]);
    /// ```
    pub fn as_fn(&self) -> impl Fn(&T, &T) -> Ordering + '_ {
        move |a: &T, b: &T| self.compare(a, b)
    }

    /// Returns `true` if `a` sorts strictly before `b`.
    #[inline]
    pub fn lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_lt()
    }

    /// Returns `true` if `a` sorts strictly after `b`.
    #[inline]
    pub fn gt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_gt()
    }

    /// Returns `true` if `a` and `b` are tied.
    #[inline]
    pub fn eq(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_eq()
    }
}

impl<T> Comparator<'_, T> {
    /// Stable in-place sort of `data`.
    pub fn sort(&self, data: &mut [T]) {
        data.sort_by(self.as_fn());
    }

    /// Unstable in-place sort of `data`.
    pub fn sort_unstable(&self, data: &mut [T]) {
        data.sort_unstable_by(self.as_fn());
    }

    /// Returns `true` if `data` is sorted according to this comparator.
    pub fn is_sorted(&self, data: &[T]) -> bool {
        data.windows(2).all(|pair| !self.gt(&pair[0], &pair[1]))
    }
}

impl<T: ?Sized> Clone for Comparator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            primary: Arc::clone(&self.primary),
            fallback: self.fallback.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Comparator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("has_fallback", &self.has_fallback())
            .finish_non_exhaustive()
    }
}

/// Converts an [`Ordering`] into its signed form: `-1`, `0` or `+1`.
#[inline]
pub const fn to_sign(ordering: Ordering) -> i32 {
    ordering as i32
}
