//! Ordered accumulation of validation failures.
//!
//! [`FailureReasons`] is the report half of a failed validation run: an
//! append-only sequence that preserves the order in which policies were
//! declared, so callers can surface every problem at once instead of the
//! first one found.
use crate::types::{FailureReason, ReasonVec};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered, append-only accumulator of [`FailureReason`] values.
///
/// Backed by a `SmallVec` so the common case of one or two failures stays off
/// the heap. Insertion order is preserved and entries are never removed.
///
/// Implements [`std::error::Error`], so a failed validation can travel through
/// `?` once converted via [`Outcome::to_result`](crate::Outcome::to_result).
///
/// # Examples
///
/// ```
/// use valid_rail::{FailureReason, FailureReasons};
///
/// let mut reasons = FailureReasons::new();
/// reasons.push(FailureReason::new("name", "Is null"));
/// reasons.push(FailureReason::new("amount", "Is less or equal zero"));
///
/// assert_eq!(reasons.len(), 2);
/// assert_eq!(reasons.iter().next().unwrap().property(), "name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FailureReasons {
    reasons: ReasonVec,
}

impl FailureReasons {
    /// Creates a new empty accumulator.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::FailureReasons;
    ///
    /// let reasons = FailureReasons::new();
    /// assert!(reasons.is_empty());
    /// ```
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            reasons: ReasonVec::new(),
        }
    }

    /// Appends a single failure reason, preserving insertion order.
    #[inline]
    pub fn push(&mut self, reason: FailureReason) {
        self.reasons.push(reason);
    }

    /// Appends every reason produced by the iterator, in order.
    #[inline]
    pub fn extend<I: IntoIterator<Item = FailureReason>>(&mut self, iter: I) {
        self.reasons.extend(iter);
    }

    /// Returns `true` if no failure has been recorded.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    /// Returns the number of recorded failures.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    /// Returns an iterator over the recorded failures, oldest first.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, FailureReason> {
        self.reasons.iter()
    }

    /// Returns the recorded failures as an ordered slice.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[FailureReason] {
        &self.reasons
    }

    /// Consumes the accumulator and returns the underlying [`ReasonVec`].
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> ReasonVec {
        self.reasons
    }
}

impl fmt::Display for FailureReasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for reason in &self.reasons {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", reason)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FailureReasons {}

impl From<ReasonVec> for FailureReasons {
    fn from(reasons: ReasonVec) -> Self {
        Self { reasons }
    }
}

impl FromIterator<FailureReason> for FailureReasons {
    fn from_iter<I: IntoIterator<Item = FailureReason>>(iter: I) -> Self {
        Self {
            reasons: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FailureReasons {
    type Item = FailureReason;
    type IntoIter = smallvec::IntoIter<[FailureReason; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.reasons.into_iter()
    }
}

impl<'a> IntoIterator for &'a FailureReasons {
    type Item = &'a FailureReason;
    type IntoIter = core::slice::Iter<'a, FailureReason>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
