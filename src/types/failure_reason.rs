//! Structured identification of a single rule violation.
//!
//! A [`FailureReason`] records *which* property failed and *why*, and nothing
//! else. It is created once when a policy rejects a value and never mutated
//! afterwards. Absence of a failure is expressed as `Option<FailureReason>`
//! rather than a sentinel value, so "is this a failure" is answered by the
//! type system instead of an identity comparison.
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable record of a single validation failure.
///
/// # Examples
///
/// ```
/// use valid_rail::FailureReason;
///
/// let reason = FailureReason::new("amount", "Is less or equal zero");
/// assert_eq!(reason.property(), "amount");
/// assert_eq!(reason.reason(), "Is less or equal zero");
/// assert_eq!(reason.to_string(), "amount: Is less or equal zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FailureReason {
    property: String,
    reason: String,
}

impl FailureReason {
    /// Creates a failure reason for the given property.
    ///
    /// Both fields identify the violation to a human reader and must always
    /// be present; supplying an empty string is a defect at the rule-writing
    /// call site, not a validation result.
    ///
    /// # Panics
    ///
    /// Panics if `property` or `reason` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::FailureReason;
    ///
    /// let reason = FailureReason::new("email", "Is empty");
    /// assert_eq!(reason.property(), "email");
    /// ```
    #[must_use]
    pub fn new<P: Into<String>, R: Into<String>>(property: P, reason: R) -> Self {
        let property = property.into();
        let reason = reason.into();
        assert!(!property.is_empty(), "property name must not be empty");
        assert!(!reason.is_empty(), "failure reason must not be empty");
        Self { property, reason }
    }

    /// Returns the name of the property that failed validation.
    #[must_use]
    #[inline]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Returns the human-readable description of the violation.
    #[must_use]
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.reason)
    }
}

impl std::error::Error for FailureReason {}
