//! Validation policies: the evaluated outcome of one predicate.
//!
//! A [`Policy`] is not a predicate waiting to run — it is the *result* of
//! evaluating one predicate against one named property: either valid, or
//! invalid carrying exactly one [`FailureReason`]. Policies are produced
//! fresh by each constructor call and never mutated, so a finalized rule set
//! can be scanned any number of times with identical results.
//!
//! # Built-in constructors
//!
//! - [`Policy::non_null`] - the value must be present
//! - [`Policy::greater_than_zero`] - exact decimal comparison against zero
//! - [`Policy::non_empty`] - the string must be present and non-empty
//! - [`Policy::matches`] - the whole string must match a pattern
//! - [`Policy::satisfies`] - generic custom-predicate escape hatch
//!
//! # Examples
//!
//! ```
//! use valid_rail::Policy;
//!
//! let missing: Option<&str> = None;
//! let policy = Policy::non_null(missing.as_ref(), "name");
//!
//! assert!(!policy.is_valid());
//! assert_eq!(policy.failure_reason().unwrap().reason(), "Is null");
//! ```
use crate::types::FailureReason;
use regex::Regex;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reason message for a value that was required but absent.
pub const IS_NULL: &str = "Is null";
/// Reason message for a number that must be strictly positive but is not.
pub const IS_LESS_OR_EQUAL_ZERO: &str = "Is less or equal zero";
/// Reason message for a string that was absent or zero-length.
pub const IS_EMPTY: &str = "Is empty";
/// Reason message for a string that does not fully match its pattern.
pub const DOES_NOT_MATCH: &str = "Not matches validation policy";

/// A compiled pattern that must cover the whole value.
///
/// Wraps [`regex::Regex`] with the pattern anchored at compile time
/// (`^(?:pattern)$`), so [`Policy::matches`] is a full-string test no matter
/// how the pattern is written. A leftmost search would stop `a|ab` at the
/// shorter branch and reject `"ab"`; the anchored form accepts it.
///
/// Compiled once, reusable across any number of policy evaluations.
///
/// # Examples
///
/// ```
/// use valid_rail::PolicyPattern;
///
/// let pattern = PolicyPattern::new("a|ab").unwrap();
/// assert!(pattern.is_full_match("ab"));
/// assert!(!pattern.is_full_match("abc"));
/// ```
#[derive(Debug, Clone)]
pub struct PolicyPattern {
    regex: Regex,
}

impl PolicyPattern {
    /// Compiles `pattern`, anchored to span the whole input.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] when `pattern` is not a valid regex — a
    /// defect at the rule-writing call site, not a validation result.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::PolicyPattern;
    ///
    /// let pattern = PolicyPattern::new(r"[0-9]{4}").unwrap();
    /// assert!(pattern.is_full_match("1234"));
    ///
    /// assert!(PolicyPattern::new("(").is_err());
    /// ```
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self { regex })
    }

    /// Returns `true` if the pattern matches the whole of `text`.
    #[must_use]
    #[inline]
    pub fn is_full_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Returns the underlying anchored regex.
    #[must_use]
    #[inline]
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

/// The evaluated outcome of one predicate against one named property.
///
/// Invariant: `is_valid() == failure_reason().is_none()` — a policy is valid
/// exactly when it carries no failure reason.
///
/// # Examples
///
/// ```
/// use valid_rail::Policy;
///
/// let ok = Policy::non_empty(Some("user@example.com"), "email");
/// assert!(ok.is_valid());
///
/// let bad = Policy::non_empty(Some(""), "email");
/// assert_eq!(bad.failure_reason().unwrap().reason(), "Is empty");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Policy {
    failure_reason: Option<FailureReason>,
}

impl Policy {
    /// Creates a policy that passed its predicate.
    #[inline]
    pub fn valid() -> Self {
        Self {
            failure_reason: None,
        }
    }

    /// Creates a policy that failed with the given reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{FailureReason, Policy};
    ///
    /// let policy = Policy::invalid(FailureReason::new("age", "Is negative"));
    /// assert!(!policy.is_valid());
    /// ```
    #[inline]
    pub fn invalid(failure_reason: FailureReason) -> Self {
        Self {
            failure_reason: Some(failure_reason),
        }
    }

    /// Returns `true` if the predicate passed.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.failure_reason.is_none()
    }

    /// Returns the failure reason, if the predicate rejected the value.
    #[must_use]
    #[inline]
    pub fn failure_reason(&self) -> Option<&FailureReason> {
        self.failure_reason.as_ref()
    }

    /// Consumes the policy and returns its failure reason, if any.
    #[must_use]
    #[inline]
    pub fn into_failure_reason(self) -> Option<FailureReason> {
        self.failure_reason
    }

    /// Requires the value to be present.
    ///
    /// Absent *data* is a normal invalid outcome, never an error: the policy
    /// fails with [`IS_NULL`].
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::Policy;
    ///
    /// assert!(Policy::non_null(Some(&42), "answer").is_valid());
    /// assert!(!Policy::non_null(None::<&i32>, "answer").is_valid());
    /// ```
    pub fn non_null<T>(value: Option<&T>, property_name: &str) -> Self {
        match value {
            Some(_) => Self::valid(),
            None => Self::invalid(FailureReason::new(property_name, IS_NULL)),
        }
    }

    /// Requires a decimal value to be present and strictly greater than zero.
    ///
    /// Takes [`rust_decimal::Decimal`], not a binary float: comparisons near
    /// zero are exact, with no rounding tolerance.
    ///
    /// Fails with [`IS_NULL`] when absent and [`IS_LESS_OR_EQUAL_ZERO`] when
    /// `value <= 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use valid_rail::Policy;
    ///
    /// assert!(Policy::greater_than_zero(Some(Decimal::from(5)), "amount").is_valid());
    /// assert!(!Policy::greater_than_zero(Some(Decimal::ZERO), "amount").is_valid());
    /// assert!(!Policy::greater_than_zero(None, "amount").is_valid());
    /// ```
    pub fn greater_than_zero(value: Option<Decimal>, property_name: &str) -> Self {
        match value {
            None => Self::invalid(FailureReason::new(property_name, IS_NULL)),
            Some(number) if number <= Decimal::ZERO => {
                Self::invalid(FailureReason::new(property_name, IS_LESS_OR_EQUAL_ZERO))
            }
            Some(_) => Self::valid(),
        }
    }

    /// Requires a string to be present and non-empty.
    ///
    /// Fails with [`IS_EMPTY`] when absent or zero-length.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::Policy;
    ///
    /// assert!(Policy::non_empty(Some("hello"), "greeting").is_valid());
    /// assert!(!Policy::non_empty(Some(""), "greeting").is_valid());
    /// assert!(!Policy::non_empty(None, "greeting").is_valid());
    /// ```
    pub fn non_empty(value: Option<&str>, property_name: &str) -> Self {
        match value {
            Some(text) if !text.is_empty() => Self::valid(),
            _ => Self::invalid(FailureReason::new(property_name, IS_EMPTY)),
        }
    }

    /// Requires the whole string to match the pattern.
    ///
    /// This is a full-string test, not a substring search: the
    /// [`PolicyPattern`] is compiled anchored, so a pattern that merely
    /// occurs somewhere inside the value rejects it, and every alternation
    /// branch is tried against the full input.
    ///
    /// Fails with [`IS_NULL`] when the value is absent and
    /// [`DOES_NOT_MATCH`] when the match is partial or missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{Policy, PolicyPattern};
    ///
    /// let pattern = PolicyPattern::new(r"[a-z]+@[a-z]+\.[a-z]{2,}").unwrap();
    ///
    /// assert!(Policy::matches(&pattern, Some("user@example.com"), "email").is_valid());
    /// // A substring match is not enough.
    /// assert!(!Policy::matches(&pattern, Some("user@example.com junk"), "email").is_valid());
    /// ```
    pub fn matches(pattern: &PolicyPattern, value: Option<&str>, property_name: &str) -> Self {
        match value {
            None => Self::invalid(FailureReason::new(property_name, IS_NULL)),
            Some(text) if pattern.is_full_match(text) => Self::valid(),
            Some(_) => Self::invalid(FailureReason::new(property_name, DOES_NOT_MATCH)),
        }
    }

    /// Evaluates a caller-supplied predicate against a value.
    ///
    /// The escape hatch for rules the built-in constructors do not cover.
    /// Fails with [`IS_NULL`] when the value is absent, and with the caller's
    /// `reason` when the predicate rejects it.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::Policy;
    ///
    /// let policy = Policy::satisfies(Some(&7), |n| *n % 2 == 0, "count", "Is odd");
    /// assert_eq!(policy.failure_reason().unwrap().reason(), "Is odd");
    /// ```
    pub fn satisfies<T, P>(value: Option<&T>, predicate: P, property_name: &str, reason: &str) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match value {
            None => Self::invalid(FailureReason::new(property_name, IS_NULL)),
            Some(inner) => {
                if predicate(inner) {
                    Self::valid()
                } else {
                    Self::invalid(FailureReason::new(property_name, reason))
                }
            }
        }
    }
}
