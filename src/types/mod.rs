//! Core value types for validation reporting.
//!
//! This module provides the data half of the crate: the immutable
//! [`FailureReason`] record, the ordered [`FailureReasons`] accumulator, and
//! the [`Deferred`] payload thunk, plus the `SmallVec`-backed aliases shared
//! across the crate.
//!
//! # Examples
//!
//! ```
//! use valid_rail::{FailureReason, FailureReasons};
//!
//! let mut reasons = FailureReasons::new();
//! reasons.push(FailureReason::new("name", "Is null"));
//!
//! assert_eq!(reasons.to_string(), "name: Is null");
//! ```
use smallvec::SmallVec;

pub mod deferred;
pub mod failure_reason;
pub mod failure_reasons;

pub use deferred::*;
pub use failure_reason::*;
pub use failure_reasons::*;

/// SmallVec-backed collection used for accumulating failure reasons.
///
/// Uses inline storage for up to 2 elements so the common one-or-two-failure
/// report avoids heap allocation.
pub type ReasonVec = SmallVec<[FailureReason; 2]>;

/// SmallVec-backed collection used for accumulating policies.
///
/// Uses inline storage for up to 4 elements; small rule sets stay on the
/// stack through composition and evaluation.
pub type PolicyVec = SmallVec<[crate::policy::Policy; 4]>;
