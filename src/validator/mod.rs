//! The composition engine: builders, validators, and outcomes.
//!
//! This module wires the crate together. A [`Builder`] accumulates
//! [`Policy`](crate::Policy) values (its own, or another validator's via
//! [`Builder::depends_on`]), then [`Builder::create`] binds a deferred
//! payload producer to finalize a [`Validator`]. Running the validator
//! evaluates *every* policy — no short-circuiting, so every failure is
//! reported — and yields an [`Outcome`] that either still holds the
//! un-invoked producer or carries the ordered failure report.
//!
//! # Key Components
//!
//! - [`Builder`] - mutable, single-owner accumulation stage
//! - [`Validator`] - immutable, finalized bundle of policies plus producer
//! - [`Outcome`] - success-with-deferred-payload XOR failure-with-reasons
//!
//! # Examples
//!
//! ```
//! use valid_rail::{Builder, Policy};
//!
//! let outcome = Builder::empty()
//!     .with(Policy::non_empty(Some("ada"), "name"))
//!     .create(|| "payload")
//!     .run();
//!
//! assert_eq!(outcome.into_value(), Some("payload"));
//! ```
pub mod core;
pub mod outcome;

pub use self::core::*;
pub use self::outcome::*;
