//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick
//! starts. Import everything with:
//!
//! ```
//! use valid_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`policies!`]
//! - **Types**: [`Policy`], [`PolicyPattern`], [`FailureReason`], [`FailureReasons`]
//! - **Engine**: [`Builder`], [`Validator`], [`Outcome`]
//!
//! # Examples
//!
//! ```
//! use valid_rail::prelude::*;
//!
//! let outcome = policies![Policy::non_empty(Some("ada"), "name")]
//!     .create(|| "user")
//!     .run();
//!
//! assert!(outcome.is_valid());
//! ```

// Macros
pub use crate::policies;

// Core types
pub use crate::policy::{Policy, PolicyPattern};
pub use crate::types::{FailureReason, FailureReasons};

// Composition engine
pub use crate::validator::{Builder, Outcome, Validator};
