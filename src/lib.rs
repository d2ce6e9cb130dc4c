//! Composable validation that accumulates every failure and defers payload
//! construction until all rules pass.
//!
//! Callers declare a set of named policies against candidate values, then
//! finalize with a zero-argument payload producer. Running the validator
//! evaluates *all* policies (no short-circuiting) and yields an
//! [`Outcome`]: either the ordered [`FailureReasons`] report, or the
//! still-deferred producer — invoked only when the caller actually asks for
//! the value, and never when any rule failed.
//!
//! # Examples
//!
//! ## Declaring and running policies
//!
//! ```
//! use rust_decimal::Decimal;
//! use valid_rail::{Builder, Policy};
//!
//! let outcome = Builder::empty()
//!     .with(Policy::non_empty(Some("ada"), "name"))
//!     .with(Policy::greater_than_zero(Some(Decimal::from(5)), "amount"))
//!     .create(|| "order")
//!     .run();
//!
//! assert_eq!(outcome.into_value(), Some("order"));
//! ```
//!
//! ## Accumulating every failure
//!
//! ```
//! use valid_rail::{Builder, Policy};
//!
//! let outcome = Builder::empty()
//!     .with(Policy::non_null(None::<&i32>, "id"))
//!     .with(Policy::non_empty(Some(""), "email"))
//!     .create(|| "never built")
//!     .run();
//!
//! let failures = outcome.into_failures();
//! assert_eq!(failures.len(), 2);
//! assert_eq!(failures.to_string(), "id: Is null; email: Is empty");
//! ```
//!
//! ## Nested validation via `depends_on`
//!
//! ```
//! use valid_rail::{Builder, Policy};
//!
//! let address = Builder::empty()
//!     .with(Policy::non_empty(Some("Baker Street"), "street"))
//!     .create(|| "address");
//!
//! let user = Builder::empty()
//!     .with(Policy::non_empty(Some("ada"), "name"))
//!     .depends_on(&address)
//!     .create(|| "user")
//!     .run();
//!
//! // The address producer was never invoked; only its policies were merged.
//! assert!(user.is_valid());
//! ```

/// Policy-set declaration macros
pub mod macros;
/// Validation policies and their built-in constructors
pub mod policy;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Failure records, accumulators, and the deferred payload thunk
pub mod types;
/// The composition engine: Builder, Validator, and Outcome
pub mod validator;

// Re-export the public surface at the root; the prelude narrows it further.
pub use policy::*;
pub use types::{Deferred, FailureReason, FailureReasons, PolicyVec, ReasonVec};
pub use validator::{Builder, Outcome, Validator};
