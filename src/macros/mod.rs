//! Ergonomic macros for declaring policy sets.
//!
//! - [`macro@crate::policies`] - builds a [`Builder`](crate::Builder)
//!   preloaded with a list of policies, in declaration order.
//!
//! # Examples
//!
//! ```
//! use valid_rail::{policies, Policy};
//!
//! let outcome = policies![
//!     Policy::non_empty(Some("ada"), "name"),
//!     Policy::non_null(Some(&36), "age"),
//! ]
//! .create(|| "user")
//! .run();
//!
//! assert!(outcome.is_valid());
//! ```

/// Builds a [`Builder`](crate::Builder) preloaded with the listed policies.
///
/// Policies are appended in the order written, so failure reasons come back
/// in the same order. An empty invocation is equivalent to
/// [`Builder::empty()`](crate::Builder::empty).
///
/// # Examples
///
/// ```
/// use valid_rail::{policies, Policy};
///
/// let builder = policies![
///     Policy::non_null(None::<&i32>, "id"),
///     Policy::non_empty(Some(""), "name"),
/// ];
///
/// let failures = builder.create(|| ()).run().into_failures();
/// assert_eq!(failures.len(), 2);
/// ```
#[macro_export]
macro_rules! policies {
    () => {
        $crate::validator::Builder::empty()
    };
    ($($policy:expr),+ $(,)?) => {{
        let mut builder = $crate::validator::Builder::empty();
        $(
            builder = builder.with($policy);
        )+
        builder
    }};
}
