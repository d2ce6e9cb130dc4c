//! Deferred payload construction.
//!
//! This module provides [`Deferred`], a wrapper that delays invoking the
//! payload producer until the caller actually asks for the value. A
//! [`Validator`](crate::Validator) binds its producer into a `Deferred` at
//! finalize time; the closure survives into the success
//! [`Outcome`](crate::Outcome) untouched and is dropped without ever running
//! when validation fails.
//!
//! # Examples
//!
//! ```
//! use valid_rail::Deferred;
//!
//! let thunk = Deferred::new(|| 21 * 2);
//! // The closure has not run yet.
//! assert_eq!(thunk.produce(), 42);
//! ```

/// A zero-argument producer whose invocation is deferred until [`produce`].
///
/// `produce` takes `self`, so the wrapped closure can run at most once;
/// the at-most-once guarantee is enforced by ownership rather than by
/// caller discipline.
///
/// # Type Parameters
///
/// * `F` - The producer closure type, `FnOnce() -> T`.
///
/// [`produce`]: Deferred::produce
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Deferred<F> {
    producer: F,
}

impl<F> Deferred<F> {
    /// Wraps a producer without invoking it.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::Deferred;
    ///
    /// let thunk = Deferred::new(|| String::from("payload"));
    /// ```
    #[must_use]
    #[inline]
    pub fn new(producer: F) -> Self {
        Self { producer }
    }

    /// Invokes the producer, consuming the wrapper.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::Deferred;
    ///
    /// let thunk = Deferred::new(|| vec![1, 2, 3]);
    /// assert_eq!(thunk.produce().len(), 3);
    /// ```
    #[inline]
    pub fn produce<T>(self) -> T
    where
        F: FnOnce() -> T,
    {
        (self.producer)()
    }
}

impl<F> core::fmt::Debug for Deferred<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Deferred(..)")
    }
}
