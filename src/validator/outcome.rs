use crate::types::{Deferred, FailureReason, FailureReasons};

/// The result of running a [`Validator`](crate::Validator).
///
/// Exactly one of two shapes, carried by the sum type itself: `Valid` holds
/// the not-yet-invoked payload producer, `Invalid` holds the ordered failure
/// report. There is no state where both exist.
///
/// The producer inside `Valid` runs at most once: every value-extracting
/// method takes `self`, and the failure-reading methods never touch it.
///
/// # Type Parameters
///
/// * `F` - The deferred producer type, `FnOnce() -> T`.
///
/// # Examples
///
/// ```
/// use valid_rail::{Builder, Policy};
///
/// let outcome = Builder::empty()
///     .with(Policy::non_empty(None, "email"))
///     .create(|| "user")
///     .run();
///
/// outcome.if_valid_or_else(
///     |_user| unreachable!(),
///     |failures| assert_eq!(failures.len(), 1),
/// );
/// ```
#[must_use]
#[derive(Debug)]
pub enum Outcome<F> {
    /// Every policy passed; the payload producer is still un-invoked.
    Valid(Deferred<F>),
    /// At least one policy failed; the producer was dropped without running.
    Invalid(FailureReasons),
}

impl<F> Outcome<F> {
    /// Creates a success outcome from a payload producer.
    #[inline]
    pub fn valid(producer: F) -> Self {
        Self::Valid(Deferred::new(producer))
    }

    /// Creates a failure outcome from an accumulated report.
    #[inline]
    pub fn invalid(failures: FailureReasons) -> Self {
        Self::Invalid(failures)
    }

    /// Returns `true` if every policy passed.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if at least one policy failed.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the payload, invoking the deferred producer at call time.
    ///
    /// # Panics
    ///
    /// Panics with "no value present" if the outcome represents failure.
    /// Reaching for the payload of a failed validation is illegitimate
    /// access, not a validation result; prefer
    /// [`into_value`](Self::into_value) or [`to_result`](Self::to_result)
    /// when failure is expected.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::Builder;
    ///
    /// let outcome = Builder::empty().create(|| 42).run();
    /// assert_eq!(outcome.get(), 42);
    /// ```
    pub fn get<T>(self) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Valid(producer) => producer.produce(),
            Self::Invalid(_) => panic!("no value present"),
        }
    }

    /// Returns the payload if valid, invoking the producer; `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{Builder, Policy};
    ///
    /// let outcome = Builder::empty().create(|| 42).run();
    /// assert_eq!(outcome.into_value(), Some(42));
    ///
    /// let failed = Builder::empty()
    ///     .with(Policy::non_null(None::<&i32>, "id"))
    ///     .create(|| 42)
    ///     .run();
    /// assert_eq!(failed.into_value(), None);
    /// ```
    #[must_use]
    pub fn into_value<T>(self) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Valid(producer) => Some(producer.produce()),
            Self::Invalid(_) => None,
        }
    }

    /// Returns the recorded failures as an ordered slice.
    ///
    /// Empty for a success outcome. Never invokes the producer, no matter
    /// how often it is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{Builder, Policy};
    ///
    /// let outcome = Builder::empty()
    ///     .with(Policy::non_empty(None, "email"))
    ///     .create(|| "user")
    ///     .run();
    ///
    /// assert_eq!(outcome.failures()[0].reason(), "Is empty");
    /// ```
    #[must_use]
    pub fn failures(&self) -> &[FailureReason] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(failures) => failures.as_slice(),
        }
    }

    /// Consumes the outcome and returns the failure report.
    ///
    /// An empty report for a success outcome; the producer is dropped
    /// without running.
    #[must_use]
    pub fn into_failures(self) -> FailureReasons {
        match self {
            Self::Valid(_) => FailureReasons::new(),
            Self::Invalid(failures) => failures,
        }
    }

    /// Returns an iterator over the recorded failures, oldest first.
    pub fn iter_failures(&self) -> core::slice::Iter<'_, FailureReason> {
        self.failures().iter()
    }

    /// Invokes exactly one branch: `on_valid` with the produced payload, or
    /// `on_invalid` with the failure report.
    ///
    /// The idiomatic consumption pattern: the producer runs at most once,
    /// and only on the success path.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::Builder;
    ///
    /// Builder::empty().create(|| 42).run().if_valid_or_else(
    ///     |value| assert_eq!(value, 42),
    ///     |_failures| unreachable!(),
    /// );
    /// ```
    pub fn if_valid_or_else<T, V, I>(self, on_valid: V, on_invalid: I)
    where
        F: FnOnce() -> T,
        V: FnOnce(T),
        I: FnOnce(FailureReasons),
    {
        match self {
            Self::Valid(producer) => on_valid(producer.produce()),
            Self::Invalid(failures) => on_invalid(failures),
        }
    }

    /// Converts into a `Result`, invoking the producer on the success path.
    ///
    /// Bridges a validation outcome into `?`-style error handling;
    /// [`FailureReasons`] implements [`std::error::Error`].
    ///
    /// # Errors
    ///
    /// Returns the failure report when the outcome represents failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::Builder;
    ///
    /// let result = Builder::empty().create(|| 42).run().to_result();
    /// assert_eq!(result.unwrap(), 42);
    /// ```
    pub fn to_result<T>(self) -> Result<T, FailureReasons>
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Valid(producer) => Ok(producer.produce()),
            Self::Invalid(failures) => Err(failures),
        }
    }
}
