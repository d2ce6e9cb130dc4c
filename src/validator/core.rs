use crate::policy::Policy;
use crate::types::{Deferred, FailureReasons, PolicyVec};
use crate::validator::outcome::Outcome;

/// Accumulates policies before a payload producer is bound.
///
/// A builder is meant to be owned and mutated by a single call site during
/// composition, then handed off. All methods move `self`, so composition
/// reads as one fluent chain.
///
/// # Examples
///
/// ```
/// use valid_rail::{Builder, Policy};
///
/// let validator = Builder::empty()
///     .with(Policy::non_null(Some(&1), "id"))
///     .with(Policy::non_empty(Some("ada"), "name"))
///     .create(|| "user");
///
/// assert_eq!(validator.policies().len(), 2);
/// ```
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    policies: PolicyVec,
}

impl Builder {
    /// Creates a builder with zero policies.
    ///
    /// An empty rule set is vacuously valid: finalizing and running it
    /// always succeeds.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::Builder;
    ///
    /// let outcome = Builder::empty().create(|| 42).run();
    /// assert_eq!(outcome.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends one policy, preserving declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{Builder, Policy};
    ///
    /// let builder = Builder::empty().with(Policy::valid());
    /// ```
    #[inline]
    pub fn with(mut self, policy: Policy) -> Self {
        self.policies.push(policy);
        self
    }

    /// Copies all of another validator's policies into this builder.
    ///
    /// This is how nested validation composes: a parent aggregates the
    /// failures of a child validator without ever invoking the child's
    /// payload producer. The copy is a snapshot taken at call time — value
    /// semantics, so neither side can later observe changes in the other.
    ///
    /// Policies land after those already accumulated, in the order the
    /// other validator declared them:
    /// `a.with(r1).depends_on(&b)` with `b = [r2, r3]` yields `[r1, r2, r3]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{Builder, Policy};
    ///
    /// let address = Builder::empty()
    ///     .with(Policy::non_empty(Some("Baker Street"), "street"))
    ///     .create(|| "address");
    ///
    /// let user = Builder::empty()
    ///     .with(Policy::non_empty(Some("ada"), "name"))
    ///     .depends_on(&address)
    ///     .create(|| "user");
    ///
    /// assert_eq!(user.policies().len(), 2);
    /// ```
    pub fn depends_on<F>(mut self, other: &Validator<F>) -> Self {
        self.policies.extend(other.policies.iter().cloned());
        self
    }

    /// Finalizes the builder, binding a deferred payload producer.
    ///
    /// The producer is wrapped in a [`Deferred`] and not invoked here; it
    /// runs only if validation succeeds *and* the caller asks the outcome
    /// for the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::Builder;
    ///
    /// let validator = Builder::empty().create(|| vec![1, 2, 3]);
    /// let outcome = validator.run();
    /// assert_eq!(outcome.get().len(), 3);
    /// ```
    pub fn create<T, F>(self, producer: F) -> Validator<F>
    where
        F: FnOnce() -> T,
    {
        Validator {
            producer: Deferred::new(producer),
            policies: self.policies,
        }
    }
}

/// An immutable, finalized bundle of policies plus a deferred payload producer.
///
/// Created only via [`Builder::create`]. The policy list is never mutated
/// after finalization, so a validator (and [`check`](Validator::check)) is
/// safe to share read-only across threads when the producer type allows it.
///
/// [`run`](Validator::run) takes `self`: the producer moves into the success
/// outcome, making "invoked at most once, only on success" a property of
/// ownership. Re-running is available through [`check`](Validator::check)
/// (which never touches the producer) or by cloning the validator when the
/// producer closure is `Clone`.
///
/// # Examples
///
/// ```
/// use valid_rail::{Builder, Policy};
///
/// let validator = Builder::empty()
///     .with(Policy::non_null(None::<&i32>, "id"))
///     .create(|| "never built");
///
/// let outcome = validator.run();
/// assert_eq!(outcome.failures()[0].property(), "id");
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct Validator<F> {
    producer: Deferred<F>,
    policies: PolicyVec,
}

impl<F> Validator<F> {
    /// Returns the finalized policy list, in declaration order.
    #[must_use]
    #[inline]
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// Evaluates every policy without consuming the validator.
    ///
    /// All policies are checked — no short-circuiting — and every failure
    /// reason is collected in declaration order. The payload producer is
    /// never touched, so `check` can be called any number of times with
    /// identical results.
    ///
    /// # Errors
    ///
    /// Returns the full [`FailureReasons`] report when at least one policy
    /// is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{Builder, Policy};
    ///
    /// let validator = Builder::empty()
    ///     .with(Policy::non_empty(None, "email"))
    ///     .create(|| "user");
    ///
    /// assert!(validator.check().is_err());
    /// // Still usable afterwards.
    /// let outcome = validator.run();
    /// assert!(outcome.is_invalid());
    /// ```
    pub fn check(&self) -> Result<(), FailureReasons> {
        let failures = self.collect_failures();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            policies = self.policies.len(),
            failures = failures.len(),
            "checked validator"
        );

        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }

    /// Runs the validator, consuming it and producing an [`Outcome`].
    ///
    /// Every policy is evaluated; if any is invalid the producer is dropped
    /// — guaranteed never invoked — and the outcome carries the ordered
    /// failure report. If all pass, the outcome wraps the still-deferred
    /// producer; the payload is built only when the caller asks for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{Builder, Policy};
    ///
    /// let outcome = Builder::empty()
    ///     .with(Policy::non_empty(Some("ada"), "name"))
    ///     .create(|| "payload")
    ///     .run();
    ///
    /// assert!(outcome.is_valid());
    /// ```
    pub fn run(self) -> Outcome<F> {
        let failures = self.collect_failures();

        #[cfg(feature = "tracing")]
        if failures.is_empty() {
            tracing::trace!(policies = self.policies.len(), "validation passed");
        } else {
            tracing::debug!(
                policies = self.policies.len(),
                failures = failures.len(),
                "validation failed"
            );
        }

        if failures.is_empty() {
            Outcome::Valid(self.producer)
        } else {
            Outcome::Invalid(failures)
        }
    }

    fn collect_failures(&self) -> FailureReasons {
        self.policies
            .iter()
            .filter_map(|policy| policy.failure_reason())
            .cloned()
            .collect()
    }
}
