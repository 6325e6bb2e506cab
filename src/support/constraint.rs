//! Type-level numeric constraints for physical inputs.
//!
//! Pipe diameters, viscosities, pressures and lengths must be validated before
//! they reach a solver, where a zero or negative value would otherwise surface
//! as a division fault or a meaningless root. The types in this module carry
//! that validation in the type system: once a value is wrapped, it is known to
//! satisfy its constraint.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater (e.g., absolute roughness)
//! - [`StrictlyPositive`]: Greater than zero (e.g., inside diameter)
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A check applied to a value when it is wrapped in [`Constrained`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that has passed its constraint check.
///
/// # Example
///
/// ```
/// use supply_sizing::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::inch};
///
/// let diameter = Constrained::<_, StrictlyPositive>::new(Length::new::<inch>(1.025)).unwrap();
/// assert!((diameter.into_inner().get::<inch>() - 1.025).abs() < 1e-12);
///
/// assert!(StrictlyPositive::new(Length::new::<inch>(0.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
