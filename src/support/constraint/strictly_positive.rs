use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Kelvin temperatures, volumes, and gas amounts all carry this constraint.
///
/// # Examples
///
/// ```
/// use carnot_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::HeatCapacity, heat_capacity::joule_per_kelvin};
///
/// let v1 = Constrained::<_, StrictlyPositive>::new(1.0).unwrap();
/// assert_eq!(v1.into_inner(), 1.0);
///
/// let n_r = StrictlyPositive::new(HeatCapacity::new::<joule_per_kelvin>(8.314)).unwrap();
/// assert_eq!(n_r.as_ref().get::<joule_per_kelvin>(), 8.314);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
