use crate::{error::InterpolateError, utils::lerp};

pub mod sequence;
pub mod value;
pub use value::Value;

/// A value that knows how to blend itself with a neighbor.
///
/// `balance` is the fractional position between `self` (0.0) and `other` (1.0). Implementations
/// must return something equal to `self` when `balance <= 0.0` and equal to `other` when
/// `balance >= 1.0`; in between, the blend is up to the type.
///
/// This is what the default blend strategy of [`crate::Points`] calls on the lower of the two
/// values around a query point.
pub trait Interpolatable: Sized {
    /// Blends `self` towards `other`.
    /// # Errors
    /// - If `self` and `other` cannot be blended with each other (e.g., sequences of different
    ///   lengths)
    fn interpolate(&self, other: &Self, balance: f64) -> Result<Self, InterpolateError>;
}

impl Interpolatable for f64 {
    fn interpolate(&self, other: &Self, balance: f64) -> Result<Self, InterpolateError> {
        Ok(lerp(*self, *other, balance))
    }
}

impl Interpolatable for f32 {
    fn interpolate(&self, other: &Self, balance: f64) -> Result<Self, InterpolateError> {
        // Blend in double precision and narrow once at the end.
        #[allow(clippy::cast_possible_truncation)]
        Ok(lerp(f64::from(*self), f64::from(*other), balance) as f32)
    }
}

impl<T: Interpolatable> Interpolatable for Box<T> {
    fn interpolate(&self, other: &Self, balance: f64) -> Result<Self, InterpolateError> {
        Ok(Box::new(self.as_ref().interpolate(other.as_ref(), balance)?))
    }
}

impl<A: Interpolatable, B: Interpolatable> Interpolatable for (A, B) {
    fn interpolate(&self, other: &Self, balance: f64) -> Result<Self, InterpolateError> {
        Ok((
            self.0.interpolate(&other.0, balance)?,
            self.1.interpolate(&other.1, balance)?,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use statrs::assert_almost_eq;

    use super::Interpolatable;

    #[test]
    fn test_f64_interpolate() {
        assert_almost_eq!(0.0_f64.interpolate(&1.0, 0.5).unwrap(), 0.5, 1e-12);
        assert_almost_eq!(1.0_f64.interpolate(&5.0, 0.25).unwrap(), 2.0, 1e-12);
    }

    #[test]
    fn test_f64_interpolate_out_of_range_balance() {
        assert_eq!(2.0_f64.interpolate(&4.0, -1.0).unwrap(), 2.0);
        assert_eq!(2.0_f64.interpolate(&4.0, 3.0).unwrap(), 4.0);
    }

    #[test]
    fn test_f32_interpolate() {
        assert_eq!(1.0_f32.interpolate(&2.0, 0.5).unwrap(), 1.5);
    }

    #[test]
    fn test_box_interpolate() {
        let low = Box::new(10.0);
        let high = Box::new(20.0);
        assert_eq!(*low.interpolate(&high, 0.5).unwrap(), 15.0);
    }

    #[test]
    fn test_pair_interpolate() {
        let low = (0.0, 100.0);
        let high = (10.0, 0.0);
        assert_eq!(low.interpolate(&high, 0.1).unwrap(), (1.0, 90.0));
    }
}
