use crate::error::InterpolateError;

use super::Interpolatable;

/// Checks the two lengths an element-wise blend needs: equal and non-zero.
fn check_lengths(low: usize, high: usize) -> Result<(), InterpolateError> {
    if low < 1 {
        return Err(InterpolateError::EmptyOperand);
    }
    if low != high {
        return Err(InterpolateError::length_mismatch(low, high));
    }
    Ok(())
}

/// Element-wise blend. Nested sequences recurse through their elements, so every level has to
/// have the same shape; the check happens as the recursion reaches it.
impl<T: Interpolatable + Clone> Interpolatable for Vec<T> {
    fn interpolate(&self, other: &Self, balance: f64) -> Result<Self, InterpolateError> {
        check_lengths(self.len(), other.len())?;
        if balance <= 0.0 {
            return Ok(self.clone());
        }
        if balance >= 1.0 {
            return Ok(other.clone());
        }
        self.iter()
            .zip(other)
            .map(|(low, high)| low.interpolate(high, balance))
            .collect()
    }
}

impl<T: Interpolatable + Clone, const N: usize> Interpolatable for [T; N] {
    fn interpolate(&self, other: &Self, balance: f64) -> Result<Self, InterpolateError> {
        check_lengths(N, N)?;
        if balance <= 0.0 {
            return Ok(self.clone());
        }
        if balance >= 1.0 {
            return Ok(other.clone());
        }
        let mut blended = self.clone();
        for (out, high) in blended.iter_mut().zip(other) {
            *out = out.interpolate(high, balance)?;
        }
        Ok(blended)
    }
}
