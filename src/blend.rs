//! Blend strategies: how a value between two key points is computed from its neighbors.
//!
//! A store resolves the strategy for each query in a fixed order: a strategy passed to the query
//! itself, then the strategy stored on the store, then the default, which asks the lower value to
//! [`Interpolatable::interpolate`] itself towards the higher one.

use dyn_clone::DynClone;

use crate::{error::InterpolateError, interpolatable::Interpolatable};

/// Computes a blended value from the values at the low and high ends of a bracket and the
/// balance ratio between them (0.0 at `low`, 1.0 at `high`).
///
/// Any `Fn(&V, &V, f64) -> V + Clone` closure is a blend strategy. Implement the trait directly
/// for strategies that can fail.
pub trait BlendStrategy<V>: DynClone {
    /// Blends `low` and `high`.
    /// # Errors
    /// - If the strategy cannot blend the two values
    fn blend(&self, low: &V, high: &V, balance: f64) -> Result<V, InterpolateError>;
}

dyn_clone::clone_trait_object!(<V> BlendStrategy<V>);

impl<V, F> BlendStrategy<V> for F
where
    F: Fn(&V, &V, f64) -> V + Clone,
{
    fn blend(&self, low: &V, high: &V, balance: f64) -> Result<V, InterpolateError> {
        Ok(self(low, high, balance))
    }
}

/// A blend strategy as a store keeps it.
pub type BoxedBlendStrategy<V> = Box<dyn BlendStrategy<V> + Send + Sync>;

/// The strategy used when neither the query nor the store supplies one.
/// # Errors
/// - If `low` cannot be interpolated towards `high`
pub fn default_blend<V: Interpolatable>(
    low: &V,
    high: &V,
    balance: f64,
) -> Result<V, InterpolateError> {
    low.interpolate(high, balance)
}

/// Picks the strategy for one query: the per-query one if given, otherwise the stored one.
/// `None` means the caller has to fall back to [`default_blend`].
pub(crate) fn resolve<'a, V>(
    given: Option<&'a dyn BlendStrategy<V>>,
    stored: Option<&'a BoxedBlendStrategy<V>>,
) -> Option<&'a dyn BlendStrategy<V>> {
    given.or_else(|| stored.map(|strategy| strategy.as_ref() as &dyn BlendStrategy<V>))
}

/// Always the lower value. Turns a store into a step function, e.g. for bucketing.
#[must_use]
pub fn lower<V: Clone>(low: &V, _high: &V, _balance: f64) -> V {
    low.clone()
}

/// Always the higher value.
#[must_use]
pub fn upper<V: Clone>(_low: &V, high: &V, _balance: f64) -> V {
    high.clone()
}

/// Whichever value is closer; ties go to the higher value.
#[must_use]
pub fn nearest<V: Clone>(low: &V, high: &V, balance: f64) -> V {
    if balance < 0.5 {
        low.clone()
    } else {
        high.clone()
    }
}
