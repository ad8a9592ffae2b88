use std::{
    fmt::{Debug, Formatter},
    sync::OnceLock,
};

use indexmap::IndexMap;
use log::trace;

use crate::{
    blend::{default_blend, resolve, BlendStrategy, BoxedBlendStrategy},
    error::InterpolateError,
    interpolatable::Interpolatable,
    key_point::{KeyPoint, ToKey},
    utils::balance_ratio,
};

mod sorted;
use sorted::SortedKeys;

#[cfg(feature = "serde")]
mod serialization;

/// Where a query point falls among the key points of a store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket<'a, V> {
    /// The answer is a stored value as is: the point hit a key exactly, was clamped to the first
    /// or last key, or the store only has one key.
    Exact { key: f64, value: &'a V },
    /// The point lies strictly between two adjacent keys and needs blending.
    Between {
        low_key: f64,
        low: &'a V,
        high_key: f64,
        high: &'a V,
        balance: f64,
    },
}

/// An ordered set of numeric key points, each with a value, that can be queried at any point in
/// between.
///
/// Queries below the first key or above the last key are clamped to the value at that key; there
/// is no extrapolation. Between two keys, the lower and upper values are blended according to the
/// active blend strategy (see [`crate::blend`]).
///
/// ```
/// use interpolate_points::Points;
///
/// let points = Points::new([(0, 0.0), (10, 1.0)]).unwrap();
/// assert_eq!(points.at(5).unwrap(), Some(0.5));
/// assert_eq!(points.at(-100).unwrap(), Some(0.0));
/// assert_eq!(points.at(1000).unwrap(), Some(1.0));
/// ```
pub struct Points<V> {
    points: IndexMap<KeyPoint, V>,
    // Rebuilt lazily after every mutation.
    sorted: OnceLock<SortedKeys>,
    blend: Option<BoxedBlendStrategy<V>>,
}

impl<V> Points<V> {
    /// Creates a store from `(key, value)` pairs. Later pairs win when a key repeats.
    /// # Errors
    /// - If any key is NaN or infinite; nothing is created in that case
    pub fn new<K, I>(points: I) -> Result<Self, InterpolateError>
    where
        K: ToKey,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut store = Self::empty();
        store.merge_in_place(points)?;
        Ok(store)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: IndexMap::new(),
            sorted: OnceLock::new(),
            blend: None,
        }
    }

    /// Builder form of [`Points::blend_with`].
    #[must_use]
    pub fn with_blend<F>(mut self, blend: F) -> Self
    where
        F: Fn(&V, &V, f64) -> V + Clone + Send + Sync + 'static,
    {
        self.blend_with(blend);
        self
    }

    /// Stores `blend` as this store's blend strategy.
    pub fn blend_with<F>(&mut self, blend: F)
    where
        F: Fn(&V, &V, f64) -> V + Clone + Send + Sync + 'static,
    {
        self.set_blend_strategy(Some(Box::new(blend)));
    }

    /// Replaces the stored blend strategy. `None` goes back to the default strategy. The key
    /// points are not touched.
    pub fn set_blend_strategy(&mut self, blend: Option<BoxedBlendStrategy<V>>) {
        trace!(
            "{} blend strategy on a store of {} key points",
            if blend.is_some() { "Setting" } else { "Clearing" },
            self.points.len()
        );
        self.blend = blend;
    }

    pub fn clear_blend_strategy(&mut self) {
        self.set_blend_strategy(None);
    }

    #[must_use]
    pub fn has_blend_strategy(&self) -> bool {
        self.blend.is_some()
    }

    /// Overlays `points` onto this store; incoming keys win on collision.
    ///
    /// Every key is validated before anything is inserted, so on error the store is unchanged.
    /// # Errors
    /// - If any key is NaN or infinite
    pub fn merge_in_place<K, I>(&mut self, points: I) -> Result<&mut Self, InterpolateError>
    where
        K: ToKey,
        I: IntoIterator<Item = (K, V)>,
    {
        let incoming = points
            .into_iter()
            .map(|(key, value)| KeyPoint::new(key).map(|key| (key, value)))
            .collect::<Result<Vec<_>, InterpolateError>>()?;
        let count = incoming.len();
        self.points.extend(incoming);
        self.sorted = OnceLock::new();
        trace!(
            "Merged {count} key points; store now has {} key points",
            self.points.len()
        );
        Ok(self)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The raw key to value mapping, in insertion order.
    #[must_use]
    pub fn points(&self) -> &IndexMap<KeyPoint, V> {
        &self.points
    }

    /// The value stored at exactly `key`, if any.
    pub fn get(&self, key: impl ToKey) -> Option<&V> {
        let key = KeyPoint::new(key).ok()?;
        self.points.get(&key)
    }

    /// All keys in ascending order.
    #[must_use]
    pub fn sorted_keys(&self) -> &[f64] {
        self.sorted().keys()
    }

    /// `(key, value)` pairs in ascending key order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (f64, &V)> + '_ {
        (0..self.len()).map(move |rank| self.entry(rank))
    }

    #[must_use]
    pub fn min_key(&self) -> Option<f64> {
        self.sorted().min_key()
    }

    #[must_use]
    pub fn max_key(&self) -> Option<f64> {
        self.sorted().max_key()
    }

    /// Finds where `point` falls. `None` for an empty store.
    /// # Errors
    /// - If `point` is NaN
    pub fn bracket(
        &self,
        point: impl ToKey,
    ) -> Result<Option<Bracket<'_, V>>, InterpolateError> {
        let point = point.to_key();
        if point.is_nan() {
            return Err(InterpolateError::invalid_key(point));
        }
        let sorted = self.sorted();
        let (Some(min_key), Some(max_key)) = (sorted.min_key(), sorted.max_key()) else {
            return Ok(None);
        };
        if sorted.len() == 1 || point <= min_key {
            return Ok(Some(self.exact(0)));
        }
        if point >= max_key {
            return Ok(Some(self.exact(sorted.len() - 1)));
        }

        let i = sorted.find_interval(point);
        let (low_key, low) = self.entry(i);
        let (high_key, high) = self.entry(i + 1);
        let balance = balance_ratio(low_key, high_key, point);
        // Exact hits return the stored value itself, never a blend of it.
        #[allow(clippy::float_cmp)]
        if balance == 0.0 {
            return Ok(Some(self.exact(i)));
        }
        #[allow(clippy::float_cmp)]
        if balance == 1.0 {
            return Ok(Some(self.exact(i + 1)));
        }
        Ok(Some(Bracket::Between {
            low_key,
            low,
            high_key,
            high,
            balance,
        }))
    }

    /// The value at `point` blended with `blend` instead of the store's strategy.
    /// # Errors
    /// - If `point` is NaN
    pub fn at_with<F>(&self, point: impl ToKey, blend: F) -> Result<Option<V>, InterpolateError>
    where
        V: Clone,
        F: Fn(&V, &V, f64) -> V + Clone,
    {
        self.at_with_strategy(point, &blend)
    }

    /// Like [`Points::at_with`], for strategies that can fail.
    /// # Errors
    /// - If `point` is NaN
    /// - If `blend` fails
    pub fn at_with_strategy(
        &self,
        point: impl ToKey,
        blend: &dyn BlendStrategy<V>,
    ) -> Result<Option<V>, InterpolateError>
    where
        V: Clone,
    {
        self.evaluate_resolved(point, Some(blend), |_, _, _| {
            unreachable!("a per-query strategy always resolves")
        })
    }

    /// The value at `point` using only the stored blend strategy. This works for values that
    /// cannot interpolate themselves.
    /// # Errors
    /// - If `point` is NaN
    /// - If `point` falls between two keys and no blend strategy is stored
    /// - If the stored strategy fails
    pub fn at_custom(&self, point: impl ToKey) -> Result<Option<V>, InterpolateError>
    where
        V: Clone,
    {
        self.evaluate_resolved(point, None, |_, _, _| {
            Err(InterpolateError::NotInterpolatable {
                value: format!("of type {}", std::any::type_name::<V>()),
            })
        })
    }

    /// Evaluates `point` with the first strategy found among `given` and the stored one, or with
    /// `fallback` when there is neither.
    fn evaluate_resolved<F>(
        &self,
        point: impl ToKey,
        given: Option<&dyn BlendStrategy<V>>,
        fallback: F,
    ) -> Result<Option<V>, InterpolateError>
    where
        V: Clone,
        F: FnOnce(&V, &V, f64) -> Result<V, InterpolateError>,
    {
        self.evaluate(point, |low, high, balance| {
            match resolve(given, self.blend.as_ref()) {
                Some(blend) => blend.blend(low, high, balance),
                None => fallback(low, high, balance),
            }
        })
    }

    fn evaluate<F>(&self, point: impl ToKey, blend: F) -> Result<Option<V>, InterpolateError>
    where
        V: Clone,
        F: FnOnce(&V, &V, f64) -> Result<V, InterpolateError>,
    {
        match self.bracket(point)? {
            None => Ok(None),
            Some(Bracket::Exact { value, .. }) => Ok(Some(value.clone())),
            Some(Bracket::Between {
                low, high, balance, ..
            }) => blend(low, high, balance).map(Some),
        }
    }

    fn sorted(&self) -> &SortedKeys {
        self.sorted.get_or_init(|| SortedKeys::build(&self.points))
    }

    /// Key and value of the `rank`-th smallest key.
    fn entry(&self, rank: usize) -> (f64, &V) {
        let sorted = self.sorted();
        let value = self
            .points
            .get_index(sorted.slots()[rank])
            .map(|(_, value)| value)
            .unwrap_or_else(|| unreachable!("sorted view is out of date with the store"));
        (sorted.keys()[rank], value)
    }

    fn exact(&self, rank: usize) -> Bracket<'_, V> {
        let (key, value) = self.entry(rank);
        Bracket::Exact { key, value }
    }
}

impl<V: Clone> Points<V> {
    /// A new store with `points` overlaid on this one's; incoming keys win on collision. The new
    /// store keeps this store's blend strategy. `self` is not modified.
    /// # Errors
    /// - If any key is NaN or infinite
    pub fn merge<K, I>(&self, points: I) -> Result<Self, InterpolateError>
    where
        K: ToKey,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut merged = self.clone();
        merged.merge_in_place(points)?;
        Ok(merged)
    }
}

impl<V: Interpolatable + Clone> Points<V> {
    /// The value at `point`.
    ///
    /// Returns `Ok(None)` for an empty store, the only value for a single-key store, and the
    /// first or last value when `point` is outside the keys. Otherwise the two surrounding values
    /// are blended with the stored strategy, or by the lower value's
    /// [`Interpolatable::interpolate`] if none is stored.
    /// # Errors
    /// - If `point` is NaN
    /// - If blending fails (e.g., sequences of different lengths)
    pub fn at(&self, point: impl ToKey) -> Result<Option<V>, InterpolateError> {
        self.evaluate_resolved(point, None, default_blend::<V>)
    }
}

impl<V> Default for Points<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: Clone> Clone for Points<V> {
    fn clone(&self) -> Self {
        Self {
            points: self.points.clone(),
            sorted: self.sorted.clone(),
            blend: self.blend.clone(),
        }
    }
}

impl<V: Debug> Debug for Points<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Points")
            .field("points", &self.points)
            .field("blend", &self.blend.as_ref().map(|_| "custom"))
            .finish()
    }
}
