use indexmap::IndexMap;
use log::debug;

use crate::key_point::KeyPoint;

/// Ascending view over the keys of a store. `slots[i]` is the position in the store's map of the
/// `i`-th smallest key, so values can be read without copying them into the view.
#[derive(Debug, Clone)]
pub(crate) struct SortedKeys {
    keys: Vec<f64>,
    slots: Vec<usize>,
}

impl SortedKeys {
    pub(crate) fn build<V>(points: &IndexMap<KeyPoint, V>) -> Self {
        let mut entries: Vec<(KeyPoint, usize)> = points.keys().copied().zip(0..).collect();
        entries.sort_unstable_by_key(|&(key, _)| key);
        let (keys, slots): (Vec<f64>, Vec<usize>) = entries
            .into_iter()
            .map(|(key, slot)| (key.value(), slot))
            .unzip();
        debug!("Rebuilt sorted view over {} key points", keys.len());
        Self { keys, slots }
    }

    pub(crate) fn keys(&self) -> &[f64] {
        &self.keys
    }

    pub(crate) fn slots(&self) -> &[usize] {
        &self.slots
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn min_key(&self) -> Option<f64> {
        self.keys.first().copied()
    }

    pub(crate) fn max_key(&self) -> Option<f64> {
        self.keys.last().copied()
    }

    /// Index `i` of the interval `keys[i]..=keys[i + 1]` that holds `point`.
    ///
    /// Callers must have already clamped: at least two keys, and `min_key < point < max_key`.
    /// The search walks interval indices `0..=len - 2`, moving left when `point` is below the
    /// interval's low key and right otherwise.
    pub(crate) fn find_interval(&self, point: f64) -> usize {
        let keys = &self.keys;
        let mut left = 0;
        let mut right = keys.len() - 2;
        while left <= right {
            let middle = left + (right - left) / 2;
            let (low, high) = (keys[middle], keys[middle + 1]);
            if low <= point && point <= high {
                return middle;
            }
            if point < low {
                // keys[0] < point, so the interval at index 0 never sends the search further left.
                right = middle - 1;
            } else {
                left = middle + 1;
            }
        }
        unreachable!(
            "no interval of {} key points contains {point}; the bounds checks should have caught it",
            keys.len()
        )
    }
}
