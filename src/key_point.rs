use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::error::InterpolateError;

/// A number that can be used as a key point or query point.
///
/// Integer types wider than 32 bits convert with `as f64`, so very large values round to the
/// nearest representable `f64`.
pub trait ToKey {
    fn to_key(self) -> f64;
}

macro_rules! impl_to_key_lossless {
    ($($t:ty),*) => {
        $(impl ToKey for $t {
            fn to_key(self) -> f64 {
                f64::from(self)
            }
        })*
    };
}

macro_rules! impl_to_key_lossy {
    ($($t:ty),*) => {
        $(impl ToKey for $t {
            #[allow(clippy::cast_precision_loss)]
            fn to_key(self) -> f64 {
                self as f64
            }
        })*
    };
}

impl_to_key_lossless!(f64, f32, i8, i16, i32, u8, u16, u32);
impl_to_key_lossy!(i64, u64, i128, u128, isize, usize);

impl ToKey for KeyPoint {
    fn to_key(self) -> f64 {
        self.0
    }
}

/// A finite numeric coordinate at which a value is known.
///
/// `KeyPoint` can only be built from finite numbers, which is what makes it safe to order and
/// hash. `-0.0` and `0.0` are the same key.
#[derive(Debug, Clone, Copy)]
pub struct KeyPoint(f64);

impl KeyPoint {
    /// Validates `key` and wraps it.
    /// # Errors
    /// - If `key` is NaN or infinite
    pub fn new(key: impl ToKey) -> Result<Self, InterpolateError> {
        let key = key.to_key();
        if !key.is_finite() {
            return Err(InterpolateError::invalid_key(key));
        }
        // Fold negative zero into positive zero so both hash to the same key.
        Ok(Self(if key == 0.0 { 0.0 } else { key }))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for KeyPoint {
    type Error = InterpolateError;

    fn try_from(key: f64) -> Result<Self, Self::Error> {
        KeyPoint::new(key)
    }
}

/// Parses keys written as text, e.g. the member names of a JSON object.
impl FromStr for KeyPoint {
    type Err = InterpolateError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| InterpolateError::InvalidKey {
                key: raw.to_string(),
            })?;
        KeyPoint::new(key)
    }
}

impl From<KeyPoint> for f64 {
    fn from(key: KeyPoint) -> Self {
        key.0
    }
}

impl PartialEq for KeyPoint {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for KeyPoint {}

impl Hash for KeyPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for KeyPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KeyPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Display for KeyPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use std::collections::HashSet;

    use super::KeyPoint;
    use crate::error::InterpolateError;

    #[test]
    fn test_key_point_rejects_non_finite() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match KeyPoint::new(bad) {
                Err(InterpolateError::InvalidKey { key }) => assert_eq!(key, bad.to_string()),
                Err(ue) => panic!("Expected an invalid key error. Instead got {ue:?}"),
                Ok(k) => panic!("Expected an error. Instead got key {k}"),
            }
        }
    }

    #[test]
    fn test_key_point_accepts_integers() {
        let key = KeyPoint::new(7).unwrap();
        assert_eq!(key, KeyPoint::new(7.0).unwrap());
    }

    #[test]
    fn test_key_point_accepts_wide_integers() {
        assert_eq!(KeyPoint::new(7_i64).unwrap().value(), 7.0);
        assert_eq!(KeyPoint::new(7_u64).unwrap().value(), 7.0);
        assert_eq!(KeyPoint::new(7_usize).unwrap().value(), 7.0);
        assert_eq!(KeyPoint::new(-7_isize).unwrap().value(), -7.0);
        assert_eq!(KeyPoint::new(u64::MAX).unwrap().value(), 18_446_744_073_709_551_615.0);
    }

    #[test]
    fn test_key_point_from_str() {
        assert_eq!("10.5".parse::<KeyPoint>().unwrap().value(), 10.5);
        assert_eq!(" 3 ".parse::<KeyPoint>().unwrap().value(), 3.0);
    }

    #[test]
    fn test_key_point_from_str_not_a_number() {
        match "h".parse::<KeyPoint>() {
            Err(InterpolateError::InvalidKey { key }) => assert_eq!(key, "h"),
            Err(ue) => panic!("Expected an invalid key error. Instead got {ue:?}"),
            Ok(k) => panic!("Expected an error. Instead got key {k}"),
        }
        assert!(matches!(
            "inf".parse::<KeyPoint>(),
            Err(InterpolateError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_key_point_negative_zero_is_zero() {
        let mut keys = HashSet::new();
        keys.insert(KeyPoint::new(0.0).unwrap());
        keys.insert(KeyPoint::new(-0.0).unwrap());
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_key_point_ordering() {
        let mut keys: Vec<KeyPoint> = [3.5, -1.0, 0.0, 2.0]
            .into_iter()
            .map(|k| KeyPoint::new(k).unwrap())
            .collect();
        keys.sort();
        let keys: Vec<f64> = keys.into_iter().map(f64::from).collect();
        assert_eq!(keys, vec![-1.0, 0.0, 2.0, 3.5]);
    }
}
