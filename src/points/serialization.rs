use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};

use crate::{error::InterpolateError, key_point::KeyPoint};

use super::Points;

/// Key points are written as a map from the key, as text, to the value; e.g. `{"0": 0, "10": 1}`
/// in JSON. The blend strategy is not serialized.
impl<V: Serialize> Serialize for Points<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.points.iter().map(|(key, value)| (key.to_string(), value)))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Points<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, V>::deserialize(deserializer)?;
        Points::from_text_keys(raw).map_err(serde::de::Error::custom)
    }
}

impl<V> Points<V> {
    fn from_text_keys(raw: IndexMap<String, V>) -> Result<Self, InterpolateError> {
        let points = raw
            .into_iter()
            .map(|(key, value)| key.parse::<KeyPoint>().map(|key| (key, value)))
            .collect::<Result<Vec<_>, InterpolateError>>()?;
        Points::new(points)
    }
}

impl<V: DeserializeOwned> Points<V> {
    /// Reads key points from a JSON object whose member names are the keys.
    /// # Errors
    /// - If `json` is not an object of values of type `V`
    /// - If a member name is not a finite number
    pub fn from_json_str(json: &str) -> Result<Self, InterpolateError> {
        let raw: IndexMap<String, V> = serde_json::from_str(json)?;
        Points::from_text_keys(raw)
    }
}
