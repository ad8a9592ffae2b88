#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::InterpolateError, utils::lerp};

use super::Interpolatable;

/// A dynamically shaped value: a number, a (possibly nested) sequence of values, or text.
///
/// Numbers and sequences blend themselves; text does not, so blending it with the default strategy
/// fails with [`InterpolateError::NotInterpolatable`]. Stores of text values need a blend strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Value {
    Number(f64),
    Sequence(Vec<Value>),
    Text(String),
}

impl Value {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(values) => Some(values),
            _ => None,
        }
    }

    fn describe_shape(&self) -> String {
        match self {
            Value::Number(_) => "a number".to_string(),
            Value::Sequence(values) => format!("a sequence of length {}", values.len()),
            Value::Text(_) => "text".to_string(),
        }
    }
}

impl Interpolatable for Value {
    fn interpolate(&self, other: &Self, balance: f64) -> Result<Self, InterpolateError> {
        match (self, other) {
            (Value::Text(_), _) => Err(InterpolateError::NotInterpolatable {
                value: format!("{self:?}"),
            }),
            (_, Value::Text(_)) => Err(InterpolateError::NotInterpolatable {
                value: format!("{other:?}"),
            }),
            (Value::Number(low), Value::Number(high)) => {
                Ok(Value::Number(lerp(*low, *high, balance)))
            }
            (Value::Sequence(low), Value::Sequence(high)) => {
                Ok(Value::Sequence(low.interpolate(high, balance)?))
            }
            _ => Err(InterpolateError::ShapeMismatch {
                expected: self.describe_shape(),
                found: other.describe_shape(),
            }),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Sequence(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use crate::{error::InterpolateError, interpolatable::Interpolatable};

    use super::Value;

    #[test]
    fn test_number_interpolate_from_integers() {
        let low = Value::from(0);
        let high = Value::from(1);
        assert_eq!(low.interpolate(&high, 0.5).unwrap(), Value::Number(0.5));
    }

    #[test]
    fn test_sequence_interpolate() {
        let low = Value::from(vec![1, 10, 100]);
        let high = Value::from(vec![5, 50, 500]);
        assert_eq!(
            low.interpolate(&high, 0.5).unwrap(),
            Value::from(vec![3.0, 30.0, 300.0])
        );
    }

    #[test]
    fn test_nested_sequence_interpolate() {
        let low = Value::from(vec![vec![0, 0], vec![10, 10]]);
        let high = Value::from(vec![vec![10, 20], vec![20, 30]]);
        assert_eq!(
            low.interpolate(&high, 0.5).unwrap(),
            Value::from(vec![vec![5.0, 10.0], vec![15.0, 20.0]])
        );
    }

    #[test]
    fn test_number_and_sequence_mismatch() {
        let low = Value::from(1);
        let high = Value::from(vec![1, 2]);
        match low.interpolate(&high, 0.5) {
            Err(InterpolateError::ShapeMismatch { expected, found }) => {
                assert_eq!(expected, "a number");
                assert_eq!(found, "a sequence of length 2");
            }
            Err(ue) => panic!("Expected a shape mismatch error. Instead got {ue:?}"),
            Ok(v) => panic!("Expected an error. Instead got {v:?}"),
        }
    }

    #[test]
    fn test_nested_shape_mismatch() {
        let low = Value::from(vec![vec![0, 0], vec![10, 10]]);
        let high = Value::from(vec![vec![10, 20], vec![20]]);
        assert!(matches!(
            low.interpolate(&high, 0.5),
            Err(InterpolateError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_sequence() {
        let low = Value::Sequence(vec![]);
        let high = Value::Sequence(vec![]);
        assert!(matches!(
            low.interpolate(&high, 0.5),
            Err(InterpolateError::EmptyOperand)
        ));
    }

    #[test]
    fn test_text_is_not_interpolatable() {
        let low = Value::from("low");
        let high = Value::from("high");
        match low.interpolate(&high, 0.5) {
            Err(InterpolateError::NotInterpolatable { value }) => {
                assert_eq!(value, "Text(\"low\")");
            }
            Err(ue) => panic!("Expected a not interpolatable error. Instead got {ue:?}"),
            Ok(v) => panic!("Expected an error. Instead got {v:?}"),
        }
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(2).as_f64(), Some(2.0));
        assert_eq!(Value::from("a").as_f64(), None);
        assert_eq!(Value::from(vec![1]).as_sequence().map(<[Value]>::len), Some(1));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_value_from_json() {
        let value: Value = serde_json::from_str("[1, [2.5, 3], \"red\"]").unwrap();
        assert_eq!(
            value,
            Value::Sequence(vec![
                Value::Number(1.0),
                Value::Sequence(vec![Value::Number(2.5), Value::Number(3.0)]),
                Value::Text("red".to_string()),
            ])
        );
    }
}
