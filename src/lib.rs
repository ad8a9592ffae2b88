//! Generic piecewise-linear interpolation over numeric key points.
//!
//! A [`Points`] store maps finite numeric keys to values. Querying it at any point finds the two
//! keys around the point and blends their values, either with a blend strategy supplied by the
//! caller or, by default, by asking the lower value to [`Interpolatable::interpolate`] itself
//! towards the upper one. Points outside the keys are clamped to the first or last value.
//!
//! Numbers, fixed-shape (and nested) sequences of numbers, and the dynamic [`Value`] type can
//! interpolate themselves; any other type can join in by implementing [`Interpolatable`], or by
//! being paired with a blend strategy.

pub use blend::{BlendStrategy, BoxedBlendStrategy};
pub use error::InterpolateError;
pub use interpolatable::{Interpolatable, Value};
pub use key_point::{KeyPoint, ToKey};
pub use points::{Bracket, Points};

pub mod blend;
pub mod error;
pub mod interpolatable;
pub mod key_point;
pub mod points;
pub mod utils;
