pub mod curve_fitting;
pub use curve_fitting::{balance_ratio, lerp};
