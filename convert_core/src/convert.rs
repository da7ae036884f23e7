//! # Conversion Engine
//!
//! Converts a value between two units of one category by going through the
//! category's base unit: `to.from_base(from.to_base(value))`.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::convert::convert;
//! use convert_core::units::lookup_category;
//!
//! let temperature = lookup_category("temperature").unwrap();
//! assert_eq!(convert(0.0, "c", "f", temperature), 32.0);
//!
//! // Unknown units give NaN, never a panic
//! assert!(convert(1.0, "c", "rankine", temperature).is_nan());
//! ```

use crate::errors::ConvertResult;
use crate::units::{Category, Unit};

/// Convert `value` from one unit to another within `category`.
///
/// Returns `f64::NAN` when either unit id is not part of the category.
pub fn convert(value: f64, from_id: &str, to_id: &str, category: &Category) -> f64 {
    match (category.lookup_unit(from_id), category.lookup_unit(to_id)) {
        (Some(from), Some(to)) => convert_between(value, from, to),
        _ => f64::NAN,
    }
}

/// Like [`convert`], but reports which unit id was not found.
pub fn try_convert(value: f64, from_id: &str, to_id: &str, category: &Category) -> ConvertResult<f64> {
    let from = category.find_unit(from_id)?;
    let to = category.find_unit(to_id)?;
    Ok(convert_between(value, from, to))
}

/// Convert between two already resolved units of the same category.
pub fn convert_between(value: f64, from: &Unit, to: &Unit) -> f64 {
    to.from_base(from.to_base(value))
}
