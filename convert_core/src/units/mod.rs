//! # Units and Categories
//!
//! Every unit converts through the single base unit of its category, so a
//! unit only needs a to-base and a from-base formula. Adding a unit to a
//! category is a local change; no pairwise table has to be updated.
//!
//! ## Formulas
//!
//! | Variant   | to base                          | from base                          |
//! |-----------|----------------------------------|------------------------------------|
//! | `Scale`   | `v * f`                          | `b / f`                            |
//! | `Ratio`   | `v / r`                          | `b * r`                            |
//! | `Affine`  | `(v - offset) * num / den`       | `b * den / num + offset`           |
//!
//! `Ratio` is for units quoted "per base unit" (100 cm per metre, 25300 VND
//! per USD). Only temperature uses `Affine`.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::units::Formula;
//!
//! let fahrenheit = Formula::Affine { offset: 32.0, numerator: 5.0, denominator: 9.0 };
//! assert_eq!(fahrenheit.to_base(212.0), 100.0);
//! assert_eq!(fahrenheit.from_base(0.0), 32.0);
//! ```

pub mod registry;
mod tables;

pub use registry::{
    default_category, find_category, list_categories, lookup_category, Registry, REGISTRY,
};
pub use tables::CURRENCY_RATES;

use serde::Serialize;

use crate::errors::{ConvertError, ConvertResult};

/// Note shown for categories that do not carry their own.
pub const DEFAULT_NOTE: &str = "Convert freely between any units in this category.";

// ============================================================================
// Formula
// ============================================================================

/// Conversion between a unit and its category's base unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Formula {
    /// One unit is `factor` base units
    Scale { factor: f64 },
    /// One base unit is `rate` units
    Ratio { rate: f64 },
    /// Offset then scale, e.g. Fahrenheit to Celsius
    Affine {
        offset: f64,
        numerator: f64,
        denominator: f64,
    },
}

impl Formula {
    /// The base unit itself
    pub const IDENTITY: Formula = Formula::Scale { factor: 1.0 };

    /// Convert a value in this unit to the base unit
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            Formula::Scale { factor } => value * factor,
            Formula::Ratio { rate } => value / rate,
            Formula::Affine {
                offset,
                numerator,
                denominator,
            } => (value - offset) * numerator / denominator,
        }
    }

    /// Convert a base-unit value to this unit
    pub fn from_base(self, base: f64) -> f64 {
        match self {
            Formula::Scale { factor } => base / factor,
            Formula::Ratio { rate } => base * rate,
            Formula::Affine {
                offset,
                numerator,
                denominator,
            } => base * denominator / numerator + offset,
        }
    }

    /// True when the conversion is a pure multiplication (no offset)
    pub fn is_linear(self) -> bool {
        !matches!(self, Formula::Affine { .. })
    }
}

// ============================================================================
// Unit
// ============================================================================

/// A unit within a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// Identifier, unique within its category (e.g. "km")
    pub id: &'static str,
    /// Display label (e.g. "Kilometre (km)")
    pub label: &'static str,
    /// Conversion to and from the category's base unit
    pub formula: Formula,
    /// Optional usage hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl Unit {
    /// The category's base unit
    pub const fn base(id: &'static str, label: &'static str) -> Self {
        Unit {
            id,
            label,
            formula: Formula::IDENTITY,
            hint: None,
        }
    }

    /// A unit worth `factor` base units
    pub const fn scaled(id: &'static str, label: &'static str, factor: f64) -> Self {
        Unit {
            id,
            label,
            formula: Formula::Scale { factor },
            hint: None,
        }
    }

    /// A unit quoted as `rate` per base unit
    pub const fn ratio(id: &'static str, label: &'static str, rate: f64) -> Self {
        Unit {
            id,
            label,
            formula: Formula::Ratio { rate },
            hint: None,
        }
    }

    /// An affine unit: `base = (value - offset) * numerator / denominator`
    pub const fn affine(
        id: &'static str,
        label: &'static str,
        offset: f64,
        numerator: f64,
        denominator: f64,
    ) -> Self {
        Unit {
            id,
            label,
            formula: Formula::Affine {
                offset,
                numerator,
                denominator,
            },
            hint: None,
        }
    }

    /// Attach a usage hint
    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn to_base(&self, value: f64) -> f64 {
        self.formula.to_base(value)
    }

    pub fn from_base(&self, base: f64) -> f64 {
        self.formula.from_base(base)
    }
}

// ============================================================================
// Category
// ============================================================================

/// A named group of mutually convertible units.
///
/// The first unit is the base unit and the default "from" unit; the second is
/// the default "to" unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    /// Accent colour token, only meaningful to a renderer
    pub accent: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    pub units: Vec<Unit>,
}

impl Category {
    /// Find a unit by id
    pub fn lookup_unit(&self, unit_id: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == unit_id)
    }

    /// Find a unit by id, as a typed error when absent
    pub fn find_unit(&self, unit_id: &str) -> ConvertResult<&Unit> {
        self.lookup_unit(unit_id)
            .ok_or_else(|| ConvertError::unit_not_found(self.id, unit_id))
    }

    pub fn contains(&self, unit_id: &str) -> bool {
        self.lookup_unit(unit_id).is_some()
    }

    /// Default "from" unit (the first unit), `None` for an empty category
    pub fn default_from(&self) -> Option<&Unit> {
        self.units.first()
    }

    /// Default "to" unit (the second unit, or the first if there is only one)
    pub fn default_to(&self) -> Option<&Unit> {
        self.units.get(1).or_else(|| self.units.first())
    }

    /// The category note, or the generic one
    pub fn note_or_default(&self) -> &'static str {
        self.note.unwrap_or(DEFAULT_NOTE)
    }

    pub fn unit_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.iter().map(|unit| unit.id)
    }
}
