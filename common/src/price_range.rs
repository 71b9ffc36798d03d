//! Price range filters and the `<min>:<max>` selection encoding.

use serde::{Deserialize, Serialize};

use crate::filter_const::PRICE_SEPARATOR;


/// Both bounds optional; an absent bound leaves that side unconstrained.
/// `min > max` is representable and is passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PriceBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PriceRange {
    pub price: PriceBounds,
}

impl PriceBounds {
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Parses `<min>:<max>`. Missing, empty or non-numeric sides stay unset.
    pub fn from_selection_value(value: &str) -> Self {
        let mut parts = value.split(PRICE_SEPARATOR);
        let min = parts.next().and_then(parse_price_bound);
        let max = parts.next().and_then(parse_price_bound);
        Self { min, max }
    }

    pub fn to_selection_value(&self) -> String {
        format!("{}{}{}", format_price_bound(self.min), PRICE_SEPARATOR, format_price_bound(self.max))
    }

    /// Bounds set in `other` replace the ones here.
    pub fn overlay(self, other: PriceBounds) -> Self {
        Self { min: other.min.or(self.min), max: other.max.or(self.max) }
    }
}

/// Non-finite results (NaN, infinities) count as an unset bound.
pub fn parse_price_bound(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn format_price_bound(bound: Option<f64>) -> String {
    match bound {
        Some(v) if v.is_finite() => v.to_string(),
        _ => String::new(),
    }
}
