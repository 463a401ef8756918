//! Length values expressed in points or percentages.
//!
//! [CSS Values and Units Level 4 § 4.3](https://www.w3.org/TR/css-values-4/#percentages)
//! "Percentages are always relative to another quantity, for example a length."
//!
//! The resolver receives lengths that are either absolute (device-independent
//! points) or relative (a percentage of some reference dimension such as the
//! frame width). A [`ValueUnit`] carries the raw number plus its unit; the
//! unit decides how the number resolves against a reference.

use serde::Serialize;

/// The unit a [`ValueUnit`]'s number is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum UnitType {
    /// No value was supplied. The unresolved/unset state carried forward
    /// until a caller substitutes a fallback.
    #[default]
    Undefined,
    /// An absolute length in device-independent points.
    Point,
    /// A percentage of a reference dimension.
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    Percent,
}

/// A length that may be absolute or relative to a reference dimension.
///
/// Resolution is a pure function with no failure cases: malformed units are
/// rejected by the raw-property decoding layer before a `ValueUnit` is ever
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct ValueUnit {
    /// The raw number (points, or percent of the reference).
    pub value: f32,
    /// How [`value`](Self::value) resolves against a reference dimension.
    pub unit: UnitType,
}

impl ValueUnit {
    /// The unset value: resolves to 0 (or to an explicit caller fallback via
    /// [`resolve_or`](Self::resolve_or)).
    pub const UNSET: Self = Self {
        value: 0.0,
        unit: UnitType::Undefined,
    };

    /// An absolute length in points.
    #[must_use]
    pub const fn point(value: f32) -> Self {
        Self {
            value,
            unit: UnitType::Point,
        }
    }

    /// A percentage of whatever reference dimension the call site supplies.
    #[must_use]
    pub const fn percent(value: f32) -> Self {
        Self {
            value,
            unit: UnitType::Percent,
        }
    }

    /// Whether an actual value was supplied.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        !matches!(self.unit, UnitType::Undefined)
    }

    /// Resolve to a concrete scalar against `reference`.
    ///
    /// - `Point` → the value unchanged (reference ignored)
    /// - `Percent` → `reference * value / 100`
    /// - `Undefined` → 0
    #[must_use]
    pub fn resolve(&self, reference: f32) -> f32 {
        match self.unit {
            UnitType::Point => self.value,
            UnitType::Percent => reference * self.value / 100.0,
            UnitType::Undefined => 0.0,
        }
    }

    /// Resolve against `reference`, substituting `fallback` when unset.
    #[must_use]
    pub fn resolve_or(&self, reference: f32, fallback: f32) -> f32 {
        if self.is_set() {
            self.resolve(reference)
        } else {
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_ignores_reference() {
        assert!((ValueUnit::point(12.0).resolve(480.0) - 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_percent_resolves_against_reference() {
        assert!((ValueUnit::percent(50.0).resolve(200.0) - 100.0).abs() < f32::EPSILON);
        assert!((ValueUnit::percent(25.0).resolve(40.0) - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_unset_resolves_to_zero_or_fallback() {
        assert!(ValueUnit::UNSET.resolve(300.0).abs() < f32::EPSILON);
        assert!((ValueUnit::UNSET.resolve_or(300.0, 7.5) - 7.5).abs() < f32::EPSILON);
        assert!(!ValueUnit::UNSET.is_set());
    }

    #[test]
    fn test_set_value_wins_over_fallback() {
        assert!((ValueUnit::percent(10.0).resolve_or(50.0, 99.0) - 5.0).abs() < f32::EPSILON);
    }
}
