//! Border geometry: styles, curves, radii, and the resolved metrics record.
//!
//! [CSS Backgrounds and Borders Level 3 § 4](https://www.w3.org/TR/css-backgrounds-3/#borders)
//!
//! The border geometry resolver combines the cascaded widths, colors,
//! styles, curves, and radii with the element's final frame into one
//! immutable [`BorderMetrics`] record. Radii go through two passes: unit
//! resolution (percentages against the frame) and corner-overlap
//! correction.

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::cascade::CascadedCorners;
use quokka_graphics::{Color, EdgeInsets, RectangleCorners, RectangleEdges, Size, ValueUnit};

/// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
/// How an edge's border line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BorderStyle {
    /// A single solid line.
    #[default]
    Solid,
    /// A series of round dots.
    Dotted,
    /// A series of square-ended dashes.
    Dashed,
}

/// The curve family used to round a corner.
///
/// `Continuous` requests the platform's smoothed ("squircle") corner shape
/// where available; platforms without it fall back to circular arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BorderCurve {
    /// A circular arc, the default.
    #[default]
    Circular,
    /// A continuous (superellipse-like) curve.
    Continuous,
}

/// One corner's rounding, split per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct CornerRadii {
    /// Radius along the horizontal edge, in points.
    pub horizontal: f32,
    /// Radius along the vertical edge, in points.
    pub vertical: f32,
}

impl CornerRadii {
    /// Scale both components by `factor`.
    #[must_use]
    pub const fn scaled(self, factor: f32) -> Self {
        Self {
            horizontal: self.horizontal * factor,
            vertical: self.vertical * factor,
        }
    }
}

/// Fully-resolved corner radii for all four corners.
pub type BorderRadii = RectangleCorners<CornerRadii>;

/// The render-ready border geometry for one (snapshot, frame) pair.
///
/// Immutable once produced; the resolver builds a fresh value each call
/// and never mutates its inputs, so recomputation is idempotent and the
/// result is safe to cache on an identity key of (cascaded inputs, frame
/// size, direction).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BorderMetrics {
    /// Border line width per physical edge, in points.
    pub border_widths: RectangleEdges<f32>,
    /// Border color per physical edge; `None` means "no color declared".
    pub border_colors: RectangleEdges<Option<Color>>,
    /// Overlap-corrected corner radii.
    pub border_radii: BorderRadii,
    /// Border line style per physical edge.
    pub border_styles: RectangleEdges<BorderStyle>,
    /// Corner curve family per physical edge.
    pub border_curves: RectangleEdges<BorderCurve>,
}

/// Resolve the cascaded radius declarations to point values against the
/// frame: a corner's horizontal component resolves against the frame
/// width, its vertical component against the frame height.
#[must_use]
pub fn radii_to_points(
    radii: &CascadedCorners<ValueUnit>,
    is_rtl: bool,
    size: Size,
) -> BorderRadii {
    let resolved = radii.resolve(is_rtl, ValueUnit::point(0.0));
    let corner = |value: ValueUnit| CornerRadii {
        horizontal: value.resolve(size.width),
        vertical: value.resolve(size.height),
    };
    RectangleCorners {
        top_left: corner(resolved.top_left),
        top_right: corner(resolved.top_right),
        bottom_left: corner(resolved.bottom_left),
        bottom_right: corner(resolved.bottom_right),
    }
}

/// Proportionally shrink corner radii until no two adjacent corners
/// overlap along any shared edge.
///
/// [§ 5.5 Overlapping Curves](https://www.w3.org/TR/css-backgrounds-3/#corner-overlap)
/// "When the sum of any two adjacent border radii exceeds the size of the
/// border box, UAs must proportionally reduce the used values of all
/// border radii until none of them overlap."
///
/// Already-corrected radii are a fixed point: every edge sum is within its
/// dimension, so every clamp scale is 1 (or 0 for zero sums, which scale
/// zero radii) and the radii pass through unchanged.
#[must_use]
pub fn ensure_no_overlap(radii: BorderRadii, size: Size) -> BorderRadii {
    // Sum of adjacent corner radii along each edge: horizontal components
    // for the left/right sums, vertical components for top/bottom.
    let insets = EdgeInsets {
        left: radii.top_left.horizontal + radii.bottom_left.horizontal,
        top: radii.top_left.vertical + radii.top_right.vertical,
        right: radii.top_right.horizontal + radii.bottom_right.horizontal,
        bottom: radii.bottom_left.vertical + radii.bottom_right.vertical,
    };

    // Clamp scale per edge: left/right sums compete for the frame height,
    // top/bottom sums for the frame width. Zero-division guarded.
    let insets_scale = EdgeInsets {
        left: if insets.left > 0.0 {
            (size.height / insets.left).min(1.0)
        } else {
            0.0
        },
        top: if insets.top > 0.0 {
            (size.width / insets.top).min(1.0)
        } else {
            0.0
        },
        right: if insets.right > 0.0 {
            (size.height / insets.right).min(1.0)
        } else {
            0.0
        },
        bottom: if insets.bottom > 0.0 {
            (size.width / insets.bottom).min(1.0)
        } else {
            0.0
        },
    };

    BorderRadii {
        top_left: radii.top_left.scaled(insets_scale.top.min(insets_scale.left)),
        top_right: radii
            .top_right
            .scaled(insets_scale.top.min(insets_scale.right)),
        bottom_left: radii
            .bottom_left
            .scaled(insets_scale.bottom.min(insets_scale.left)),
        bottom_right: radii
            .bottom_right
            .scaled(insets_scale.bottom.min(insets_scale.right)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_style_keywords_round_trip() {
        assert_eq!("dashed".parse::<BorderStyle>().unwrap(), BorderStyle::Dashed);
        assert_eq!("DOTTED".parse::<BorderStyle>().unwrap(), BorderStyle::Dotted);
        assert_eq!(BorderStyle::Solid.to_string(), "solid");
        assert!("wavy".parse::<BorderStyle>().is_err());
    }

    #[test]
    fn test_border_curve_keywords() {
        assert_eq!(
            "continuous".parse::<BorderCurve>().unwrap(),
            BorderCurve::Continuous
        );
        assert_eq!(BorderCurve::Circular.to_string(), "circular");
    }

    #[test]
    fn test_percent_radii_resolve_per_axis() {
        let radii = CascadedCorners {
            all: Some(ValueUnit::percent(50.0)),
            ..CascadedCorners::default()
        };
        let resolved = radii_to_points(&radii, false, Size::new(200.0, 100.0));
        assert!((resolved.top_left.horizontal - 100.0).abs() < 1e-5);
        assert!((resolved.top_left.vertical - 50.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_radii_survive_zero_size() {
        let corrected = ensure_no_overlap(BorderRadii::default(), Size::new(0.0, 0.0));
        assert_eq!(corrected, BorderRadii::default());
    }
}
