//! The immutable view props snapshot and its resolvers.
//!
//! A [`ViewProps`] value is built by merging a raw override map over a
//! previous snapshot, then sealed and shared. While unsealed it belongs to
//! a single writer; once sealed it is immutable forever and any further
//! mutation attempt is a programming-error fault, not a recoverable
//! condition.
//!
//! Resolution against layout is deferred: the snapshot stores cascaded
//! declarations and resolves them to concrete geometry only when paired
//! with a frame, so the same snapshot can serve many layouts.

use serde::Serialize;
use strum_macros::{Display, EnumString};

use quokka_common::warning::warn_once;
use quokka_common::Seal;
use quokka_graphics::{
    Color, LayoutMetrics, Size, Transform, TransformOperation, TransformOrigin, ValueUnit,
};

use crate::border::{
    ensure_no_overlap, radii_to_points, BorderCurve, BorderMetrics, BorderStyle,
};
use crate::cascade::{CascadedCorners, CascadedEdges};
use crate::config::ResolverConfig;
use crate::raw::{self, RawProps};

/// Whether the back face of a transformed view is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BackfaceVisibility {
    /// Platform default.
    #[default]
    Auto,
    /// Always drawn.
    Visible,
    /// Culled when facing away.
    Hidden,
}

/// One view's complete styling state, as last committed.
///
/// Constructed unsealed, populated via [`ViewProps::from_raw`] or
/// [`ViewProps::apply_raw`], then sealed with [`ViewProps::seal`] before
/// being shared. Cloning any snapshot, sealed or not, yields a fresh
/// unsealed value; that is how the next revision starts from the previous
/// one.
#[derive(Debug, Clone, Serialize)]
pub struct ViewProps {
    /// Monotonically increasing per-view commit counter.
    pub revision: u64,

    /// Uniform opacity in `[0, 1]`; 1 is fully opaque.
    pub opacity: f32,
    /// Background fill; `None` draws nothing.
    pub background_color: Option<Color>,

    /// Cascaded border line widths, in points.
    pub border_widths: CascadedEdges<f32>,
    /// Cascaded border colors.
    pub border_colors: CascadedEdges<Color>,
    /// Cascaded border line styles.
    pub border_styles: CascadedEdges<BorderStyle>,
    /// Cascaded border corner curve families.
    pub border_curves: CascadedEdges<BorderCurve>,
    /// Cascaded corner radii, point- or percent-valued.
    pub border_radii: CascadedCorners<ValueUnit>,

    /// Drop shadow color; `None` disables the shadow.
    pub shadow_color: Option<Color>,
    /// Drop shadow offset from the view's frame, in points.
    pub shadow_offset: Size,
    /// Drop shadow opacity in `[0, 1]`.
    pub shadow_opacity: f32,
    /// Drop shadow blur radius, in points.
    pub shadow_radius: f32,

    /// Ordered transform operation list; empty means untransformed.
    pub transform: Vec<TransformOperation>,
    /// Transform pivot override; unset anchors at the frame center.
    pub transform_origin: TransformOrigin,

    /// Stacking order override among siblings.
    pub z_index: Option<i32>,
    /// Back-face culling policy for 3D-transformed views.
    pub backface_visibility: BackfaceVisibility,
    /// Opaque identifier handed through to testing infrastructure.
    pub test_id: Option<String>,

    #[serde(skip)]
    seal: Seal,
}

impl Default for ViewProps {
    fn default() -> Self {
        Self {
            revision: 0,
            opacity: 1.0,
            background_color: None,
            border_widths: CascadedEdges::default(),
            border_colors: CascadedEdges::default(),
            border_styles: CascadedEdges::default(),
            border_curves: CascadedEdges::default(),
            border_radii: CascadedCorners::default(),
            shadow_color: None,
            shadow_offset: Size::default(),
            shadow_opacity: 0.0,
            shadow_radius: 3.0,
            transform: Vec::new(),
            transform_origin: TransformOrigin::default(),
            z_index: None,
            backface_visibility: BackfaceVisibility::Auto,
            test_id: None,
            seal: Seal::new(),
        }
    }
}

impl ViewProps {
    /// Build the next snapshot by merging `raw` over `prev`.
    ///
    /// Properties absent from `raw` carry forward from `prev`; an explicit
    /// null resets a property to its default; an uncoercible value warns
    /// and also falls back to the default. The result is unsealed and one
    /// revision ahead of `prev`.
    #[must_use]
    pub fn from_raw(config: &ResolverConfig, prev: &Self, raw: &RawProps) -> Self {
        let mut next = prev.clone();
        next.revision = prev.revision + 1;
        next.apply_raw(config, raw);
        next
    }

    /// Merge a raw override map into this snapshot in place.
    ///
    /// # Panics
    ///
    /// Panics if the snapshot has been sealed.
    pub fn apply_raw(&mut self, config: &ResolverConfig, raw: &RawProps) {
        self.seal.ensure_unsealed();

        merge(&mut self.opacity, 1.0, raw.get("opacity"), |value| {
            raw::float_from("opacity", value)
        });
        merge(
            &mut self.background_color,
            None,
            raw.get("backgroundColor"),
            |value| raw::color_from("backgroundColor", value).map(Some),
        );

        self.border_widths =
            raw::cascaded_edges_from_raw(raw, &self.border_widths, "border", "Width", &raw::float_from);
        self.border_colors =
            raw::cascaded_edges_from_raw(raw, &self.border_colors, "border", "Color", &raw::color_from);
        self.border_styles = raw::cascaded_edges_from_raw(
            raw,
            &self.border_styles,
            "border",
            "Style",
            &raw::keyword_from::<BorderStyle>,
        );
        let decode_curve = |key: &str, value: &serde_json::Value| {
            raw::keyword_from::<BorderCurve>(key, value).map(|curve| {
                if config.supports_continuous_corners {
                    curve
                } else {
                    BorderCurve::Circular
                }
            })
        };
        self.border_curves =
            raw::cascaded_edges_from_raw(raw, &self.border_curves, "border", "Curve", &decode_curve);
        self.border_radii = raw::cascaded_corners_from_raw(
            raw,
            &self.border_radii,
            "border",
            "Radius",
            &raw::value_unit_from,
        );

        merge(&mut self.shadow_color, None, raw.get("shadowColor"), |value| {
            raw::color_from("shadowColor", value).map(Some)
        });
        merge(
            &mut self.shadow_offset,
            Size::default(),
            raw.get("shadowOffset"),
            |value| raw::size_from("shadowOffset", value),
        );
        merge(
            &mut self.shadow_opacity,
            0.0,
            raw.get("shadowOpacity"),
            |value| raw::float_from("shadowOpacity", value),
        );
        merge(
            &mut self.shadow_radius,
            3.0,
            raw.get("shadowRadius"),
            |value| raw::float_from("shadowRadius", value),
        );

        merge(&mut self.transform, Vec::new(), raw.get("transform"), |value| {
            raw::transform_from("transform", value)
        });
        merge(
            &mut self.transform_origin,
            TransformOrigin::default(),
            raw.get("transformOrigin"),
            |value| raw::transform_origin_from("transformOrigin", value),
        );

        merge(&mut self.z_index, None, raw.get("zIndex"), |value| {
            raw::int_from("zIndex", value).map(Some)
        });
        merge(
            &mut self.backface_visibility,
            BackfaceVisibility::Auto,
            raw.get("backfaceVisibility"),
            |value| raw::keyword_from("backfaceVisibility", value),
        );
        merge(&mut self.test_id, None, raw.get("testID"), |value| {
            raw::string_from("testID", value).map(Some)
        });

        if config.warn_on_unknown_props {
            for key in raw.keys() {
                if !is_known_view_prop(key) {
                    warn_once("props", &format!("ignoring unknown property '{key}'"));
                }
            }
        }
    }

    /// Freeze the snapshot. Idempotent.
    pub fn seal(&self) {
        self.seal.seal();
    }

    /// Whether the snapshot has been frozen.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.seal.is_sealed()
    }

    /// Resolve the cascaded border declarations against a final layout
    /// into render-ready [`BorderMetrics`].
    ///
    /// Pure with respect to the snapshot: callable before or after
    /// sealing, never mutates, and is idempotent for a given layout.
    #[must_use]
    pub fn resolve_border_metrics(&self, layout: &LayoutMetrics) -> BorderMetrics {
        let is_rtl = layout.direction.is_rtl();
        let size = layout.frame.size();

        let radii = radii_to_points(&self.border_radii, is_rtl, size);

        BorderMetrics {
            border_widths: self.border_widths.resolve(is_rtl, 0.0),
            border_colors: self.border_colors.resolve_optional(is_rtl),
            border_radii: ensure_no_overlap(radii, size),
            border_styles: self.border_styles.resolve(is_rtl, BorderStyle::Solid),
            border_curves: self.border_curves.resolve(is_rtl, BorderCurve::Circular),
        }
    }

    /// Resolve the transform operation list against a final layout into
    /// one composed matrix.
    #[must_use]
    pub fn resolve_transform(&self, layout: &LayoutMetrics) -> Transform {
        quokka_graphics::resolve_transform(
            &self.transform,
            &self.transform_origin,
            layout.frame.size(),
        )
    }
}

/// Merge one scalar property slot: absent keys keep the current value, an
/// explicit null resets to `default`, and decode failure (already warned
/// about) also falls back to `default`.
fn merge<T>(
    slot: &mut T,
    default: T,
    value: Option<&serde_json::Value>,
    decode: impl FnOnce(&serde_json::Value) -> Option<T>,
) {
    match value {
        None => {}
        Some(serde_json::Value::Null) => *slot = default,
        Some(value) => *slot = decode(value).unwrap_or(default),
    }
}

const KNOWN_PROPS: [&str; 11] = [
    "opacity",
    "backgroundColor",
    "shadowColor",
    "shadowOffset",
    "shadowOpacity",
    "shadowRadius",
    "transform",
    "transformOrigin",
    "zIndex",
    "backfaceVisibility",
    "testID",
];

/// Whether `key` names a property the view snapshot decodes.
///
/// Decoders for richer components layer their own names on top of this
/// set when deciding what to warn about.
#[must_use]
pub fn is_known_view_prop(key: &str) -> bool {
    if KNOWN_PROPS.contains(&key) {
        return true;
    }
    key.strip_prefix("border").is_some_and(|rest| {
        for suffix in ["Width", "Color", "Style", "Curve"] {
            if let Some(infix) = rest.strip_suffix(suffix) {
                return raw::EDGE_INFIXES.contains(&infix);
            }
        }
        rest.strip_suffix("Radius")
            .is_some_and(|infix| raw::CORNER_INFIXES.contains(&infix))
    })
}
