//! End-to-end cascade tests: raw property maps through snapshot building
//! to resolved per-edge geometry.

use serde_json::json;

use quokka_graphics::{LayoutDirection, LayoutMetrics, Rect};
use quokka_style::{ResolverConfig, ViewProps};

fn raw_of(entries: &[(&str, serde_json::Value)]) -> quokka_style::RawProps {
    let mut raw = quokka_style::RawProps::new();
    for (key, value) in entries {
        let _ = raw.insert((*key).to_string(), value.clone());
    }
    raw
}

fn layout(direction: LayoutDirection) -> LayoutMetrics {
    LayoutMetrics {
        frame: Rect {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
        },
        direction,
        point_scale_factor: 1.0,
    }
}

#[test]
fn test_specificity_ladder_for_widths() {
    let props = ViewProps::from_raw(
        &ResolverConfig::default(),
        &ViewProps::default(),
        &raw_of(&[
            ("borderWidth", json!(1)),
            ("borderHorizontalWidth", json!(2)),
            ("borderLeftWidth", json!(3)),
        ]),
    );
    let metrics = props.resolve_border_metrics(&layout(LayoutDirection::LeftToRight));

    // Physical beats everything; the horizontal axis key covers top and
    // bottom; the untouched right edge falls through to the generic key.
    assert!((metrics.border_widths.left - 3.0).abs() < 1e-6);
    assert!((metrics.border_widths.top - 2.0).abs() < 1e-6);
    assert!((metrics.border_widths.bottom - 2.0).abs() < 1e-6);
    assert!((metrics.border_widths.right - 1.0).abs() < 1e-6);
}

#[test]
fn test_logical_keys_flip_with_direction() {
    let props = ViewProps::from_raw(
        &ResolverConfig::default(),
        &ViewProps::default(),
        &raw_of(&[("borderStartWidth", json!(4))]),
    );

    let ltr = props.resolve_border_metrics(&layout(LayoutDirection::LeftToRight));
    assert!((ltr.border_widths.left - 4.0).abs() < 1e-6);
    assert!((ltr.border_widths.right - 0.0).abs() < 1e-6);

    let rtl = props.resolve_border_metrics(&layout(LayoutDirection::RightToLeft));
    assert!((rtl.border_widths.right - 4.0).abs() < 1e-6);
    assert!((rtl.border_widths.left - 0.0).abs() < 1e-6);
}

#[test]
fn test_undeclared_colors_resolve_to_none() {
    let props = ViewProps::from_raw(
        &ResolverConfig::default(),
        &ViewProps::default(),
        &raw_of(&[("borderLeftColor", json!("#ff0000"))]),
    );
    let metrics = props.resolve_border_metrics(&layout(LayoutDirection::LeftToRight));

    assert!(metrics.border_colors.left.is_some());
    assert_eq!(metrics.border_colors.top, None);
    assert_eq!(metrics.border_colors.right, None);
    assert_eq!(metrics.border_colors.bottom, None);
}

#[test]
fn test_resolution_is_idempotent_across_calls() {
    let props = ViewProps::from_raw(
        &ResolverConfig::default(),
        &ViewProps::default(),
        &raw_of(&[
            ("borderWidth", json!(2)),
            ("borderRadius", json!("50%")),
        ]),
    );
    let frame = layout(LayoutDirection::LeftToRight);

    let first = props.resolve_border_metrics(&frame);
    let second = props.resolve_border_metrics(&frame);
    assert_eq!(first, second);
}
