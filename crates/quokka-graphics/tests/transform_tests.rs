//! Integration tests for transform composition and pivot handling.

use quokka_graphics::transform::{
    Transform, TransformOperation, TransformOrigin, resolve_transform,
};
use quokka_graphics::{Point, Size, ValueUnit};

fn assert_point_near(actual: Point, expected: (f32, f32)) {
    assert!(
        (actual.x - expected.0).abs() < 1e-3 && (actual.y - expected.1).abs() < 1e-3,
        "expected ({}, {}), got ({}, {})",
        expected.0,
        expected.1,
        actual.x,
        actual.y
    );
}

#[test]
fn test_zero_area_frame_short_circuits_to_identity() {
    let ops = vec![TransformOperation::RotateZ(std::f32::consts::PI)];
    let origin = TransformOrigin {
        xy: [ValueUnit::percent(0.0), ValueUnit::percent(0.0)],
        z: 0.0,
    };
    let result = resolve_transform(&ops, &origin, Size::new(0.0, 0.0));
    assert_eq!(result, Transform::IDENTITY);
}

#[test]
fn test_zero_width_only_does_not_short_circuit() {
    // Only a frame degenerate in *both* dimensions skips resolution.
    let ops = vec![TransformOperation::Translate {
        x: ValueUnit::point(5.0),
        y: ValueUnit::point(0.0),
        z: 0.0,
    }];
    let result = resolve_transform(&ops, &TransformOrigin::default(), Size::new(0.0, 50.0));
    assert_ne!(result, Transform::IDENTITY);
}

#[test]
fn test_single_raw_matrix_bypasses_composition() {
    let mut raw = Transform::IDENTITY;
    raw.matrix[12] = 42.0;
    let ops = vec![TransformOperation::Matrix(raw)];
    let result = resolve_transform(&ops, &TransformOrigin::default(), Size::new(100.0, 100.0));
    assert_eq!(result, raw);
}

#[test]
fn test_raw_matrix_in_longer_list_is_composed() {
    let mut raw = Transform::IDENTITY;
    raw.matrix[12] = 42.0;
    let ops = vec![
        TransformOperation::Matrix(raw),
        TransformOperation::Translate {
            x: ValueUnit::point(8.0),
            y: ValueUnit::point(0.0),
            z: 0.0,
        },
    ];
    let result = resolve_transform(&ops, &TransformOrigin::default(), Size::new(100.0, 100.0));
    let p = result.apply_to_point(Point::new(0.0, 0.0));
    assert_point_near(p, (50.0, 0.0));
}

#[test]
fn test_composition_order_matters() {
    let frame = Size::new(100.0, 100.0);
    let translate = TransformOperation::Translate {
        x: ValueUnit::point(10.0),
        y: ValueUnit::point(0.0),
        z: 0.0,
    };
    let scale = TransformOperation::Scale {
        x: 2.0,
        y: 1.0,
        z: 1.0,
    };

    let translate_then_scale = resolve_transform(
        &[translate, scale],
        &TransformOrigin::default(),
        frame,
    );
    let scale_then_translate = resolve_transform(
        &[scale, translate],
        &TransformOrigin::default(),
        frame,
    );

    // Both are computed, and they differ: matrix composition is not
    // commutative.
    assert_ne!(translate_then_scale, scale_then_translate);

    let p = Point::new(1.0, 1.0);
    assert_point_near(translate_then_scale.apply_to_point(p), (12.0, 1.0));
    assert_point_near(scale_then_translate.apply_to_point(p), (22.0, 1.0));
}

#[test]
fn test_top_left_pivot_differs_from_center_pivot() {
    let frame = Size::new(100.0, 100.0);
    let ops = vec![TransformOperation::RotateZ(std::f32::consts::PI)];

    // Default: no origin set, the renderer anchors at the center.
    let centered = resolve_transform(&ops, &TransformOrigin::default(), frame);

    // Explicit top-left origin (0%, 0%).
    let top_left = TransformOrigin {
        xy: [ValueUnit::percent(0.0), ValueUnit::percent(0.0)],
        z: 0.0,
    };
    let anchored = resolve_transform(&ops, &top_left, frame);

    let p = Point::new(10.0, 10.0);
    let centered_p = centered.apply_to_point(p);
    let anchored_p = anchored.apply_to_point(p);

    assert_point_near(centered_p, (-10.0, -10.0));
    // Conjugated by the (-50, -50) pivot offset.
    assert_point_near(anchored_p, (-110.0, -110.0));
    assert!(
        (centered_p.x - anchored_p.x).abs() > 1.0 || (centered_p.y - anchored_p.y).abs() > 1.0,
        "pivot must change the resulting position"
    );
}

#[test]
fn test_point_origin_overrides_single_axis() {
    // x pinned at 0pt, y unset (falls back to center): the pivot offset is
    // (-50, 0), so a 180° rotation maps (10, 10) to T(-50,0)·R·T(50,0)·p.
    let frame = Size::new(100.0, 100.0);
    let ops = vec![TransformOperation::RotateZ(std::f32::consts::PI)];
    let origin = TransformOrigin {
        xy: [ValueUnit::point(0.0), ValueUnit::UNSET],
        z: 0.0,
    };
    let result = resolve_transform(&ops, &origin, frame);
    let p = result.apply_to_point(Point::new(10.0, 10.0));
    assert_point_near(p, (-110.0, -10.0));
}

#[test]
fn test_empty_operation_list_is_identity() {
    let result = resolve_transform(&[], &TransformOrigin::default(), Size::new(50.0, 50.0));
    assert_eq!(result, Transform::IDENTITY);
}
