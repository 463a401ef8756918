//! Decoding of loosely-typed raw property maps.
//!
//! The host's parsing layer delivers props as an unordered map from string
//! names to untyped JSON-shaped values. This module coerces those values
//! into the resolver's typed forms. Coercion never fails outward: a value
//! of the wrong shape produces a deduplicated warning and the caller falls
//! back to the property's default, so the resolver tolerates any input.

use serde_json::Value;

use quokka_common::RawValueError;
use quokka_common::warning::warn_once;
use quokka_graphics::{Color, Size, Transform, TransformOperation, TransformOrigin, ValueUnit};

use crate::cascade::{CascadedCorners, CascadedEdges};

/// An unordered map from property names to loosely-typed values.
pub type RawProps = serde_json::Map<String, Value>;

/// Key infixes for the edge-keyed property families, lowest specificity
/// first. The empty infix is the generic "all edges" key
/// (e.g. `borderWidth`).
pub const EDGE_INFIXES: [&str; 9] = [
    "",
    "Horizontal",
    "Vertical",
    "Start",
    "End",
    "Left",
    "Top",
    "Right",
    "Bottom",
];

/// Key infixes for the corner-keyed property families, lowest specificity
/// first. The empty infix is the generic "all corners" key
/// (e.g. `borderRadius`).
pub const CORNER_INFIXES: [&str; 9] = [
    "",
    "TopStart",
    "TopEnd",
    "BottomStart",
    "BottomEnd",
    "TopLeft",
    "TopRight",
    "BottomLeft",
    "BottomRight",
];

/// Human-readable JSON-level type of a raw value, for diagnostics.
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn warn(error: &RawValueError) {
    warn_once("props", &error.to_string());
}

fn mismatch(key: &str, expected: &'static str, value: &Value) -> RawValueError {
    RawValueError::TypeMismatch {
        key: key.to_string(),
        expected,
        actual: value_kind(value),
    }
}

fn unrecognized(key: &str, value: &str) -> RawValueError {
    RawValueError::Unrecognized {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Coerce a raw value to a float. Warns and returns `None` on mismatch.
#[must_use]
#[allow(clippy::cast_possible_truncation, reason = "narrowing from the wire f64 is intended")]
pub fn float_from(key: &str, value: &Value) -> Option<f32> {
    if let Some(number) = value.as_f64() {
        Some(number as f32)
    } else {
        warn(&mismatch(key, "a number", value));
        None
    }
}

/// Coerce a raw value to a signed integer. Warns and returns `None` on
/// mismatch.
#[must_use]
#[allow(clippy::cast_possible_truncation, reason = "narrowing from the wire i64 is intended")]
pub fn int_from(key: &str, value: &Value) -> Option<i32> {
    if let Some(number) = value.as_i64() {
        Some(number as i32)
    } else {
        warn(&mismatch(key, "an integer", value));
        None
    }
}

/// Coerce a raw value to a string. Warns and returns `None` on mismatch.
#[must_use]
pub fn string_from(key: &str, value: &Value) -> Option<String> {
    if let Some(text) = value.as_str() {
        Some(text.to_string())
    } else {
        warn(&mismatch(key, "a string", value));
        None
    }
}

/// Coerce a raw value to a size: an object with numeric `width` and
/// `height` members. Missing or uncoercible members default to zero.
#[must_use]
pub fn size_from(key: &str, value: &Value) -> Option<Size> {
    let Some(object) = value.as_object() else {
        warn(&mismatch(key, "an object with 'width' and 'height'", value));
        return None;
    };
    let component = |name: &str| {
        object
            .get(name)
            .and_then(|member| float_from(key, member))
            .unwrap_or(0.0)
    };
    Some(Size {
        width: component("width"),
        height: component("height"),
    })
}

/// Coerce a raw value to a color: either a packed `0xAARRGGBB` integer
/// (the preprocessed wire form) or a hex string.
#[must_use]
pub fn color_from(key: &str, value: &Value) -> Option<Color> {
    match value {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "packed colors occupy the low 32 bits"
        )]
        Value::Number(_) => value.as_i64().map(|packed| Color::from_argb(packed as u32)),
        Value::String(text) => {
            let color = Color::from_hex(text);
            if color.is_none() {
                warn(&unrecognized(key, text));
            }
            color
        }
        _ => {
            warn(&mismatch(key, "a color (number or hex string)", value));
            None
        }
    }
}

/// Coerce a raw value to a [`ValueUnit`]: a bare number is an absolute
/// point value; a string ending in `%` is a percentage.
#[must_use]
pub fn value_unit_from(key: &str, value: &Value) -> Option<ValueUnit> {
    match value {
        Value::Number(_) => float_from(key, value).map(ValueUnit::point),
        Value::String(text) => {
            let trimmed = text.trim();
            if let Some(percent) = trimmed.strip_suffix('%') {
                if let Ok(number) = percent.trim().parse::<f32>() {
                    return Some(ValueUnit::percent(number));
                }
            } else if let Ok(number) = trimmed.parse::<f32>() {
                return Some(ValueUnit::point(number));
            }
            warn(&unrecognized(key, text));
            None
        }
        _ => {
            warn(&mismatch(key, "a number or percentage string", value));
            None
        }
    }
}

/// Coerce a raw value to an angle in radians: strings carry an explicit
/// `deg`/`rad` suffix; bare numbers are already radians.
#[must_use]
pub fn angle_from(key: &str, value: &Value) -> Option<f32> {
    match value {
        Value::Number(_) => float_from(key, value),
        Value::String(text) => {
            let trimmed = text.trim();
            if let Some(degrees) = trimmed.strip_suffix("deg") {
                if let Ok(number) = degrees.trim().parse::<f32>() {
                    return Some(number.to_radians());
                }
            } else if let Some(radians) = trimmed.strip_suffix("rad") {
                if let Ok(number) = radians.trim().parse::<f32>() {
                    return Some(number);
                }
            }
            warn(&unrecognized(key, text));
            None
        }
        _ => {
            warn(&mismatch(key, "an angle (number or 'deg'/'rad' string)", value));
            None
        }
    }
}

/// Coerce a raw keyword string to an enum via its `FromStr` impl.
#[must_use]
pub fn keyword_from<T: std::str::FromStr>(key: &str, value: &Value) -> Option<T> {
    let Some(text) = value.as_str() else {
        warn(&mismatch(key, "a keyword string", value));
        return None;
    };
    let parsed = text.parse::<T>().ok();
    if parsed.is_none() {
        warn(&unrecognized(key, text));
    }
    parsed
}

/// Decode the transform operation list: an array of single-key objects
/// such as `[{"rotateZ": "45deg"}, {"translateX": "50%"}]`.
///
/// Unrecognized operations are warned about and skipped; the rest of the
/// list still applies.
#[must_use]
pub fn transform_from(key: &str, value: &Value) -> Option<Vec<TransformOperation>> {
    let Some(entries) = value.as_array() else {
        warn(&mismatch(key, "an array of transform operations", value));
        return None;
    };

    let mut operations = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(object) = entry.as_object() else {
            warn(&mismatch(key, "a single-key transform object", entry));
            continue;
        };
        let Some((name, operand)) = object.iter().next() else {
            continue;
        };
        if let Some(operation) = operation_from(name, operand) {
            operations.push(operation);
        }
    }
    Some(operations)
}

fn operation_from(name: &str, operand: &Value) -> Option<TransformOperation> {
    match name {
        "perspective" => float_from(name, operand).map(TransformOperation::Perspective),
        "rotate" | "rotateZ" => angle_from(name, operand).map(TransformOperation::RotateZ),
        "rotateX" => angle_from(name, operand).map(TransformOperation::RotateX),
        "rotateY" => angle_from(name, operand).map(TransformOperation::RotateY),
        "scale" => float_from(name, operand).map(|factor| TransformOperation::Scale {
            x: factor,
            y: factor,
            z: 1.0,
        }),
        "scaleX" => float_from(name, operand).map(|factor| TransformOperation::Scale {
            x: factor,
            y: 1.0,
            z: 1.0,
        }),
        "scaleY" => float_from(name, operand).map(|factor| TransformOperation::Scale {
            x: 1.0,
            y: factor,
            z: 1.0,
        }),
        "translate" => {
            let components = operand.as_array()?;
            let x = components
                .first()
                .and_then(|component| value_unit_from(name, component))
                .unwrap_or(ValueUnit::UNSET);
            let y = components
                .get(1)
                .and_then(|component| value_unit_from(name, component))
                .unwrap_or(ValueUnit::UNSET);
            let z = components
                .get(2)
                .and_then(|component| float_from(name, component))
                .unwrap_or(0.0);
            Some(TransformOperation::Translate { x, y, z })
        }
        "translateX" => value_unit_from(name, operand).map(|x| TransformOperation::Translate {
            x,
            y: ValueUnit::UNSET,
            z: 0.0,
        }),
        "translateY" => value_unit_from(name, operand).map(|y| TransformOperation::Translate {
            x: ValueUnit::UNSET,
            y,
            z: 0.0,
        }),
        "skewX" => angle_from(name, operand).map(|x| TransformOperation::Skew { x, y: 0.0 }),
        "skewY" => angle_from(name, operand).map(|y| TransformOperation::Skew { x: 0.0, y }),
        "matrix" => {
            let entries = operand.as_array()?;
            if entries.len() != 16 {
                warn(&unrecognized(name, &format!("{} entries", entries.len())));
                return None;
            }
            let mut matrix = [0.0_f32; 16];
            for (slot, entry) in matrix.iter_mut().zip(entries) {
                *slot = float_from(name, entry)?;
            }
            Some(TransformOperation::Matrix(Transform { matrix }))
        }
        _ => {
            warn(&unrecognized("transform", name));
            None
        }
    }
}

/// Decode a transform origin: a 2- or 3-element array of point/percent
/// components, e.g. `["50%", "50%", 0]`.
#[must_use]
pub fn transform_origin_from(key: &str, value: &Value) -> Option<TransformOrigin> {
    let Some(components) = value.as_array() else {
        warn(&mismatch(key, "an array of origin components", value));
        return None;
    };

    let x = components
        .first()
        .and_then(|component| value_unit_from(key, component))
        .unwrap_or(ValueUnit::UNSET);
    let y = components
        .get(1)
        .and_then(|component| value_unit_from(key, component))
        .unwrap_or(ValueUnit::UNSET);
    let z = components
        .get(2)
        .and_then(|component| float_from(key, component))
        .unwrap_or(0.0);

    Some(TransformOrigin { xy: [x, y], z })
}

fn apply_slot<T>(
    raw: &RawProps,
    key: &str,
    slot: &mut Option<T>,
    decode: &dyn Fn(&str, &Value) -> Option<T>,
) {
    match raw.get(key) {
        None => {}
        // An explicit null clears the declaration at this specificity.
        Some(Value::Null) => *slot = None,
        Some(value) => *slot = decode(key, value),
    }
}

/// Merge one edge-keyed property family (e.g. `border*Width`) from the raw
/// map over the previous snapshot's declarations.
///
/// Keys are built as `{prefix}{infix}{suffix}` for every infix in
/// [`EDGE_INFIXES`]; absent keys carry the previous declaration forward,
/// and explicit nulls (or uncoercible values, after a warning) clear it.
pub fn cascaded_edges_from_raw<T: Clone>(
    raw: &RawProps,
    prev: &CascadedEdges<T>,
    prefix: &str,
    suffix: &str,
    decode: &dyn Fn(&str, &Value) -> Option<T>,
) -> CascadedEdges<T> {
    let mut next = prev.clone();
    let key = |infix: &str| format!("{prefix}{infix}{suffix}");
    apply_slot(raw, &key(""), &mut next.all, decode);
    apply_slot(raw, &key("Horizontal"), &mut next.horizontal, decode);
    apply_slot(raw, &key("Vertical"), &mut next.vertical, decode);
    apply_slot(raw, &key("Start"), &mut next.start, decode);
    apply_slot(raw, &key("End"), &mut next.end, decode);
    apply_slot(raw, &key("Left"), &mut next.left, decode);
    apply_slot(raw, &key("Top"), &mut next.top, decode);
    apply_slot(raw, &key("Right"), &mut next.right, decode);
    apply_slot(raw, &key("Bottom"), &mut next.bottom, decode);
    next
}

/// Merge one corner-keyed property family (the `border*Radius` family)
/// from the raw map over the previous snapshot's declarations.
pub fn cascaded_corners_from_raw<T: Clone>(
    raw: &RawProps,
    prev: &CascadedCorners<T>,
    prefix: &str,
    suffix: &str,
    decode: &dyn Fn(&str, &Value) -> Option<T>,
) -> CascadedCorners<T> {
    let mut next = prev.clone();
    let key = |infix: &str| format!("{prefix}{infix}{suffix}");
    apply_slot(raw, &key(""), &mut next.all, decode);
    apply_slot(raw, &key("TopStart"), &mut next.top_start, decode);
    apply_slot(raw, &key("TopEnd"), &mut next.top_end, decode);
    apply_slot(raw, &key("BottomStart"), &mut next.bottom_start, decode);
    apply_slot(raw, &key("BottomEnd"), &mut next.bottom_end, decode);
    apply_slot(raw, &key("TopLeft"), &mut next.top_left, decode);
    apply_slot(raw, &key("TopRight"), &mut next.top_right, decode);
    apply_slot(raw, &key("BottomLeft"), &mut next.bottom_left, decode);
    apply_slot(raw, &key("BottomRight"), &mut next.bottom_right, decode);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_float_tolerates_bad_types() {
        assert_eq!(float_from("opacity", &json!(0.5)), Some(0.5));
        assert_eq!(float_from("opacity", &json!("half")), None);
    }

    #[test]
    fn test_color_accepts_packed_and_hex() {
        assert_eq!(
            color_from("backgroundColor", &json!(0xff00_2563_u32)),
            Some(Color::from_argb(0xff00_2563))
        );
        assert_eq!(
            color_from("backgroundColor", &json!("#2563eb")),
            Color::from_hex("#2563eb")
        );
        assert_eq!(color_from("backgroundColor", &json!("chartreuse-ish")), None);
        assert_eq!(color_from("backgroundColor", &json!("ÿé")), None);
        assert_eq!(color_from("backgroundColor", &json!([1, 2, 3])), None);
    }

    #[test]
    fn test_value_unit_spellings() {
        assert_eq!(value_unit_from("borderRadius", &json!(8)), Some(ValueUnit::point(8.0)));
        assert_eq!(
            value_unit_from("borderRadius", &json!("50%")),
            Some(ValueUnit::percent(50.0))
        );
        assert_eq!(
            value_unit_from("borderRadius", &json!("12.5")),
            Some(ValueUnit::point(12.5))
        );
        assert_eq!(value_unit_from("borderRadius", &json!("wide")), None);
    }

    #[test]
    fn test_angle_spellings() {
        let ninety = angle_from("rotate", &json!("90deg")).unwrap();
        assert!((ninety - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
        let one_rad = angle_from("rotate", &json!("1rad")).unwrap();
        assert!((one_rad - 1.0).abs() < 1e-6);
        let bare = angle_from("rotate", &json!(2.0)).unwrap();
        assert!((bare - 2.0).abs() < 1e-6);
        assert_eq!(angle_from("rotate", &json!("90grad")), None);
    }

    #[test]
    fn test_transform_list_skips_unknown_operations() {
        let value = json!([
            { "rotateZ": "180deg" },
            { "wobble": 3 },
            { "translateX": "50%" },
        ]);
        let operations = transform_from("transform", &value).unwrap();
        assert_eq!(operations.len(), 2);
        assert!(matches!(operations[0], TransformOperation::RotateZ(_)));
        assert!(matches!(operations[1], TransformOperation::Translate { .. }));
    }

    #[test]
    fn test_matrix_requires_sixteen_entries() {
        assert_eq!(
            transform_from("transform", &json!([{ "matrix": [1, 2, 3] }])),
            Some(vec![])
        );
        let full: Vec<f32> = (0_u16..16).map(f32::from).collect();
        let operations = transform_from("transform", &json!([{ "matrix": full }])).unwrap();
        assert!(matches!(operations[0], TransformOperation::Matrix(_)));
    }

    #[test]
    fn test_edge_family_null_clears_and_absent_carries() {
        let prev = CascadedEdges {
            all: Some(2.0_f32),
            left: Some(5.0),
            ..CascadedEdges::default()
        };
        let mut raw = RawProps::new();
        let _ = raw.insert("borderLeftWidth".to_string(), Value::Null);
        let _ = raw.insert("borderTopWidth".to_string(), json!(7));

        let next = cascaded_edges_from_raw(&raw, &prev, "border", "Width", &float_from);
        assert_eq!(next.left, None);
        assert_eq!(next.top, Some(7.0));
        assert_eq!(next.all, Some(2.0)); // carried forward
    }
}
