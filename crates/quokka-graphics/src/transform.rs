//! Transform matrices and operation composition.
//!
//! [CSS Transforms Level 2](https://www.w3.org/TR/css-transforms-2/)
//!
//! A transform arrives as an *ordered* list of operations (translate, scale,
//! rotate, skew, perspective, or one explicit raw matrix). Order matters:
//! matrix multiplication is not commutative, so `translate` then `scale` is
//! a different transform than `scale` then `translate`.
//!
//! # Conventions
//!
//! Matrices are stored column-major and applied to column vectors
//! (`p' = M · p`). Composition folds the operation list left to right as
//! `acc = acc × op`, so the *first* listed operation ends up outermost,
//! applied last to any given point. This matches how the surrounding
//! renderer nests its transform stack.
//!
//! # Pivot
//!
//! Rotation, scale, and skew are anchored at the element's center by
//! default. An explicit transform-origin moves that anchor: the composed
//! matrix is conjugated as `T(pivot) × M × T(−pivot)` where `pivot` is the
//! center-relative offset of the requested origin
//! ([§ 8 transform-origin](https://www.w3.org/TR/css-transforms-2/#transform-origin-property)).

use serde::Serialize;

use crate::geometry::{Point, Size};
use crate::value_unit::{UnitType, ValueUnit};

/// A 4×4 transform matrix, stored column-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    /// Matrix entries; element `(row, col)` lives at `matrix[col * 4 + row]`.
    pub matrix: [f32; 16],
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        matrix: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// A translation by `(x, y, z)` points.
    #[must_use]
    pub const fn translate(x: f32, y: f32, z: f32) -> Self {
        let mut transform = Self::IDENTITY;
        transform.matrix[12] = x;
        transform.matrix[13] = y;
        transform.matrix[14] = z;
        transform
    }

    /// A scale by `(x, y, z)` factors.
    #[must_use]
    pub const fn scale(x: f32, y: f32, z: f32) -> Self {
        let mut transform = Self::IDENTITY;
        transform.matrix[0] = x;
        transform.matrix[5] = y;
        transform.matrix[10] = z;
        transform
    }

    /// A rotation about the x axis by `radians`.
    #[must_use]
    pub fn rotate_x(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut transform = Self::IDENTITY;
        transform.matrix[5] = cos;
        transform.matrix[6] = sin;
        transform.matrix[9] = -sin;
        transform.matrix[10] = cos;
        transform
    }

    /// A rotation about the y axis by `radians`.
    #[must_use]
    pub fn rotate_y(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut transform = Self::IDENTITY;
        transform.matrix[0] = cos;
        transform.matrix[2] = -sin;
        transform.matrix[8] = sin;
        transform.matrix[10] = cos;
        transform
    }

    /// A rotation about the z axis by `radians` (the 2D rotation).
    #[must_use]
    pub fn rotate_z(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut transform = Self::IDENTITY;
        transform.matrix[0] = cos;
        transform.matrix[1] = sin;
        transform.matrix[4] = -sin;
        transform.matrix[5] = cos;
        transform
    }

    /// A 2D skew by `(x_radians, y_radians)`.
    /// [§ 10 skew()](https://www.w3.org/TR/css-transforms-2/#funcdef-skew)
    #[must_use]
    pub fn skew(x_radians: f32, y_radians: f32) -> Self {
        let mut transform = Self::IDENTITY;
        transform.matrix[4] = x_radians.tan();
        transform.matrix[1] = y_radians.tan();
        transform
    }

    /// A perspective projection with focal distance `distance`.
    ///
    /// A zero distance yields the identity (the degenerate value is treated
    /// as "no perspective"; operand clamping happens upstream).
    #[must_use]
    pub fn perspective(distance: f32) -> Self {
        let mut transform = Self::IDENTITY;
        if distance != 0.0 {
            transform.matrix[11] = -1.0 / distance;
        }
        transform
    }

    /// Build the matrix for one operation, resolving any percentage
    /// components against `frame` (translate-x against width, translate-y
    /// against height).
    #[must_use]
    pub fn from_operation(operation: &TransformOperation, frame: Size) -> Self {
        match operation {
            TransformOperation::Perspective(distance) => Self::perspective(*distance),
            TransformOperation::RotateX(radians) => Self::rotate_x(*radians),
            TransformOperation::RotateY(radians) => Self::rotate_y(*radians),
            TransformOperation::RotateZ(radians) => Self::rotate_z(*radians),
            TransformOperation::Scale { x, y, z } => Self::scale(*x, *y, *z),
            TransformOperation::Translate { x, y, z } => {
                Self::translate(x.resolve(frame.width), y.resolve(frame.height), *z)
            }
            TransformOperation::Skew { x, y } => Self::skew(*x, *y),
            TransformOperation::Matrix(matrix) => *matrix,
        }
    }

    /// Apply this transform to a frame-local point (homogeneous divide
    /// included, for perspective matrices).
    #[must_use]
    pub fn apply_to_point(&self, point: Point) -> Point {
        let m = &self.matrix;
        let x = m[0] * point.x + m[4] * point.y + m[12];
        let y = m[1] * point.x + m[5] * point.y + m[13];
        let w = m[3] * point.x + m[7] * point.y + m[15];
        if w == 0.0 {
            Point::new(x, y)
        } else {
            Point::new(x / w, y / w)
        }
    }
}

impl std::ops::Mul for Transform {
    type Output = Self;

    /// Matrix product `self × rhs`. In the column-vector convention the
    /// right-hand side is applied to a point first.
    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0_f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.matrix[k * 4 + row] * rhs.matrix[col * 4 + k];
                }
                out[col * 4 + row] = sum;
            }
        }
        Self { matrix: out }
    }
}

/// One entry of an ordered transform list.
///
/// Angles are in radians (the raw-property layer converts `deg`/`rad`
/// spellings); translate components may be percentages of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TransformOperation {
    /// Perspective projection with the given focal distance.
    Perspective(f32),
    /// Rotation about the x axis, in radians.
    RotateX(f32),
    /// Rotation about the y axis, in radians.
    RotateY(f32),
    /// Rotation about the z axis (2D rotation), in radians.
    RotateZ(f32),
    /// Scale factors per axis.
    Scale {
        /// Horizontal scale factor.
        x: f32,
        /// Vertical scale factor.
        y: f32,
        /// Depth scale factor.
        z: f32,
    },
    /// Translation; x/y may be percentages of frame width/height.
    Translate {
        /// Horizontal offset (point or percent of frame width).
        x: ValueUnit,
        /// Vertical offset (point or percent of frame height).
        y: ValueUnit,
        /// Depth offset, always in points.
        z: f32,
    },
    /// 2D skew angles, in radians.
    Skew {
        /// Skew angle along the x axis.
        x: f32,
        /// Skew angle along the y axis.
        y: f32,
    },
    /// An explicit raw matrix. When this is the *only* operation in the
    /// list it is used verbatim, bypassing composition.
    Matrix(Transform),
}

/// The anchor point for rotation/scale/skew, independent of the frame's
/// coordinate origin.
///
/// Unset axes fall back to the frame center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct TransformOrigin {
    /// Horizontal and vertical anchor components (point or percent of the
    /// corresponding frame dimension).
    pub xy: [ValueUnit; 2],
    /// Depth component, in points.
    pub z: f32,
}

impl TransformOrigin {
    /// Whether any component was explicitly specified.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.xy.iter().any(ValueUnit::is_set) || self.z != 0.0
    }

    /// The pivot offset relative to the frame center: starting from the
    /// geometric center, each explicitly-specified axis overrides it with
    /// an absolute point or a percentage of the corresponding dimension.
    #[must_use]
    pub fn pivot_offset(&self, frame: Size) -> [f32; 3] {
        let center_x = frame.width / 2.0;
        let center_y = frame.height / 2.0;

        let mut origin = [center_x, center_y, self.z];
        for (axis, component) in self.xy.iter().enumerate() {
            match component.unit {
                UnitType::Point => origin[axis] = component.value,
                UnitType::Percent => {
                    let dimension = if axis == 0 { frame.width } else { frame.height };
                    origin[axis] = dimension * component.value / 100.0;
                }
                UnitType::Undefined => {}
            }
        }

        [origin[0] - center_x, origin[1] - center_y, origin[2]]
    }
}

/// Compose an ordered operation list into a single matrix for an element
/// with the given frame size.
///
/// - A frame with zero width *and* zero height short-circuits to the
///   identity (no pivot math on a degenerate frame).
/// - A list containing exactly one [`TransformOperation::Matrix`] is used
///   verbatim instead of being composed.
/// - Otherwise operations fold in list order (`acc = acc × op`), each
///   resolved against the frame for percentage components.
/// - If a transform-origin is set, the result is conjugated by the pivot
///   translation so anchored operations behave as if rotating/scaling
///   about the pivot.
#[must_use]
pub fn resolve_transform(
    operations: &[TransformOperation],
    origin: &TransformOrigin,
    frame: Size,
) -> Transform {
    if frame.width == 0.0 && frame.height == 0.0 {
        return Transform::IDENTITY;
    }

    let composed = if let [TransformOperation::Matrix(matrix)] = operations {
        *matrix
    } else {
        operations
            .iter()
            .fold(Transform::IDENTITY, |acc, operation| {
                acc * Transform::from_operation(operation, frame)
            })
    };

    if origin.is_set() {
        let [dx, dy, dz] = origin.pivot_offset(frame);
        Transform::translate(dx, dy, dz) * composed * Transform::translate(-dx, -dy, -dz)
    } else {
        composed
    }
}
