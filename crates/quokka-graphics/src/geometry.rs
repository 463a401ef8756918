//! Rectangles, sizes, and the generic per-edge / per-corner containers.
//!
//! The cascade resolver hands downstream consumers *physical* geometry only:
//! a [`RectangleEdges`] always has all four edges populated, and a
//! [`RectangleCorners`] always has all four corners populated. Optionality
//! and logical (start/end) keys exist only on the cascaded input side.

use serde::Serialize;

/// A point in the element's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct Point {
    /// Horizontal coordinate, increasing rightward.
    pub x: f32,
    /// Vertical coordinate, increasing downward.
    pub y: f32,
}

impl Point {
    /// Construct a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct Size {
    /// Horizontal extent in points.
    pub width: f32,
    /// Vertical extent in points.
    pub height: f32,
}

impl Size {
    /// Construct a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle: the element's final layout frame.
///
/// Produced by the external layout engine; this crate only consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct Rect {
    /// Left edge in the parent's coordinate space.
    pub x: f32,
    /// Top edge in the parent's coordinate space.
    pub y: f32,
    /// Horizontal extent in points.
    pub width: f32,
    /// Vertical extent in points.
    pub height: f32,
}

impl Rect {
    /// Construct a rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle's extent, discarding its position.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

/// Scalar insets from each edge of a rectangle.
///
/// Used internally by the corner-overlap correction, which sums adjacent
/// corner radii into per-edge insets before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct EdgeInsets {
    /// Inset from the left edge.
    pub left: f32,
    /// Inset from the top edge.
    pub top: f32,
    /// Inset from the right edge.
    pub right: f32,
    /// Inset from the bottom edge.
    pub bottom: f32,
}

/// One value per physical edge.
///
/// This is the only edge-keyed form downstream consumers may read: every
/// edge is populated (the cascade substitutes its fallback for absent keys
/// before this type is ever constructed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct RectangleEdges<T> {
    /// Value for the left edge.
    pub left: T,
    /// Value for the top edge.
    pub top: T,
    /// Value for the right edge.
    pub right: T,
    /// Value for the bottom edge.
    pub bottom: T,
}

impl<T: Clone> RectangleEdges<T> {
    /// The same value on all four edges.
    pub fn uniform(value: T) -> Self {
        Self {
            left: value.clone(),
            top: value.clone(),
            right: value.clone(),
            bottom: value,
        }
    }
}

/// One value per physical corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct RectangleCorners<T> {
    /// Value for the top-left corner.
    pub top_left: T,
    /// Value for the top-right corner.
    pub top_right: T,
    /// Value for the bottom-left corner.
    pub bottom_left: T,
    /// Value for the bottom-right corner.
    pub bottom_right: T,
}

impl<T: Clone> RectangleCorners<T> {
    /// The same value on all four corners.
    pub fn uniform(value: T) -> Self {
        Self {
            top_left: value.clone(),
            top_right: value.clone(),
            bottom_left: value.clone(),
            bottom_right: value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_size_discards_position() {
        let frame = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(frame.size(), Size::new(100.0, 40.0));
    }

    #[test]
    fn test_uniform_fills_every_slot() {
        let edges = RectangleEdges::uniform(3_u8);
        assert_eq!((edges.left, edges.top, edges.right, edges.bottom), (3, 3, 3, 3));

        let corners = RectangleCorners::uniform("r");
        assert_eq!(corners.top_left, corners.bottom_right);
    }
}
