//! Geometry and value primitives for the Quokka style resolver.
//!
//! # Scope
//!
//! This crate implements the leaf-level building blocks the cascade and
//! geometry resolvers are parameterized over:
//!
//! - **Value Units** - lengths expressed as absolute points or percentages
//!   of a reference dimension, with pure scalar resolution
//! - **Geometry** - points, sizes, rectangles, edge insets, and the generic
//!   per-edge / per-corner containers
//! - **Colors** - sRGB colors with hex and packed-integer decoding
//!   ([CSS Color Level 4 § 4.2](https://www.w3.org/TR/css-color-4/#hex-notation))
//! - **Transforms** - 4×4 matrix composition of an ordered operation list
//!   around a configurable pivot
//!   ([CSS Transforms Level 2](https://www.w3.org/TR/css-transforms-2/))
//! - **Layout Metrics** - the already-computed frame, resolved text
//!   direction, and pixel scale consumed from the external layout engine
//!
//! Everything here is a pure, non-blocking computation over plain values:
//! no rasterization, no view hierarchy, no layout algorithm.

pub mod color;
pub mod geometry;
pub mod layout;
pub mod transform;
pub mod value_unit;

// Re-exports for convenience
pub use color::Color;
pub use geometry::{EdgeInsets, Point, Rect, RectangleCorners, RectangleEdges, Size};
pub use layout::{LayoutDirection, LayoutMetrics};
pub use transform::{Transform, TransformOperation, TransformOrigin, resolve_transform};
pub use value_unit::{UnitType, ValueUnit};
