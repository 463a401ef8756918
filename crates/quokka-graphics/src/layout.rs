//! Layout results consumed from the external layout engine.
//!
//! The layout algorithm itself lives outside this core: by the time the
//! resolvers run, every element already has a final frame, a resolved text
//! direction, and a pixel scale. This module is the read-only record of
//! those three facts.

use serde::Serialize;

use crate::geometry::{Rect, Size};

/// Resolved text direction of an element.
///
/// [CSS Writing Modes Level 4 § 2](https://www.w3.org/TR/css-writing-modes-4/#text-direction)
/// Logical (start/end) style keys map to different physical edges depending
/// on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum LayoutDirection {
    /// Left-to-right scripts: start maps to left, end maps to right.
    #[default]
    LeftToRight,
    /// Right-to-left scripts: start maps to right, end maps to left.
    RightToLeft,
}

impl LayoutDirection {
    /// Whether this is a right-to-left direction.
    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}

/// The layout engine's output for one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutMetrics {
    /// Final frame in the parent's coordinate space.
    pub frame: Rect,
    /// Resolved text direction.
    pub direction: LayoutDirection,
    /// Physical pixels per point (e.g. 2.0 on a @2x display).
    pub point_scale_factor: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            frame: Rect::default(),
            direction: LayoutDirection::default(),
            point_scale_factor: 1.0,
        }
    }
}

impl LayoutMetrics {
    /// The size available to the element's content.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.frame.size()
    }
}
