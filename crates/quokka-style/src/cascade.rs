//! Cascading precedence resolution for edge- and corner-keyed declarations.
//!
//! A style declaration like a border width can be written against many
//! overlapping keys: a generic `all`, an axis pair, a logical
//! (direction-relative) pair, or a physical edge. The cascade collapses
//! those into exactly one concrete value per physical edge or corner.
//!
//! # Precedence
//!
//! From lowest to highest specificity:
//!
//! | tier        | keys                                     | covers                    |
//! |-------------|------------------------------------------|---------------------------|
//! | generic     | `all`                                    | every edge                |
//! | axis        | `horizontal` / `vertical`                | top+bottom / left+right   |
//! | logical     | `start` / `end`                          | left or right, per direction |
//! | physical    | `left`, `top`, `right`, `bottom`         | that edge only            |
//!
//! For each physical edge the applicable keys are walked from low to high
//! specificity and the last present value wins; if none is present the
//! caller's fallback applies. The `horizontal` keys cover the horizontally
//! *running* edges (top and bottom); `vertical` covers left and right.
//!
//! # Direction
//!
//! Under a right-to-left direction `start` maps to the physical right edge
//! and `end` to the physical left edge
//! ([CSS Logical Properties § 1.1](https://drafts.csswg.org/css-logical-1/#directional-keywords)).
//! Top and bottom are unaffected by direction. A physical key always beats
//! a logical key for the same edge, regardless of direction.

use serde::Serialize;

use quokka_graphics::{RectangleCorners, RectangleEdges};

/// Edge-keyed overrides for one property group, prior to cascading.
///
/// Every key is optional; `None` means "not declared at this specificity".
/// Never mutated after the owning snapshot is sealed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CascadedEdges<T> {
    /// Physical left edge (highest specificity).
    pub left: Option<T>,
    /// Physical top edge (highest specificity).
    pub top: Option<T>,
    /// Physical right edge (highest specificity).
    pub right: Option<T>,
    /// Physical bottom edge (highest specificity).
    pub bottom: Option<T>,
    /// Logical leading edge (left under LTR, right under RTL).
    pub start: Option<T>,
    /// Logical trailing edge (right under LTR, left under RTL).
    pub end: Option<T>,
    /// The horizontally-running edges: top and bottom.
    pub horizontal: Option<T>,
    /// The vertically-running edges: left and right.
    pub vertical: Option<T>,
    /// Every edge (lowest specificity).
    pub all: Option<T>,
}

impl<T> Default for CascadedEdges<T> {
    fn default() -> Self {
        Self {
            left: None,
            top: None,
            right: None,
            bottom: None,
            start: None,
            end: None,
            horizontal: None,
            vertical: None,
            all: None,
        }
    }
}

impl<T: Clone> CascadedEdges<T> {
    /// Collapse to one concrete value per physical edge.
    ///
    /// `is_rtl` selects the logical-to-physical mapping; `fallback` fills
    /// any edge with no declaration at any specificity.
    #[must_use]
    pub fn resolve(&self, is_rtl: bool, fallback: T) -> RectangleEdges<T> {
        let leading = if is_rtl { &self.end } else { &self.start };
        let trailing = if is_rtl { &self.start } else { &self.end };

        let horizontal_or_all = self.horizontal.clone().or_else(|| self.all.clone());
        let vertical_or_all = self.vertical.clone().or_else(|| self.all.clone());

        RectangleEdges {
            left: self
                .left
                .clone()
                .or_else(|| leading.clone())
                .or_else(|| vertical_or_all.clone())
                .unwrap_or_else(|| fallback.clone()),
            top: self
                .top
                .clone()
                .or_else(|| horizontal_or_all.clone())
                .unwrap_or_else(|| fallback.clone()),
            right: self
                .right
                .clone()
                .or_else(|| trailing.clone())
                .or_else(|| vertical_or_all.clone())
                .unwrap_or_else(|| fallback.clone()),
            bottom: self
                .bottom
                .clone()
                .or_else(|| horizontal_or_all.clone())
                .unwrap_or(fallback),
        }
    }

    /// Collapse to at most one concrete value per physical edge, with no
    /// fallback: an edge with no declaration at any specificity resolves
    /// to `None`.
    #[must_use]
    pub fn resolve_optional(&self, is_rtl: bool) -> RectangleEdges<Option<T>> {
        let leading = if is_rtl { &self.end } else { &self.start };
        let trailing = if is_rtl { &self.start } else { &self.end };

        let horizontal_or_all = self.horizontal.clone().or_else(|| self.all.clone());
        let vertical_or_all = self.vertical.clone().or_else(|| self.all.clone());

        RectangleEdges {
            left: self
                .left
                .clone()
                .or_else(|| leading.clone())
                .or_else(|| vertical_or_all.clone()),
            top: self
                .top
                .clone()
                .or_else(|| horizontal_or_all.clone()),
            right: self
                .right
                .clone()
                .or_else(|| trailing.clone())
                .or_else(|| vertical_or_all.clone()),
            bottom: self.bottom.clone().or(horizontal_or_all),
        }
    }

    /// Whether any key is declared.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.left.is_some()
            || self.top.is_some()
            || self.right.is_some()
            || self.bottom.is_some()
            || self.start.is_some()
            || self.end.is_some()
            || self.horizontal.is_some()
            || self.vertical.is_some()
            || self.all.is_some()
    }
}

/// Corner-keyed overrides for one property group, prior to cascading.
///
/// Corners have no axis tier; precedence is `all` < logical corner <
/// physical corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CascadedCorners<T> {
    /// Physical top-left corner (highest specificity).
    pub top_left: Option<T>,
    /// Physical top-right corner (highest specificity).
    pub top_right: Option<T>,
    /// Physical bottom-left corner (highest specificity).
    pub bottom_left: Option<T>,
    /// Physical bottom-right corner (highest specificity).
    pub bottom_right: Option<T>,
    /// Logical top-leading corner (top-left under LTR).
    pub top_start: Option<T>,
    /// Logical top-trailing corner (top-right under LTR).
    pub top_end: Option<T>,
    /// Logical bottom-leading corner (bottom-left under LTR).
    pub bottom_start: Option<T>,
    /// Logical bottom-trailing corner (bottom-right under LTR).
    pub bottom_end: Option<T>,
    /// Every corner (lowest specificity).
    pub all: Option<T>,
}

impl<T> Default for CascadedCorners<T> {
    fn default() -> Self {
        Self {
            top_left: None,
            top_right: None,
            bottom_left: None,
            bottom_right: None,
            top_start: None,
            top_end: None,
            bottom_start: None,
            bottom_end: None,
            all: None,
        }
    }
}

impl<T: Clone> CascadedCorners<T> {
    /// Collapse to one concrete value per physical corner.
    #[must_use]
    pub fn resolve(&self, is_rtl: bool, fallback: T) -> RectangleCorners<T> {
        let top_leading = if is_rtl { &self.top_end } else { &self.top_start };
        let top_trailing = if is_rtl { &self.top_start } else { &self.top_end };
        let bottom_leading = if is_rtl {
            &self.bottom_end
        } else {
            &self.bottom_start
        };
        let bottom_trailing = if is_rtl {
            &self.bottom_start
        } else {
            &self.bottom_end
        };

        RectangleCorners {
            top_left: self
                .top_left
                .clone()
                .or_else(|| top_leading.clone())
                .or_else(|| self.all.clone())
                .unwrap_or_else(|| fallback.clone()),
            top_right: self
                .top_right
                .clone()
                .or_else(|| top_trailing.clone())
                .or_else(|| self.all.clone())
                .unwrap_or_else(|| fallback.clone()),
            bottom_left: self
                .bottom_left
                .clone()
                .or_else(|| bottom_leading.clone())
                .or_else(|| self.all.clone())
                .unwrap_or_else(|| fallback.clone()),
            bottom_right: self
                .bottom_right
                .clone()
                .or_else(|| bottom_trailing.clone())
                .or_else(|| self.all.clone())
                .unwrap_or(fallback),
        }
    }

    /// Whether any key is declared.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.top_left.is_some()
            || self.top_right.is_some()
            || self.bottom_left.is_some()
            || self.bottom_right.is_some()
            || self.top_start.is_some()
            || self.top_end.is_some()
            || self.bottom_start.is_some()
            || self.bottom_end.is_some()
            || self.all.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_tier_overrides_lower_tiers_only_where_it_applies() {
        let edges = CascadedEdges {
            all: Some(1),
            horizontal: Some(2),
            left: Some(3),
            ..CascadedEdges::default()
        };
        let resolved = edges.resolve(false, 0);
        // Physical always wins.
        assert_eq!(resolved.left, 3);
        // Horizontal covers the top edge, overriding `all`.
        assert_eq!(resolved.top, 2);
        assert_eq!(resolved.bottom, 2);
        // Horizontal does not cover the right edge, so `all` applies.
        assert_eq!(resolved.right, 1);
    }

    #[test]
    fn test_fallback_fills_undeclared_edges() {
        let edges = CascadedEdges::<i32>::default();
        let resolved = edges.resolve(false, 9);
        assert_eq!(resolved, RectangleEdges::uniform(9));
    }

    #[test]
    fn test_start_end_swap_under_rtl_leaving_other_edges_alone() {
        let edges = CascadedEdges {
            start: Some(5),
            end: Some(9),
            ..CascadedEdges::default()
        };
        let ltr = edges.resolve(false, 0);
        assert_eq!((ltr.left, ltr.right), (5, 9));
        let rtl = edges.resolve(true, 0);
        assert_eq!((rtl.left, rtl.right), (9, 5));
        assert_eq!((rtl.top, rtl.bottom), (0, 0));
    }

    #[test]
    fn test_physical_beats_logical_regardless_of_direction() {
        let edges = CascadedEdges {
            left: Some(1),
            start: Some(2),
            ..CascadedEdges::default()
        };
        // LTR: start also targets left, but the physical key wins.
        assert_eq!(edges.resolve(false, 0).left, 1);
        // RTL: start targets right, so right picks up the logical value.
        let resolved = edges.resolve(true, 0);
        assert_eq!(resolved.left, 1);
        assert_eq!(resolved.right, 2);
    }

    #[test]
    fn test_corner_logical_mapping_flips_under_rtl() {
        let corners = CascadedCorners {
            top_start: Some(5),
            bottom_end: Some(7),
            ..CascadedCorners::default()
        };
        let ltr = corners.resolve(false, 0);
        assert_eq!(ltr.top_left, 5);
        assert_eq!(ltr.bottom_right, 7);

        let rtl = corners.resolve(true, 0);
        assert_eq!(rtl.top_right, 5);
        assert_eq!(rtl.bottom_left, 7);
    }
}
