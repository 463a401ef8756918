//! Style cascade and props snapshot resolution for the Quokka resolver.
//!
//! This crate turns loosely-typed raw property maps into immutable,
//! sealed [`ViewProps`] snapshots, and resolves those snapshots against
//! final layout into render-ready geometry:
//!
//! - **Cascade** - collapsing overlapping generic / axis / logical /
//!   physical declarations into one value per edge or corner
//! - **Border Geometry** - unit resolution and corner-overlap correction
//!   ([CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/))
//! - **Raw Decoding** - tolerant coercion of untyped values, with
//!   deduplicated warnings for anything unrecognized
//! - **Props Snapshots** - revisioned, seal-once styling state merged
//!   commit over commit

pub mod border;
pub mod cascade;
pub mod config;
pub mod props;
pub mod raw;

pub use border::{BorderCurve, BorderMetrics, BorderRadii, BorderStyle, CornerRadii};
pub use cascade::{CascadedCorners, CascadedEdges};
pub use config::ResolverConfig;
pub use props::{BackfaceVisibility, ViewProps};
pub use raw::RawProps;
