//! Image source selection and fetch-state management for the Quokka
//! resolver.
//!
//! Hosts declare images as a list of candidate assets at different
//! densities. This crate:
//!
//! - decodes those candidates and the image-specific props into an
//!   immutable [`ImageProps`] snapshot layered over the shared view
//!   snapshot
//! - picks the candidate whose pixel area best matches the final layout
//!   frame at the display density
//! - issues fetches through the [`ImageFetcher`] seam, gated by value
//!   equality so redundant commits never duplicate or cancel in-flight
//!   requests

pub mod props;
pub mod request;
pub mod source;
pub mod state;

pub use props::ImageProps;
pub use request::{ImageFetcher, ImageRequest, ImageRequestParams, ResizeMode};
pub use source::{select_source, ImageSource, ImageSourceType};
pub use state::{ImageNode, ImageState};
