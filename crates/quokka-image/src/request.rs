//! Fetch requests and the seam to the host's image pipeline.

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::source::ImageSource;

/// How the decoded image is mapped into the layout frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ResizeMode {
    /// Scale to fill the frame, cropping overflow.
    #[default]
    Cover,
    /// Scale to fit entirely inside the frame.
    Contain,
    /// Distort to exactly the frame.
    Stretch,
    /// Center without scaling.
    Center,
    /// Tile at intrinsic size.
    Repeat,
}

/// Decode and post-processing parameters attached to a fetch.
///
/// Compared by value when deciding whether an existing in-flight request
/// can be kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct ImageRequestParams {
    /// Gaussian blur to apply after decode, in points.
    pub blur_radius: f32,
    /// Frame-mapping mode.
    pub resize_mode: ResizeMode,
}

/// An opaque handle to one issued fetch.
///
/// The pipeline that issued it tracks delivery; holders only keep it
/// alive (dropping the last handle cancels the fetch) and recall what it
/// was issued for.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    source: ImageSource,
}

impl ImageRequest {
    /// Wrap a fetch issued for `source`.
    #[must_use]
    pub const fn new(source: ImageSource) -> Self {
        Self { source }
    }

    /// The source this fetch was issued for.
    #[must_use]
    pub const fn source(&self) -> &ImageSource {
        &self.source
    }
}

/// The seam to the host's image fetching pipeline.
///
/// Implementations schedule the work however they like; issuing must be
/// cheap and non-blocking since it happens during commit.
pub trait ImageFetcher {
    /// Begin fetching `source` with the given decode parameters.
    fn request_image(&self, source: &ImageSource, params: &ImageRequestParams) -> ImageRequest;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_mode_keywords() {
        assert_eq!("contain".parse::<ResizeMode>().unwrap(), ResizeMode::Contain);
        assert_eq!("COVER".parse::<ResizeMode>().unwrap(), ResizeMode::Cover);
        assert_eq!(ResizeMode::Repeat.to_string(), "repeat");
        assert!("fill".parse::<ResizeMode>().is_err());
    }
}
