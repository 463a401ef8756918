//! Image source descriptions and best-fit candidate selection.

use serde::Serialize;
use serde_json::Value;

use quokka_graphics::Size;
use quokka_style::raw;

/// Where an image source's bytes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum ImageSourceType {
    /// No usable source.
    #[default]
    Invalid,
    /// Fetched over the network.
    Remote,
    /// Read from the host bundle or filesystem.
    Local,
}

/// One candidate image asset, as declared by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ImageSource {
    /// Provenance class, derived from the URI scheme.
    pub source_type: ImageSourceType,
    /// Location of the asset.
    pub uri: String,
    /// Intrinsic size in points; zero when undeclared.
    pub size: Size,
    /// Asset pixel density; zero when undeclared.
    pub scale: f32,
}

impl ImageSource {
    /// Decode one source from a raw value: a bare URI string or an object
    /// with `uri`, `width`, `height`, and `scale` members.
    #[must_use]
    pub fn from_raw(key: &str, value: &Value) -> Option<Self> {
        match value {
            Value::String(uri) => Some(Self::with_uri(uri.clone())),
            Value::Object(members) => {
                let uri = members
                    .get("uri")
                    .and_then(|member| raw::string_from(key, member))
                    .unwrap_or_default();
                let mut source = Self::with_uri(uri);
                source.size = Size {
                    width: members
                        .get("width")
                        .and_then(|member| raw::float_from(key, member))
                        .unwrap_or(0.0),
                    height: members
                        .get("height")
                        .and_then(|member| raw::float_from(key, member))
                        .unwrap_or(0.0),
                };
                source.scale = members
                    .get("scale")
                    .and_then(|member| raw::float_from(key, member))
                    .unwrap_or(0.0);
                Some(source)
            }
            _ => None,
        }
    }

    fn with_uri(uri: String) -> Self {
        let source_type = if uri.is_empty() {
            ImageSourceType::Invalid
        } else if uri.starts_with("http://") || uri.starts_with("https://") {
            ImageSourceType::Remote
        } else {
            ImageSourceType::Local
        };
        Self {
            source_type,
            uri,
            size: Size::default(),
            scale: 0.0,
        }
    }
}

/// Pick the candidate whose pixel area best matches the target, then
/// stamp the target geometry onto it.
///
/// An empty candidate list yields an invalid source. A single candidate is
/// taken as-is. Otherwise fitness is the relative pixel-area error
/// `|1 - candidate_area / target_area|`; a candidate with no declared
/// scale is assumed to match the target density. Ties keep the earliest
/// candidate, so declaration order breaks exact-fit ties.
///
/// The winner's size and scale are always overridden with the target's:
/// the renderer draws into the layout frame at the display density
/// regardless of the asset's intrinsic geometry.
#[must_use]
pub fn select_source(sources: &[ImageSource], target_size: Size, target_scale: f32) -> ImageSource {
    let mut chosen = match sources {
        [] => return ImageSource::default(),
        [only] => only.clone(),
        _ => {
            let target_area = target_size.width * target_size.height * target_scale * target_scale;
            let mut best: Option<(&ImageSource, f32)> = None;
            for candidate in sources {
                let scale = if candidate.scale == 0.0 {
                    target_scale
                } else {
                    candidate.scale
                };
                let area = candidate.size.width * candidate.size.height * scale * scale;
                let fit = (1.0 - area / target_area).abs();
                if best.as_ref().is_none_or(|(_, best_fit)| fit < *best_fit) {
                    best = Some((candidate, fit));
                }
            }
            // `sources` has at least two entries here.
            best.map(|(candidate, _)| candidate.clone()).unwrap_or_default()
        }
    };
    chosen.size = target_size;
    chosen.scale = target_scale;
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uri_scheme_classifies_source_type() {
        let remote = ImageSource::from_raw("source", &json!("https://cdn.example/a.png")).unwrap();
        assert_eq!(remote.source_type, ImageSourceType::Remote);

        let local = ImageSource::from_raw("source", &json!("file:///bundle/a.png")).unwrap();
        assert_eq!(local.source_type, ImageSourceType::Local);

        let invalid = ImageSource::from_raw("source", &json!("")).unwrap();
        assert_eq!(invalid.source_type, ImageSourceType::Invalid);
    }

    #[test]
    fn test_object_form_carries_geometry() {
        let source = ImageSource::from_raw(
            "source",
            &json!({ "uri": "https://cdn.example/a.png", "width": 100, "height": 50, "scale": 2 }),
        )
        .unwrap();
        assert!((source.size.width - 100.0).abs() < 1e-6);
        assert!((source.size.height - 50.0).abs() < 1e-6);
        assert!((source.scale - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_candidate_list_is_invalid() {
        let chosen = select_source(&[], Size::new(100.0, 100.0), 2.0);
        assert_eq!(chosen.source_type, ImageSourceType::Invalid);
    }
}
