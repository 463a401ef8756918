//! The image component's props snapshot.

use serde::Serialize;
use serde_json::Value;

use quokka_common::warning::warn_once;
use quokka_style::props::is_known_view_prop;
use quokka_style::{raw, RawProps, ResolverConfig, ViewProps};

use crate::request::ResizeMode;
use crate::source::ImageSource;

const IMAGE_PROPS: [&str; 3] = ["source", "blurRadius", "resizeMode"];

/// Styling and source state for one image view, as last committed.
///
/// Layers the image-specific properties over the shared view snapshot;
/// the embedded [`ViewProps`] carries the revision and the seal for the
/// whole value.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ImageProps {
    /// The shared view styling (opacity, borders, transform, ...).
    pub view: ViewProps,
    /// Candidate assets, in declaration order.
    pub sources: Vec<ImageSource>,
    /// Gaussian blur applied after decode, in points.
    pub blur_radius: f32,
    /// How the decoded image maps into the layout frame.
    pub resize_mode: ResizeMode,
}

impl ImageProps {
    /// Build the next snapshot by merging `raw` over `prev`.
    ///
    /// Same merge contract as [`ViewProps::from_raw`]: absent keys carry
    /// forward, nulls and uncoercible values reset to defaults with a
    /// warning.
    #[must_use]
    pub fn from_raw(config: &ResolverConfig, prev: &Self, raw_props: &RawProps) -> Self {
        // The view layer handles its own keys; unknown-key warnings are
        // deferred to this layer, which knows the combined name set.
        let view_config = ResolverConfig {
            warn_on_unknown_props: false,
            ..*config
        };
        let view = ViewProps::from_raw(&view_config, &prev.view, raw_props);

        let mut next = Self {
            view,
            sources: prev.sources.clone(),
            blur_radius: prev.blur_radius,
            resize_mode: prev.resize_mode,
        };

        match raw_props.get("source") {
            None => {}
            Some(Value::Null) => next.sources = Vec::new(),
            Some(value) => next.sources = decode_sources(value),
        }
        match raw_props.get("blurRadius") {
            None => {}
            Some(Value::Null) => next.blur_radius = 0.0,
            Some(value) => {
                next.blur_radius = raw::float_from("blurRadius", value).unwrap_or(0.0);
            }
        }
        match raw_props.get("resizeMode") {
            None => {}
            Some(Value::Null) => next.resize_mode = ResizeMode::default(),
            Some(value) => {
                next.resize_mode =
                    raw::keyword_from("resizeMode", value).unwrap_or_default();
            }
        }

        if config.warn_on_unknown_props {
            for key in raw_props.keys() {
                if !is_known_view_prop(key) && !IMAGE_PROPS.contains(&key.as_str()) {
                    warn_once("props", &format!("ignoring unknown property '{key}'"));
                }
            }
        }

        next
    }

    /// Freeze the snapshot. Idempotent.
    pub fn seal(&self) {
        self.view.seal();
    }

    /// Whether the snapshot has been frozen.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.view.is_sealed()
    }
}

fn decode_sources(value: &Value) -> Vec<ImageSource> {
    match value {
        Value::Array(entries) => entries
            .iter()
            .filter_map(|entry| ImageSource::from_raw("source", entry))
            .collect(),
        single => ImageSource::from_raw("source", single).into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_of(entries: &[(&str, Value)]) -> RawProps {
        let mut raw_props = RawProps::new();
        for (key, value) in entries {
            let _ = raw_props.insert((*key).to_string(), value.clone());
        }
        raw_props
    }

    #[test]
    fn test_single_and_list_source_forms() {
        let config = ResolverConfig::default();
        let single = ImageProps::from_raw(
            &config,
            &ImageProps::default(),
            &raw_of(&[("source", json!({ "uri": "https://cdn.example/a.png" }))]),
        );
        assert_eq!(single.sources.len(), 1);

        let list = ImageProps::from_raw(
            &config,
            &ImageProps::default(),
            &raw_of(&[(
                "source",
                json!([
                    { "uri": "https://cdn.example/a.png", "scale": 1 },
                    { "uri": "https://cdn.example/a@2x.png", "scale": 2 },
                ]),
            )]),
        );
        assert_eq!(list.sources.len(), 2);
    }

    #[test]
    fn test_view_keys_still_apply() {
        let config = ResolverConfig::default();
        let props = ImageProps::from_raw(
            &config,
            &ImageProps::default(),
            &raw_of(&[("opacity", json!(0.5)), ("blurRadius", json!(4))]),
        );
        assert!((props.view.opacity - 0.5).abs() < 1e-6);
        assert!((props.blur_radius - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_sealing_flows_through_the_view_layer() {
        let props = ImageProps::default();
        assert!(!props.is_sealed());
        props.seal();
        assert!(props.is_sealed());
    }
}
