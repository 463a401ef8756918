//! Resolver configuration.
//!
//! Host- and platform-dependent behavior is captured in one explicit
//! configuration value resolved at startup and passed to the snapshot
//! builder, rather than read from process-global flags.

/// Capabilities and policy switches for the props resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Emit a (deduplicated) warning when a raw map carries a property
    /// name the resolver does not recognize.
    pub warn_on_unknown_props: bool,
    /// Whether the rendering platform can draw continuous ("squircle")
    /// corner curves. When it cannot, `borderCurve: "continuous"`
    /// declarations are downgraded to circular at decode time.
    pub supports_continuous_corners: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            warn_on_unknown_props: true,
            supports_continuous_corners: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_warn_and_allow_continuous() {
        let config = ResolverConfig::default();
        assert!(config.warn_on_unknown_props);
        assert!(config.supports_continuous_corners);
    }
}
