//! Renderer configuration.
//!
//! Supplied by the host's wiring layer at construction time and read-only
//! afterwards. The struct deserializes with per-field defaults so it can be
//! embedded in an application configuration tree; this crate performs no
//! configuration-file loading of its own.

use serde::Deserialize;

use crate::engine::Locale;

/// Delimiter used when none is configured: a line of three hyphens.
pub const DEFAULT_DELIMITER: &str = "---";

/// Configuration for [`MailTemplateRenderer`].
///
/// [`MailTemplateRenderer`]: crate::renderer::MailTemplateRenderer
#[derive(Debug, Clone, Deserialize)]
pub struct RendererConfig {
    /// Line separating the rendered subject from the body.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Locale applied when a render call supplies no language.
    ///
    /// `None` leaves locale selection to the engine's own default resolution.
    #[serde(default)]
    pub default_locale: Option<Locale>,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            default_locale: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RendererConfig::default();
        assert_eq!(config.delimiter, "---");
        assert!(config.default_locale.is_none());
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let config: RendererConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.delimiter, DEFAULT_DELIMITER);
        assert!(config.default_locale.is_none());
    }

    #[test]
    fn test_deserialize_overrides() {
        let config: RendererConfig =
            serde_json::from_str(r#"{ "delimiter": "@@@", "default_locale": "en" }"#).unwrap();
        assert_eq!(config.delimiter, "@@@");
        assert_eq!(config.default_locale, Some(Locale::from("en")));
    }
}
