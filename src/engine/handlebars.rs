//! Handlebars-backed template engine.
//!
//! Template sources live in a strict-mode [`Handlebars`] registry under
//! storage keys that encode the locale variant: the base template for
//! `welcome` is registered as `welcome`, its English variant as `welcome_en`.
//! Resolution walks the locale's suffix chain from most to least specific and
//! falls back to the base key.
//!
//! Registration takes `&mut self` and is expected to happen during
//! single-threaded wiring; the built engine is then shared behind an `Arc`
//! for concurrent rendering.

use std::fs;
use std::path::Path;

use handlebars::Handlebars;
use tracing::debug;

use super::{EngineError, EngineResult, Locale, TemplateEngine, TemplateVariables};

/// File extension recognized by [`HandlebarsEngine::load_directory`].
const TEMPLATE_EXTENSION: &str = "hbs";

/// Production [`TemplateEngine`] backed by the `handlebars` crate.
pub struct HandlebarsEngine {
    registry: Handlebars<'static>,
    default_locale: Option<Locale>,
}

impl Default for HandlebarsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlebarsEngine {
    /// Engine with an empty registry.
    ///
    /// Strict mode is enabled: a template referencing a variable that is
    /// absent from the mapping fails evaluation instead of rendering an empty
    /// string.
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        Self {
            registry,
            default_locale: None,
        }
    }

    /// Locale applied when a render call supplies none.
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = Some(locale);
        self
    }

    /// Register an in-memory template source, optionally as a locale variant.
    pub fn register_template(
        &mut self,
        template_id: &str,
        locale: Option<&Locale>,
        source: &str,
    ) -> EngineResult<()> {
        let key = match locale {
            Some(locale) => format!("{}_{}", template_id, locale.storage_suffix()),
            None => template_id.to_string(),
        };
        self.registry
            .register_template_string(&key, source)
            .map_err(|e| EngineError::InvalidTemplate {
                name: key,
                source: Box::new(e),
            })
    }

    /// Register every `*.hbs` file directly under `dir`.
    ///
    /// The storage key is the file stem, so `welcome_en.hbs` becomes the `en`
    /// variant of `welcome`. Returns the number of templates registered.
    pub fn load_directory<P: AsRef<Path>>(&mut self, dir: P) -> EngineResult<usize> {
        let dir = dir.as_ref();
        let mut registered = 0;
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION) {
                continue;
            }
            let key = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };
            let source = fs::read_to_string(&path)?;
            self.registry
                .register_template_string(&key, &source)
                .map_err(|e| EngineError::InvalidTemplate {
                    name: key.clone(),
                    source: Box::new(e),
                })?;
            registered += 1;
        }
        debug!(dir = %dir.display(), registered, "loaded template directory");
        Ok(registered)
    }

    /// Number of registered template sources, counting each variant.
    pub fn template_count(&self) -> usize {
        self.registry.get_templates().len()
    }

    /// First registered storage key in the resolution order for
    /// `(template_id, locale)`: locale suffix chain, then the base key.
    fn resolve_key(&self, template_id: &str, locale: Option<&Locale>) -> Option<String> {
        if let Some(locale) = locale {
            for suffix in locale.lookup_suffixes() {
                let candidate = format!("{}_{}", template_id, suffix);
                if self.registry.has_template(&candidate) {
                    return Some(candidate);
                }
            }
        }
        if self.registry.has_template(template_id) {
            return Some(template_id.to_string());
        }
        None
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn render(
        &self,
        template_id: &str,
        locale: Option<&Locale>,
        variables: &TemplateVariables,
    ) -> EngineResult<String> {
        let locale = locale.or(self.default_locale.as_ref());
        let key = self
            .resolve_key(template_id, locale)
            .ok_or_else(|| EngineError::NotFound {
                template_id: template_id.to_string(),
                locale: locale.cloned(),
            })?;
        debug!(template_id, storage_key = %key, "resolved template");
        self.registry
            .render(&key, variables)
            .map_err(|e| EngineError::Evaluation {
                name: key,
                source: Box::new(e),
            })
    }
}
