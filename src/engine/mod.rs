//! Template engine contract and locale handling.
//!
//! The renderer talks to its template engine through the [`TemplateEngine`]
//! trait: resolve a template by id and optional locale, merge the variable
//! mapping into it, hand back raw text. [`HandlebarsEngine`] is the
//! production implementation; callers with their own template machinery can
//! implement the trait instead.

pub mod handlebars;

pub use self::handlebars::HandlebarsEngine;

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque key→value mapping handed through to the engine unchanged.
///
/// Values may be strings, numbers, booleans, or sequences; what they mean is
/// entirely the engine's business.
pub type TemplateVariables = serde_json::Map<String, serde_json::Value>;

/// Engine-side error type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No template is registered for the id under any candidate storage key.
    #[error("template not found: {template_id}{}", .locale.as_ref().map(|l| format!(" (locale `{}`)", l)).unwrap_or_default())]
    NotFound {
        template_id: String,
        /// Locale the lookup was asked to resolve, if any.
        locale: Option<Locale>,
    },

    /// Template source could not be read from its backing store.
    #[error("template source could not be loaded: {0}")]
    Io(#[from] std::io::Error),

    /// Template source failed to compile at registration time.
    #[error("invalid template `{name}`: {source}")]
    InvalidTemplate {
        name: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The template was found but merging the variables into it failed.
    #[error("template `{name}` failed to evaluate: {source}")]
    Evaluation {
        name: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl EngineError {
    /// True for failures of the evaluation phase, i.e. the template resolved
    /// but the merge failed. Everything else is resolution-class.
    pub fn is_evaluation(&self) -> bool {
        matches!(self, EngineError::Evaluation { .. })
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Language/region tag used to select a template variant.
///
/// The tag is carried as-is; no well-formedness validation is performed here
/// or by the renderer. Only the lookup-suffix computation interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Suffix under which a variant for exactly this tag is stored.
    ///
    /// Separators are normalized to `_` so that `en-US` and `en_US` address
    /// the same storage key.
    pub fn storage_suffix(&self) -> String {
        self.0.replace('-', "_")
    }

    /// Candidate lookup suffixes, most specific first.
    ///
    /// Trailing segments are dropped one at a time: `en-US` yields
    /// `["en_US", "en"]`. An empty tag yields no candidates, leaving only the
    /// base template.
    pub fn lookup_suffixes(&self) -> Vec<String> {
        let normalized = self.storage_suffix();
        let segments: Vec<&str> = normalized.split('_').filter(|s| !s.is_empty()).collect();
        (1..=segments.len())
            .rev()
            .map(|n| segments[..n].join("_"))
            .collect()
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves a template by `(template_id, locale)` and renders it against a
/// variable mapping into raw text.
///
/// Implementations must support concurrent `render` calls; the renderer
/// performs no synchronization of its own. Resolution failures (unknown id,
/// loader I/O) and evaluation failures (unresolved variable, bad syntax) are
/// distinguished through the [`EngineError`] variants.
pub trait TemplateEngine: Send + Sync {
    fn render(
        &self,
        template_id: &str,
        locale: Option<&Locale>,
        variables: &TemplateVariables,
    ) -> EngineResult<String>;
}
