//! Boundary error type for template processing.
//!
//! Engine failures of both classes are caught at the single render call
//! boundary and re-raised as [`TemplateProcessingError`]; callers never see a
//! backend's native error types. No recovery, retry, or default substitution
//! happens here.

use thiserror::Error;

use crate::engine::EngineError;

/// Failure category, for diagnostics and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingErrorKind {
    /// The template could not be found or loaded.
    Resolution,
    /// The template was found but merging the variables into it failed.
    Evaluation,
    /// The engine produced text without the expected delimiter line.
    MalformedOutput,
}

/// Error raised by [`MailTemplateRenderer::render`].
///
/// The variant tags the failure category; the triggering [`EngineError`] is
/// carried as the nested cause where one exists.
///
/// [`MailTemplateRenderer::render`]: crate::renderer::MailTemplateRenderer::render
#[derive(Debug, Error)]
pub enum TemplateProcessingError {
    #[error("failed to resolve mail template `{template_id}`: {source}")]
    Resolution {
        template_id: String,
        #[source]
        source: EngineError,
    },

    #[error("failed to evaluate mail template `{template_id}`: {source}")]
    Evaluation {
        template_id: String,
        #[source]
        source: EngineError,
    },

    #[error("rendered output of template `{template_id}` contains no `{delimiter}` delimiter line")]
    MissingDelimiter {
        template_id: String,
        delimiter: String,
    },
}

impl TemplateProcessingError {
    /// Failure category of this error.
    pub fn kind(&self) -> ProcessingErrorKind {
        match self {
            TemplateProcessingError::Resolution { .. } => ProcessingErrorKind::Resolution,
            TemplateProcessingError::Evaluation { .. } => ProcessingErrorKind::Evaluation,
            TemplateProcessingError::MissingDelimiter { .. } => ProcessingErrorKind::MalformedOutput,
        }
    }

    /// Wrap an engine failure, classifying it by phase.
    pub(crate) fn from_engine(template_id: &str, source: EngineError) -> Self {
        if source.is_evaluation() {
            TemplateProcessingError::Evaluation {
                template_id: template_id.to_string(),
                source,
            }
        } else {
            TemplateProcessingError::Resolution {
                template_id: template_id.to_string(),
                source,
            }
        }
    }
}

/// Result type for template processing operations.
pub type ProcessingResult<T> = Result<T, TemplateProcessingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        let resolution = TemplateProcessingError::from_engine(
            "hello",
            EngineError::NotFound {
                template_id: "hello".to_string(),
                locale: None,
            },
        );
        assert_eq!(resolution.kind(), ProcessingErrorKind::Resolution);

        let evaluation = TemplateProcessingError::from_engine(
            "hello",
            EngineError::Evaluation {
                name: "hello".to_string(),
                source: "unbound variable".into(),
            },
        );
        assert_eq!(evaluation.kind(), ProcessingErrorKind::Evaluation);

        let malformed = TemplateProcessingError::MissingDelimiter {
            template_id: "hello".to_string(),
            delimiter: "---".to_string(),
        };
        assert_eq!(malformed.kind(), ProcessingErrorKind::MalformedOutput);
    }

    #[test]
    fn test_engine_cause_is_preserved() {
        use std::error::Error;

        let err = TemplateProcessingError::from_engine(
            "hello",
            EngineError::NotFound {
                template_id: "hello".to_string(),
                locale: Some(crate::engine::Locale::from("en")),
            },
        );

        let cause = err.source().expect("engine cause must be attached");
        assert!(cause.to_string().contains("hello"));
    }
}
