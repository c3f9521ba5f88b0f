//! Mail template rendering and subject/body splitting.
//!
//! [`MailTemplateRenderer`] orchestrates one operation: resolve a template
//! through the engine collaborator, merge the variables into it, split the
//! rendered text at the delimiter line, and hand back a [`RenderedMail`] for
//! the mail-assembly code downstream.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::config::RendererConfig;
use crate::engine::{Locale, TemplateEngine, TemplateVariables};
use crate::error::{ProcessingResult, TemplateProcessingError};

/// A rendered mail artifact: subject line plus body text.
///
/// Constructed only by the delimiter split. Both fields are always present
/// once constructed (either may be empty) and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMail {
    subject: String,
    body: String,
}

impl RenderedMail {
    /// Split raw engine output at the first line that exactly equals
    /// `delimiter`.
    ///
    /// The text before that line becomes the subject, with the single line
    /// break immediately preceding the delimiter stripped. Everything after
    /// the delimiter line's own terminator is the body, byte-for-byte. Line
    /// breaks are taken as the engine produced them (`\n` or `\r\n`); no
    /// normalization is performed. Returns `None` when no line equals the
    /// delimiter.
    pub fn split(raw: &str, delimiter: &str) -> Option<RenderedMail> {
        let mut offset = 0;
        for line in raw.split_inclusive('\n') {
            let content = line
                .strip_suffix('\n')
                .map(|l| l.strip_suffix('\r').unwrap_or(l))
                .unwrap_or(line);
            if content == delimiter {
                let before = &raw[..offset];
                let subject = before
                    .strip_suffix("\r\n")
                    .or_else(|| before.strip_suffix('\n'))
                    .unwrap_or(before);
                let body = &raw[offset + line.len()..];
                return Some(RenderedMail {
                    subject: subject.to_string(),
                    body: body.to_string(),
                });
            }
            offset += line.len();
        }
        None
    }

    /// Rendered subject line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Rendered body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consume the artifact, yielding `(subject, body)`.
    pub fn into_parts(self) -> (String, String) {
        (self.subject, self.body)
    }
}

/// Merges a named template with runtime variables and splits the result into
/// subject and body.
///
/// Stateless per call: `render` borrows `self` immutably and keeps no
/// per-call state beyond a local text buffer, so a shared renderer serves any
/// number of concurrent callers as long as the engine supports concurrent
/// rendering (enforced by the `Send + Sync` bound on [`TemplateEngine`]).
/// Configuration is fixed at construction; there is no mutation API.
pub struct MailTemplateRenderer {
    engine: Arc<dyn TemplateEngine>,
    config: RendererConfig,
}

impl MailTemplateRenderer {
    /// Renderer with the default delimiter and no default locale.
    pub fn new(engine: Arc<dyn TemplateEngine>) -> Self {
        Self::with_config(engine, RendererConfig::default())
    }

    /// Renderer with explicit configuration.
    pub fn with_config(engine: Arc<dyn TemplateEngine>, config: RendererConfig) -> Self {
        Self { engine, config }
    }

    /// Delimiter in effect for this renderer.
    pub fn delimiter(&self) -> &str {
        &self.config.delimiter
    }

    /// Render the template identified by `template_id` (with an optional
    /// language tag) against `variables` into a subject/body pair.
    ///
    /// A `None` lang falls back to the configured default locale, or to the
    /// engine's own default resolution when none is configured. The tag is
    /// passed through without validation; interpreting it is the engine's
    /// business. No partial result is ever returned.
    #[tracing::instrument(name = "mail_template.render", skip(self, variables))]
    pub fn render(
        &self,
        template_id: &str,
        lang: Option<&str>,
        variables: &TemplateVariables,
    ) -> ProcessingResult<RenderedMail> {
        let locale = match lang {
            Some(tag) => Some(Locale::from(tag)),
            None => self.config.default_locale.clone(),
        };

        let raw = self
            .engine
            .render(template_id, locale.as_ref(), variables)
            .map_err(|e| TemplateProcessingError::from_engine(template_id, e))?;

        let mail = RenderedMail::split(&raw, &self.config.delimiter).ok_or_else(|| {
            TemplateProcessingError::MissingDelimiter {
                template_id: template_id.to_string(),
                delimiter: self.config.delimiter.clone(),
            }
        })?;

        debug!(
            template_id,
            subject_len = mail.subject.len(),
            body_len = mail.body.len(),
            "rendered mail template"
        );
        Ok(mail)
    }
}
