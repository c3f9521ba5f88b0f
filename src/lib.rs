//! Mail template rendering.
//!
//! Merges a named template with runtime variables and splits the rendered
//! text into a subject and a body at a configurable delimiter line, producing
//! the two-part artifact consumed by mail-assembly code.
//!
//! ```
//! use std::sync::Arc;
//!
//! use mail_template_renderer::{HandlebarsEngine, MailTemplateRenderer};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = HandlebarsEngine::new();
//! engine.register_template("welcome", None, "Welcome {{name}}\n---\nHello {{name}}!\n")?;
//!
//! let renderer = MailTemplateRenderer::new(Arc::new(engine));
//! let variables = json!({ "name": "Ada" }).as_object().cloned().unwrap();
//!
//! let mail = renderer.render("welcome", None, &variables)?;
//! assert_eq!(mail.subject(), "Welcome Ada");
//! assert_eq!(mail.body(), "Hello Ada!\n");
//! # Ok(())
//! # }
//! ```

// Engine collaborator contract and backends
pub mod engine;

// Rendering pipeline
pub mod config;
pub mod renderer;

// Boundary errors
pub mod error;

pub use config::{RendererConfig, DEFAULT_DELIMITER};
pub use engine::{EngineError, HandlebarsEngine, Locale, TemplateEngine, TemplateVariables};
pub use error::{ProcessingErrorKind, ProcessingResult, TemplateProcessingError};
pub use renderer::{MailTemplateRenderer, RenderedMail};
