//! Template rendering collaborator.
//!
//! Recipes embed templating constructs (`{% set version = "1.0" %}`,
//! `{{ version }}`) that must be expanded before the YAML parse. The engine
//! only depends on the [`Renderer`] seam; render failures propagate to the
//! caller untouched, since no rule can run without a document.

use crate::error::{ForgelintError, Result};

/// Expands templating constructs in raw recipe text.
pub trait Renderer {
    /// Render raw recipe text into plain YAML.
    fn render(&self, text: &str) -> Result<String>;
}

/// Renders recipe templates with an empty variable context.
///
/// Variables assigned inside the recipe (`{% set ... %}`) resolve normally;
/// references to anything undefined are a render failure.
pub struct TeraRenderer;

impl Renderer for TeraRenderer {
    fn render(&self, text: &str) -> Result<String> {
        let context = tera::Context::new();
        tera::Tera::one_off(text, &context, false).map_err(|err| ForgelintError::Render {
            message: err.to_string(),
        })
    }
}

/// Identity renderer for already-rendered input.
pub struct PassthroughRenderer;

impl Renderer for PassthroughRenderer {
    fn render(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_set_and_reference() {
        let text = "{% set version = \"1.4.2\" %}\npackage:\n  name: foo\n  version: {{ version }}\n";
        let rendered = TeraRenderer.render(text).unwrap();
        assert!(rendered.contains("version: 1.4.2"));
        assert!(!rendered.contains("{%"));
    }

    #[test]
    fn plain_yaml_is_unchanged() {
        let text = "package:\n  name: foo\n";
        assert_eq!(TeraRenderer.render(text).unwrap(), text);
    }

    #[test]
    fn undefined_reference_is_a_render_error() {
        let result = TeraRenderer.render("version: {{ not_defined }}\n");
        assert!(matches!(result, Err(ForgelintError::Render { .. })));
    }

    #[test]
    fn passthrough_is_identity() {
        let text = "{% not even valid %}";
        assert_eq!(PassthroughRenderer.render(text).unwrap(), text);
    }
}
