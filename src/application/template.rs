//! Application descriptor templating.
//!
//! Descriptors are stored next to the pipeline sources as Handlebars
//! templates. Values come from inline replacements and from files whose
//! trimmed contents become the value; file values win on name clashes.
//! Values are inserted verbatim: descriptors are JSON, not HTML.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use handlebars::Handlebars;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TemplateError;

/// One named value (inline) or one named file path (file replacements).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub name: String,
    pub value: String,
}

impl Replacement {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Renders descriptor templates relative to a root directory.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    root: PathBuf,
}

impl TemplateRenderer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Render `template` (relative to the root) with the given replacements.
    ///
    /// # Errors
    ///
    /// Fails if the template or a replacement file cannot be read, or if the
    /// template does not parse or render.
    pub fn render(
        &self,
        template: &str,
        replacements: &[Replacement],
        replacement_files: &[Replacement],
    ) -> Result<Vec<u8>, TemplateError> {
        let mut values: HashMap<&str, String> = replacements
            .iter()
            .map(|r| (r.name.as_str(), r.value.clone()))
            .collect();

        for file in replacement_files {
            let contents = fs::read_to_string(self.root.join(&file.value)).map_err(|source| {
                TemplateError::ReplacementFile {
                    name: file.name.clone(),
                    source,
                }
            })?;
            values.insert(file.name.as_str(), contents.trim().to_string());
        }

        let path = self.root.join(template);
        let source = fs::read_to_string(&path).map_err(|source| TemplateError::Read {
            path: path.to_string_lossy().into_owned(),
            source,
        })?;

        debug!(template = %path.display(), variables = values.len(), "Rendering app template");
        Ok(render_source(&source, &values)?.into_bytes())
    }
}

/// Render Handlebars `source` against `values` without HTML escaping.
/// Unknown names render as the empty string.
fn render_source(source: &str, values: &HashMap<&str, String>) -> Result<String, TemplateError> {
    let mut engine = Handlebars::new();
    engine.register_escape_fn(handlebars::no_escape);
    engine
        .render_template(source, values)
        .map_err(TemplateError::Render)
}
