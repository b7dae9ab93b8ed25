//! Prompt template — loads `template.md` and substitutes `{placeholder}`
//! variables from per-request values plus partial bindings fixed at startup
//! (`today`, `format_instructions`).

use std::collections::HashMap;
use std::path::Path;

use crate::errors::AppError;

/// Per-request variables every template rendering must supply.
pub const REQUIRED_VARIABLES: [&str; 5] = ["name", "country", "city", "yyyymmdd_hhmm", "sex"];

/// A prompt template with named `{placeholder}` slots.
///
/// Rendering is a single pass over the template text: substituted values are
/// never rescanned, so a value containing braces (the JSON schema in the
/// format instructions, for example) cannot trigger further substitution.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
    partials: HashMap<String, String>,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            partials: HashMap::new(),
        }
    }

    /// Loads the template document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Self::new(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::TemplateNotFound(path.to_path_buf()))
            }
            Err(e) => Err(AppError::Configuration(format!(
                "failed to read template '{}': {e}",
                path.display()
            ))),
        }
    }

    /// Binds a variable ahead of time. Per-request values passed to
    /// `render` take precedence over partials.
    pub fn partial(mut self, key: &str, value: impl Into<String>) -> Self {
        self.partials.insert(key.to_string(), value.into());
        self
    }

    /// Renders the template, substituting every `{ident}` placeholder from
    /// `vars` or the partial bindings. An unbound placeholder fails with
    /// `MissingVariable`. Brace runs that are not plain identifiers (JSON
    /// examples, `{}`) pass through literally.
    pub fn render(&self, vars: &HashMap<String, String>) -> Result<String, AppError> {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) if end > 0 && is_identifier(&after[..end]) => {
                    let key = &after[..end];
                    let value = vars
                        .get(key)
                        .or_else(|| self.partials.get(key))
                        .ok_or_else(|| AppError::MissingVariable(key.to_string()))?;
                    out.push_str(value);
                    rest = &after[end + 1..];
                }
                _ => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        Ok(out)
    }
}

fn is_identifier(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
