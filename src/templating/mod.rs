//! Filling `$NAME` templates from a flat JSON object, for generating
//! documents from boilerplate.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use tracing::debug;

mod template;

pub use template::Template;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDataError {
    pub problem: String,
}

impl fmt::Display for TemplateDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.problem)
    }
}

/// Turn JSON text into placeholder values. The data must be a single
/// object whose values are scalars; strings are used verbatim and other
/// scalars as their JSON text.
pub fn values(data: &str) -> Result<BTreeMap<String, String>, TemplateDataError> {
    let value: Value = serde_json::from_str(data).map_err(|error| TemplateDataError {
        problem: format!("Invalid JSON: {}", error),
    })?;

    let Value::Object(object) = value else {
        return Err(TemplateDataError {
            problem: "Template data must be a JSON object".to_string(),
        });
    };

    let mut result = BTreeMap::new();
    for (key, value) in object {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(TemplateDataError {
                    problem: format!("Value for '{}' is not a scalar", key),
                })
            }
        };
        result.insert(key, text);
    }

    debug!("Loaded {} template value(s)", result.len());
    Ok(result)
}

/// Render a template against JSON data in one step.
pub fn fill(template: &str, data: &str) -> Result<String, TemplateDataError> {
    let values = values(data)?;
    let template = Template::parse(template);

    let unfilled = template.unfilled(&values);
    if !unfilled.is_empty() {
        debug!(?unfilled, "Placeholders left as written");
    }

    Ok(template.fill(&values))
}
