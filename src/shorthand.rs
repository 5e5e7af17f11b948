// ABOUTME: Shorthand expansion for author-written slide fields
// ABOUTME: Coerces bare strings, lists and mappings into one canonical record shape

use crate::errors::{Result, VitalityError};
use serde_json::{Map, Value};

/// A text-bearing field after shorthand expansion: its lines plus any
/// styling keys the author set on the structured form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextRecord {
    pub lines: Vec<Value>,
    pub props: Map<String, Value>,
}

impl TextRecord {
    /// An explicitly set property. Null counts as unset.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        present(&self.props, key)
    }

    /// Set `key` from a slide-level fallback unless the record already has its own value.
    pub fn with_fallback(mut self, key: &str, fallback: Option<&Value>) -> Self {
        if self.prop(key).is_none() {
            if let Some(value) = fallback {
                self.props.insert(key.to_string(), value.clone());
            }
        }
        self
    }

    /// Resolve `key` to the record's value, or the given default.
    pub fn resolve(&self, key: &str, default: Value) -> Value {
        self.prop(key).cloned().unwrap_or(default)
    }

    /// The lines collapsed into a single heading string.
    ///
    /// Several lines are joined with a space, where the renderer would
    /// otherwise show an array comma-joined.
    pub fn heading(&self) -> Value {
        match self.lines.as_slice() {
            [] => Value::String(String::new()),
            [single] => single.clone(),
            lines => Value::String(
                lines
                    .iter()
                    .map(scalar_text)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}

/// A single bullet entry after shorthand expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct BulletSpec {
    pub text: Value,
    pub color: Option<Value>,
}

/// Value of `key` in `map`, treating an explicit null as absent.
pub fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

/// Value of a field a normalizer cannot do without.
pub fn required<'a>(map: &'a Map<String, Value>, key: &str, slide: usize) -> Result<&'a Value> {
    present(map, key).ok_or_else(|| VitalityError::missing(slide, key))
}

/// Render a scalar as plain text; strings are taken without quotes.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

/// Expand a text list field: a bare scalar becomes a one-entry list.
pub fn coerce_lines(value: &Value, slide: usize, field: &str) -> Result<Vec<Value>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items.clone()),
        scalar if is_scalar(scalar) => Ok(vec![scalar.clone()]),
        _ => Err(VitalityError::invalid(
            slide,
            field,
            "a string or a list of strings",
        )),
    }
}

/// Expand a text-bearing field given as a bare string, a list of strings,
/// or a mapping with a `text` key.
pub fn coerce_text_record(value: &Value, slide: usize, field: &str) -> Result<TextRecord> {
    match value {
        Value::Object(map) => {
            let mut props = map.clone();
            let lines = match props.remove("text") {
                Some(text) => coerce_lines(&text, slide, &format!("{}.text", field))?,
                None => Vec::new(),
            };
            Ok(TextRecord { lines, props })
        }
        Value::Null => Err(VitalityError::missing(slide, field)),
        other => Ok(TextRecord {
            lines: coerce_lines(other, slide, field)?,
            props: Map::new(),
        }),
    }
}

/// Expand one bullet: a bare string becomes `{text}`.
pub fn coerce_bullet_item(item: &Value, slide: usize, position: usize) -> Result<BulletSpec> {
    match item {
        Value::Null => Ok(BulletSpec {
            text: Value::String(String::new()),
            color: None,
        }),
        Value::Object(map) => Ok(BulletSpec {
            text: present(map, "text")
                .cloned()
                .unwrap_or_else(|| Value::String(String::new())),
            color: present(map, "color").cloned(),
        }),
        scalar if is_scalar(scalar) => Ok(BulletSpec {
            text: scalar.clone(),
            color: None,
        }),
        _ => Err(VitalityError::invalid(
            slide,
            &format!("bullets[{}]", position),
            "a string or a mapping",
        )),
    }
}
