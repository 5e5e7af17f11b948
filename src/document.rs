// ABOUTME: Presentation document loading for the vitality application
// ABOUTME: Reads YAML slide descriptions into a generic value tree

use crate::errors::{Result, VitalityError};
use crate::utils;
use log::{debug, error, info};
use regex::{Captures, Regex};
use serde_json::Value;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// A `!calc` tagged scalar in value position: after a key, a sequence dash,
/// or inside a flow collection. Quoted expressions keep their quotes out of
/// the captured text.
static CALC_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)(?P<lead>(?:^|[:\[\{,\-])[ \t]*)!calc[ \t]+(?:"(?P<dq>[^"\n]*)"|'(?P<sq>[^'\n]*)'|(?P<plain>[^,\]\}\n#]+))"#,
    )
    .unwrap()
});

/// Evaluate an arithmetic `!calc` expression into YAML number text.
/// Anything that does not evaluate to a finite number becomes `0`.
fn evaluate_calc(expression: &str) -> String {
    match evalexpr::eval(expression) {
        Ok(evalexpr::Value::Int(number)) => number.to_string(),
        Ok(evalexpr::Value::Float(number)) if number.is_finite() => number.to_string(),
        Ok(other) => {
            error!("!calc {} did not evaluate to a number: {}", expression, other);
            "0".to_string()
        }
        Err(e) => {
            error!("Failed to evaluate !calc {}: {}", expression, e);
            "0".to_string()
        }
    }
}

/// Replace every `!calc` scalar with its evaluated value.
fn expand_calc_tags(text: &str) -> Cow<'_, str> {
    CALC_TAG_REGEX.replace_all(text, |caps: &Captures| {
        let expression = caps
            .name("dq")
            .or_else(|| caps.name("sq"))
            .or_else(|| caps.name("plain"))
            .map(|m| m.as_str().trim())
            .unwrap_or_default();
        let value = evaluate_calc(expression);
        debug!("!calc {} = {}", expression, value);
        format!("{}{}", &caps["lead"], value)
    })
}

/// Parse YAML text into a value tree. An empty document yields null.
///
/// `!calc` scalars are evaluated as arithmetic before parsing.
pub fn parse_document(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    let text = expand_calc_tags(text);
    let document: Value =
        serde_saphyr::from_str(&text).map_err(|e| VitalityError::YamlError(e.to_string()))?;
    Ok(document)
}

/// Read and parse a presentation document from disk.
pub fn load_document(path: &Path) -> Result<Value> {
    info!("Loading presentation document: {:?}", path);
    utils::validate_file_exists(path)?;
    let text = fs::read_to_string(path).map_err(VitalityError::FileReadError)?;
    parse_document(&text)
}
