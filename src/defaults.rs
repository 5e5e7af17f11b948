// ABOUTME: Default styling values for the vitality application
// ABOUTME: Merges document-level overrides onto the built-in baseline

use log::{debug, warn};
use serde::Serialize;
use serde_json::{json, Map, Value};

pub const BACKGROUND_COLOR: &str = "background_color";
pub const COLOR: &str = "color";
pub const FONT: &str = "font";
pub const SECTION_SIZE: &str = "section_size";
pub const TITLE_SIZE: &str = "title_size";
pub const SUBTITLE_SIZE: &str = "subtitle_size";
pub const BULLETS_TITLE_SIZE: &str = "bullets_title_size";
pub const BULLETS_SIZE: &str = "bullets_size";
pub const TITLE_PADDING_LEFT: &str = "title_padding_left";
pub const TITLE_PADDING_TOP: &str = "title_padding_top";
pub const BULLET: &str = "bullet";
pub const BULLETS_SPACING: &str = "bullets_spacing";
pub const BUILD_BULLETS: &str = "build_bullets";
pub const TRANSITION_LENGTH: &str = "transition_length";
pub const HTML_ZOOM: &str = "html_zoom";

pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;

/// The built-in baseline. Every key listed here is present after resolution.
pub fn baseline() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(BACKGROUND_COLOR.to_string(), json!("black"));
    map.insert(COLOR.to_string(), json!("white"));
    map.insert(FONT.to_string(), json!("sans-serif"));
    map.insert(SECTION_SIZE.to_string(), json!(100));
    map.insert(TITLE_SIZE.to_string(), json!(120));
    map.insert(SUBTITLE_SIZE.to_string(), json!(60));
    map.insert(BULLETS_TITLE_SIZE.to_string(), json!(80));
    map.insert(BULLETS_SIZE.to_string(), json!(50));
    map.insert(TITLE_PADDING_LEFT.to_string(), json!(100));
    map.insert(TITLE_PADDING_TOP.to_string(), json!(100));
    map.insert(BULLET.to_string(), json!("• "));
    map.insert(BULLETS_SPACING.to_string(), json!(20));
    map.insert(BUILD_BULLETS.to_string(), json!(false));
    map.insert(TRANSITION_LENGTH.to_string(), json!(500));
    map.insert(HTML_ZOOM.to_string(), json!("220%"));
    map
}

/// Flat mapping of style parameters used as the last fallback for every slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedDefaults(Map<String, Value>);

impl ResolvedDefaults {
    /// Look up a resolved value. Baseline keys always resolve; unknown keys yield null.
    pub fn get(&self, key: &str) -> Value {
        self.0.get(key).cloned().unwrap_or(Value::Null)
    }

    #[cfg(test)]
    fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[cfg(test)]
    fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl Default for ResolvedDefaults {
    fn default() -> Self {
        Self(baseline())
    }
}

/// Merge a document's `defaults` mapping onto the baseline, key by key.
///
/// Keys unknown to the baseline are kept verbatim. Values are not type-checked.
pub fn resolve_defaults(overrides: Option<&Value>) -> ResolvedDefaults {
    let mut resolved = baseline();
    match overrides {
        Some(Value::Object(map)) => {
            for (key, value) in map {
                debug!("Default override: {} = {}", key, value);
                resolved.insert(key.clone(), value.clone());
            }
        }
        None | Some(Value::Null) => {}
        Some(other) => {
            warn!("Ignoring `defaults` that is not a mapping: {}", other);
        }
    }
    ResolvedDefaults(resolved)
}
