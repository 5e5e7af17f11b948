// ABOUTME: Presentation resolution pipeline for the vitality application
// ABOUTME: Folds raw slide entries left to right into a resolved presentation model

use crate::defaults::{resolve_defaults, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::dispatch::dispatch_slide;
use crate::errors::{Result, VitalityError};
use crate::index::index_slide_ids;
use crate::model::{CanvasSize, PresentationModel, Slide};
use crate::shorthand::present;
use log::info;
use serde_json::{Map, Value};

/// Resolve a parsed presentation document into the model the renderer consumes.
///
/// Each slide only sees the slide emitted right before it. Any slide error
/// aborts the whole pass.
pub fn build_presentation(document: &Value) -> Result<PresentationModel> {
    let empty = Map::new();
    let root = match document {
        Value::Object(map) => map,
        Value::Null => &empty,
        _ => {
            return Err(VitalityError::InvalidDocument(
                "top level must be a mapping".to_string(),
            ))
        }
    };

    let defaults = resolve_defaults(root.get("defaults"));
    let fonts = match present(root, "fonts") {
        None => Vec::new(),
        Some(Value::Array(fonts)) => fonts.clone(),
        Some(Value::String(font)) => vec![Value::String(font.clone())],
        Some(_) => {
            return Err(VitalityError::InvalidDocument(
                "`fonts` must be a list".to_string(),
            ))
        }
    };
    let size = canvas_size(present(root, "size"))?;

    let entries = match present(root, "slides") {
        None => &[][..],
        Some(Value::Array(entries)) => entries.as_slice(),
        Some(_) => {
            return Err(VitalityError::InvalidDocument(
                "`slides` must be a list".to_string(),
            ))
        }
    };

    let mut slides: Vec<Slide> = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let slide = dispatch_slide(entry, index, &defaults, slides.last())?;
        slides.push(slide);
    }
    let slide_ids = index_slide_ids(&slides);
    info!(
        "Resolved {} slides ({} identified)",
        slides.len(),
        slide_ids.len()
    );

    Ok(PresentationModel {
        title: present(root, "title").cloned().unwrap_or(Value::Null),
        defaults,
        fonts,
        size,
        slides,
        slide_ids,
    })
}

fn canvas_size(size: Option<&Value>) -> Result<CanvasSize> {
    let empty = Map::new();
    let size = match size {
        None => &empty,
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(VitalityError::InvalidDocument(
                "`size` must be a mapping".to_string(),
            ))
        }
    };
    Ok(CanvasSize {
        width: present(size, "width")
            .cloned()
            .unwrap_or_else(|| Value::from(DEFAULT_WIDTH)),
        height: present(size, "height")
            .cloned()
            .unwrap_or_else(|| Value::from(DEFAULT_HEIGHT)),
    })
}
