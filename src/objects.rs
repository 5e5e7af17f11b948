// ABOUTME: On-slide object resolution for the vitality application
// ABOUTME: Carries identified objects over from the previous slide and merges overrides

use crate::defaults::{self, ResolvedDefaults};
use crate::errors::{Result, VitalityError};
use crate::model::SlideObject;
use crate::shorthand::{coerce_lines, present};
use log::debug;
use serde_json::{json, Map, Value};

const HTML_ATTRS: &[&str] = &["x", "y", "height", "width"];

/// Resolve a slide's `objects` declarations against the objects of the
/// slide emitted immediately before it.
///
/// `background_color` is the current slide's resolved background, used as
/// the fill of html objects that do not set one.
pub fn carry_objects(
    declarations: &Value,
    previous: &[SlideObject],
    defaults: &ResolvedDefaults,
    background_color: &Value,
    slide: usize,
) -> Result<Vec<SlideObject>> {
    let entries = match declarations {
        Value::Null => return Ok(Vec::new()),
        Value::Array(entries) => entries,
        _ => return Err(VitalityError::invalid(slide, "objects", "a list")),
    };

    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| match entry {
            Value::Object(declaration) => resolve_object(
                declaration,
                previous,
                defaults,
                background_color,
                slide,
                position,
            ),
            _ => Err(VitalityError::invalid(
                slide,
                &format!("objects[{}]", position),
                "a mapping",
            )),
        })
        .collect()
}

fn resolve_object(
    declaration: &Map<String, Value>,
    previous: &[SlideObject],
    defaults: &ResolvedDefaults,
    background_color: &Value,
    slide: usize,
    position: usize,
) -> Result<SlideObject> {
    let field = |name: &str| format!("objects[{}].{}", position, name);
    let id = present(declaration, "id");

    let prior = id.and_then(|id| {
        previous
            .iter()
            .rev()
            .find(|object| object.id.as_ref() == Some(id))
    });
    let mut object = match prior {
        Some(prior) => {
            debug!("Slide {}: carrying object {} forward", slide, prior.id.as_ref().unwrap_or(&Value::Null));
            prior.clone()
        }
        None => SlideObject::default(),
    };

    // Builds are declared per slide and never inherited.
    object.build = None;

    merge_mapping(&mut object.attrs, declaration, "attrs", slide, &field("attrs"))?;
    merge_mapping(&mut object.style, declaration, "style", slide, &field("style"))?;

    if let Some(id) = id {
        object.id = Some(id.clone());
    }
    if let Some(kind) = present(declaration, "type") {
        object.kind = Some(kind.clone());
    }
    if let Some(length) = present(declaration, "transition_length") {
        object.transition_length = length.clone();
    }
    if let Some(build) = present(declaration, "build") {
        object.build = Some(build.clone());
    }
    if let Some(text) = present(declaration, "text") {
        object.text = Some(coerce_lines(text, slide, &field("text"))?);
    }
    if object.transition_length.is_null() {
        object.transition_length = defaults.get(defaults::TRANSITION_LENGTH);
    }

    if object.is_html() {
        object = html_object(object, declaration, defaults, background_color);
    }
    Ok(object)
}

/// Key-level merge of one of the object's sub-mappings.
fn merge_mapping(
    target: &mut Map<String, Value>,
    declaration: &Map<String, Value>,
    key: &str,
    slide: usize,
    field: &str,
) -> Result<()> {
    match present(declaration, key) {
        None => Ok(()),
        Some(Value::Object(overrides)) => {
            for (name, value) in overrides {
                target.insert(name.clone(), value.clone());
            }
            Ok(())
        }
        Some(_) => Err(VitalityError::invalid(slide, field, "a mapping")),
    }
}

/// Restrict an html object to the fields the renderer positions it with.
fn html_object(
    mut object: SlideObject,
    declaration: &Map<String, Value>,
    defaults: &ResolvedDefaults,
    background_color: &Value,
) -> SlideObject {
    let attr_defaults = [json!(0), json!(0), json!("100%"), json!("100%")];
    let mut attrs = Map::new();
    for (name, default) in HTML_ATTRS.iter().zip(attr_defaults) {
        let value = present(&object.attrs, name).cloned().unwrap_or(default);
        attrs.insert(name.to_string(), value);
    }

    let mut style = Map::new();
    style.insert(
        "fill".to_string(),
        present(&object.style, "fill")
            .cloned()
            .unwrap_or_else(|| background_color.clone()),
    );
    style.insert(
        "zoom".to_string(),
        present(&object.style, "zoom")
            .cloned()
            .unwrap_or_else(|| defaults.get(defaults::HTML_ZOOM)),
    );

    object.content = Some(
        present(declaration, "html")
            .cloned()
            .or(object.content.take())
            .unwrap_or_else(|| Value::String(String::new())),
    );
    object.attrs = attrs;
    object.style = style;
    object
}
