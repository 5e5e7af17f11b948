// ABOUTME: Slide type dispatch for the vitality application
// ABOUTME: Classifies raw slide entries and routes them to the matching normalizer

use crate::defaults::ResolvedDefaults;
use crate::errors::{Result, VitalityError};
use crate::model::Slide;
use crate::objects::carry_objects;
use crate::shorthand::present;
use crate::slides;
use log::debug;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// The kinds of slide a raw entry can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideShape {
    Blank,
    Section,
    Title,
    Bullets,
    Html,
}

impl SlideShape {
    fn from_type(name: &str) -> Self {
        match name {
            "section" => SlideShape::Section,
            "title" => SlideShape::Title,
            "bullets" => SlideShape::Bullets,
            "html" => SlideShape::Html,
            _ => SlideShape::Blank,
        }
    }
}

/// Decide which normalizer handles a raw slide entry.
///
/// An explicit `type` wins. Without one, an `html` key means an html slide and
/// `title` plus `subtitle` mean a title slide; anything else is blank.
pub fn classify_slide(entry: &Value, index: usize) -> Result<SlideShape> {
    match entry {
        Value::Null => Ok(SlideShape::Blank),
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Ok(SlideShape::Section),
        Value::Object(map) => Ok(match present(map, "type") {
            Some(Value::String(name)) => SlideShape::from_type(name),
            Some(_) => SlideShape::Blank,
            None if present(map, "html").is_some() => SlideShape::Html,
            None if present(map, "title").is_some() && present(map, "subtitle").is_some() => {
                SlideShape::Title
            }
            None => SlideShape::Blank,
        }),
        Value::Array(_) => Err(VitalityError::invalid(
            index,
            "slide",
            "null, a string or a mapping",
        )),
    }
}

/// Resolve one raw slide entry into a canonical slide.
///
/// `previous` is the slide emitted just before this one; identified objects
/// are only ever carried over from it.
pub fn dispatch_slide(
    entry: &Value,
    index: usize,
    defaults: &ResolvedDefaults,
    previous: Option<&Slide>,
) -> Result<Slide> {
    let shape = classify_slide(entry, index)?;
    debug!("Slide {}: dispatching as {:?}", index, shape);

    let raw: Cow<'_, Map<String, Value>> = match entry {
        Value::Object(map) => Cow::Borrowed(map),
        Value::Null => Cow::Owned(Map::new()),
        text => {
            let mut map = Map::new();
            map.insert("text".to_string(), text.clone());
            Cow::Owned(map)
        }
    };

    let mut slide = match shape {
        SlideShape::Blank => slides::blank_slide(&raw, defaults),
        SlideShape::Section => slides::section_slide(&raw, defaults),
        SlideShape::Title => slides::title_slide(&raw, defaults, index)?,
        SlideShape::Bullets => slides::bullets_slide(&raw, defaults, index)?,
        SlideShape::Html => slides::html_slide(&raw, defaults, index)?,
    };

    if let Some(declarations) = present(&raw, "objects") {
        let prior = previous.map(|slide| slide.objects.as_slice()).unwrap_or(&[]);
        slide.objects = carry_objects(
            declarations,
            prior,
            defaults,
            &slide.background_color,
            index,
        )?;
    }

    debug!(
        "Slide {}: resolved as {} with {} objects",
        index,
        slide.kind(),
        slide.objects.len()
    );
    Ok(slide)
}
