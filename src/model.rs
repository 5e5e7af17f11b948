// ABOUTME: Resolved presentation model handed to the renderer
// ABOUTME: Plain serializable data: slides, objects, defaults and the identifier index

use crate::defaults::ResolvedDefaults;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The fully resolved presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationModel {
    pub title: Value,
    pub defaults: ResolvedDefaults,
    pub fonts: Vec<Value>,
    pub size: CanvasSize,
    pub slides: Vec<Slide>,
    /// Upper-cased slide identifier to 0-based slide position.
    pub slide_ids: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasSize {
    pub width: Value,
    pub height: Value,
}

/// One canonical slide. The layout-specific fields live in `layout`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    #[serde(rename = "backgroundColor")]
    pub background_color: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub objects: Vec<SlideObject>,
    #[serde(flatten)]
    pub layout: SlideLayout,
}

impl Slide {
    pub fn kind(&self) -> &'static str {
        match self.layout {
            SlideLayout::Blank => "blank",
            SlideLayout::Section(_) => "section",
            SlideLayout::Title { .. } => "title",
            SlideLayout::Bullets { .. } => "bullets",
            SlideLayout::Html { .. } => "html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "lowercase")]
pub enum SlideLayout {
    Blank,
    Section(TextBlock),
    Title { title: TextBlock, subtitle: LinesBlock },
    Bullets { title: HeadingBlock, bullets: BulletsBlock },
    Html { content: Value },
}

/// Single text run with its resolved styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub content: Value,
    pub color: Value,
    pub font: Value,
    pub size: Value,
}

/// Multi-line text, one entry per rendered line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinesBlock {
    pub content: Vec<Value>,
    pub color: Value,
    pub font: Value,
    pub size: Value,
}

/// Bullets slide heading, positioned by its padding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingBlock {
    pub content: Value,
    pub color: Value,
    pub font: Value,
    pub size: Value,
    pub padding_left: Value,
    pub padding_top: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulletsBlock {
    pub content: Vec<BulletItem>,
    pub build: Value,
    pub bullet: Value,
    pub color: Value,
    pub font: Value,
    pub size: Value,
    pub padding_left: Value,
    pub spacing: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulletItem {
    pub text: Value,
    pub color: Value,
}

/// An on-slide object, possibly carried over from the previous slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlideObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,
    pub attrs: Map<String, Value>,
    pub style: Map<String, Value>,
    pub transition_length: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

impl SlideObject {
    pub fn is_html(&self) -> bool {
        matches!(&self.kind, Some(Value::String(kind)) if kind == "html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slide_serializes_with_layout_tag() {
        let slide = Slide {
            background_color: json!("black"),
            id: Some(json!("intro")),
            objects: Vec::new(),
            layout: SlideLayout::Section(TextBlock {
                content: json!("Hello"),
                color: json!("white"),
                font: json!("sans-serif"),
                size: json!(100),
            }),
        };

        let value = serde_json::to_value(&slide).unwrap();
        assert_eq!(
            value,
            json!({
                "backgroundColor": "black",
                "id": "intro",
                "objects": [],
                "layout": "section",
                "content": "Hello",
                "color": "white",
                "font": "sans-serif",
                "size": 100
            })
        );
    }

    #[test]
    fn test_blank_slide_omits_missing_id() {
        let slide = Slide {
            background_color: json!("black"),
            id: None,
            objects: Vec::new(),
            layout: SlideLayout::Blank,
        };
        let value = serde_json::to_value(&slide).unwrap();
        assert_eq!(
            value,
            json!({"backgroundColor": "black", "objects": [], "layout": "blank"})
        );
        assert_eq!(slide.kind(), "blank");
    }

    #[test]
    fn test_object_type_is_renamed() {
        let object = SlideObject {
            kind: Some(json!("circle")),
            transition_length: json!(500),
            ..Default::default()
        };
        let value = serde_json::to_value(&object).unwrap();
        assert_eq!(value["type"], json!("circle"));
        assert!(value.get("build").is_none());
        assert!(!object.is_html());
    }
}
