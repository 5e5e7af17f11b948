// ABOUTME: Slide normalizers for the vitality application
// ABOUTME: Turn author shorthand into canonical slides with fully resolved styling

use crate::defaults::{self, ResolvedDefaults};
use crate::errors::Result;
use crate::model::{
    BulletItem, BulletsBlock, HeadingBlock, LinesBlock, Slide, SlideLayout, TextBlock,
};
use crate::shorthand::{coerce_bullet_item, coerce_text_record, present, required, TextRecord};
use serde_json::{Map, Value};

/// Slide-level keys that fill in text records which leave them unset.
const SHARED_TEXT_PROPS: &[&str] = &["color", "font"];

/// Common fields of every slide.
fn base_slide(raw: &Map<String, Value>, defaults: &ResolvedDefaults, layout: SlideLayout) -> Slide {
    Slide {
        background_color: present(raw, "background_color")
            .cloned()
            .unwrap_or_else(|| defaults.get(defaults::BACKGROUND_COLOR)),
        id: present(raw, "id").cloned(),
        objects: Vec::new(),
        layout,
    }
}

fn slide_value(raw: &Map<String, Value>, key: &str, defaults: &ResolvedDefaults, default_key: &str) -> Value {
    present(raw, key)
        .cloned()
        .unwrap_or_else(|| defaults.get(default_key))
}

/// Apply slide-level fallbacks to a text record.
fn with_slide_fallbacks(mut record: TextRecord, raw: &Map<String, Value>, keys: &[&str]) -> TextRecord {
    for key in keys {
        record = record.with_fallback(key, present(raw, key));
    }
    record
}

/// Empty slide with no content.
pub fn blank_slide(raw: &Map<String, Value>, defaults: &ResolvedDefaults) -> Slide {
    base_slide(raw, defaults, SlideLayout::Blank)
}

/// Section divider slide, a single heading read from `text`.
pub fn section_slide(raw: &Map<String, Value>, defaults: &ResolvedDefaults) -> Slide {
    let block = TextBlock {
        content: present(raw, "text")
            .cloned()
            .unwrap_or_else(|| Value::String(String::new())),
        color: slide_value(raw, "color", defaults, defaults::COLOR),
        font: slide_value(raw, "font", defaults, defaults::FONT),
        size: slide_value(raw, "size", defaults, defaults::SECTION_SIZE),
    };
    base_slide(raw, defaults, SlideLayout::Section(block))
}

/// Title slide with a heading and a multi-line subtitle.
///
/// Both `title` and `subtitle` are required.
pub fn title_slide(raw: &Map<String, Value>, defaults: &ResolvedDefaults, index: usize) -> Result<Slide> {
    let title = coerce_text_record(required(raw, "title", index)?, index, "title")?;
    let subtitle = coerce_text_record(required(raw, "subtitle", index)?, index, "subtitle")?;
    let title = with_slide_fallbacks(title, raw, SHARED_TEXT_PROPS);
    let subtitle = with_slide_fallbacks(subtitle, raw, SHARED_TEXT_PROPS);

    let layout = SlideLayout::Title {
        title: TextBlock {
            content: title.heading(),
            color: title.resolve("color", defaults.get(defaults::COLOR)),
            font: title.resolve("font", defaults.get(defaults::FONT)),
            size: title.resolve("size", defaults.get(defaults::TITLE_SIZE)),
        },
        subtitle: LinesBlock {
            color: subtitle.resolve("color", defaults.get(defaults::COLOR)),
            font: subtitle.resolve("font", defaults.get(defaults::FONT)),
            size: subtitle.resolve("size", defaults.get(defaults::SUBTITLE_SIZE)),
            content: subtitle.lines,
        },
    };
    Ok(base_slide(raw, defaults, layout))
}

/// Heading plus a list of bullet points.
///
/// The bullets' left padding falls back to the heading's resolved left padding;
/// there is no bullets-specific default for it.
pub fn bullets_slide(raw: &Map<String, Value>, defaults: &ResolvedDefaults, index: usize) -> Result<Slide> {
    const BULLETS_SHARED_PROPS: &[&str] = &["color", "font", "padding_left"];

    let title = coerce_text_record(required(raw, "title", index)?, index, "title")?;
    let bullets = coerce_text_record(required(raw, "bullets", index)?, index, "bullets")?;
    let title = with_slide_fallbacks(title, raw, BULLETS_SHARED_PROPS);
    let bullets = with_slide_fallbacks(bullets, raw, BULLETS_SHARED_PROPS);

    let heading = HeadingBlock {
        content: title.heading(),
        color: title.resolve("color", defaults.get(defaults::COLOR)),
        font: title.resolve("font", defaults.get(defaults::FONT)),
        size: title.resolve("size", defaults.get(defaults::BULLETS_TITLE_SIZE)),
        padding_left: title.resolve("padding_left", defaults.get(defaults::TITLE_PADDING_LEFT)),
        padding_top: title.resolve("padding_top", defaults.get(defaults::TITLE_PADDING_TOP)),
    };

    let color = bullets.resolve("color", defaults.get(defaults::COLOR));
    let content = bullets
        .lines
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let bullet = coerce_bullet_item(item, index, position)?;
            Ok(BulletItem {
                text: bullet.text,
                color: bullet.color.unwrap_or_else(|| color.clone()),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let block = BulletsBlock {
        content,
        build: bullets.resolve("build", defaults.get(defaults::BUILD_BULLETS)),
        bullet: bullets.resolve("bullet", defaults.get(defaults::BULLET)),
        font: bullets.resolve("font", defaults.get(defaults::FONT)),
        size: bullets.resolve("size", defaults.get(defaults::BULLETS_SIZE)),
        padding_left: bullets.resolve("padding_left", heading.padding_left.clone()),
        spacing: bullets.resolve("spacing", defaults.get(defaults::BULLETS_SPACING)),
        color,
    };

    Ok(base_slide(
        raw,
        defaults,
        SlideLayout::Bullets {
            title: heading,
            bullets: block,
        },
    ))
}

/// Raw markup slide; `html` is passed through untouched.
pub fn html_slide(raw: &Map<String, Value>, defaults: &ResolvedDefaults, index: usize) -> Result<Slide> {
    let content = required(raw, "html", index)?.clone();
    Ok(base_slide(raw, defaults, SlideLayout::Html { content }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VitalityError;
    use serde_json::json;

    fn raw(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_section_uses_defaults() {
        let defaults = ResolvedDefaults::default();
        let slide = section_slide(&raw(json!({"text": "Hello"})), &defaults);
        assert_eq!(slide.background_color, json!("black"));
        match slide.layout {
            SlideLayout::Section(block) => {
                assert_eq!(block.content, json!("Hello"));
                assert_eq!(block.color, json!("white"));
                assert_eq!(block.font, json!("sans-serif"));
                assert_eq!(block.size, json!(100));
            }
            other => panic!("unexpected layout {:?}", other),
        }
    }

    #[test]
    fn test_section_slide_overrides() {
        let defaults = ResolvedDefaults::default();
        let slide = section_slide(
            &raw(json!({"text": "Hi", "color": "red", "size": 10, "background_color": "blue", "id": "s1"})),
            &defaults,
        );
        assert_eq!(slide.background_color, json!("blue"));
        assert_eq!(slide.id, Some(json!("s1")));
        match slide.layout {
            SlideLayout::Section(block) => {
                assert_eq!(block.color, json!("red"));
                assert_eq!(block.size, json!(10));
            }
            other => panic!("unexpected layout {:?}", other),
        }
    }

    #[test]
    fn test_title_slide_precedence() {
        let defaults = ResolvedDefaults::default();
        let slide = title_slide(
            &raw(json!({
                "title": {"text": "Main", "color": "red"},
                "subtitle": "Sub",
                "color": "green",
                "font": "serif"
            })),
            &defaults,
            0,
        )
        .unwrap();

        match slide.layout {
            SlideLayout::Title { title, subtitle } => {
                assert_eq!(title.content, json!("Main"));
                assert_eq!(title.color, json!("red"));
                assert_eq!(title.font, json!("serif"));
                assert_eq!(title.size, json!(120));
                assert_eq!(subtitle.content, vec![json!("Sub")]);
                assert_eq!(subtitle.color, json!("green"));
                assert_eq!(subtitle.size, json!(60));
            }
            other => panic!("unexpected layout {:?}", other),
        }
    }

    #[test]
    fn test_title_slide_subtitle_size_is_independent() {
        let defaults = ResolvedDefaults::default();
        let slide = title_slide(
            &raw(json!({"title": {"text": "Main", "size": 200}, "subtitle": ["a", "b"]})),
            &defaults,
            0,
        )
        .unwrap();
        match slide.layout {
            SlideLayout::Title { title, subtitle } => {
                assert_eq!(title.size, json!(200));
                assert_eq!(subtitle.size, json!(60));
                assert_eq!(subtitle.content, vec![json!("a"), json!("b")]);
            }
            other => panic!("unexpected layout {:?}", other),
        }
    }

    #[test]
    fn test_title_slide_missing_subtitle_fails() {
        let defaults = ResolvedDefaults::default();
        let err = title_slide(&raw(json!({"title": "Only"})), &defaults, 7).unwrap_err();
        assert!(matches!(
            err,
            VitalityError::MissingField { slide: 7, ref field } if field == "subtitle"
        ));
    }

    #[test]
    fn test_bullets_shorthand() {
        let defaults = ResolvedDefaults::default();
        let slide = bullets_slide(
            &raw(json!({"title": "Points", "bullets": "Only point"})),
            &defaults,
            0,
        )
        .unwrap();
        match slide.layout {
            SlideLayout::Bullets { title, bullets } => {
                assert_eq!(title.content, json!("Points"));
                assert_eq!(title.size, json!(80));
                assert_eq!(
                    bullets.content,
                    vec![BulletItem {
                        text: json!("Only point"),
                        color: json!("white")
                    }]
                );
                assert_eq!(bullets.build, json!(false));
                assert_eq!(bullets.bullet, json!("• "));
                assert_eq!(bullets.spacing, json!(20));
                assert_eq!(bullets.size, json!(50));
            }
            other => panic!("unexpected layout {:?}", other),
        }
    }

    #[test]
    fn test_bullets_padding_follows_title_padding() {
        let defaults = ResolvedDefaults::default();
        let slide = bullets_slide(
            &raw(json!({
                "title": {"text": "Points", "padding_left": 250},
                "bullets": ["a", {"text": "b", "color": "red"}]
            })),
            &defaults,
            0,
        )
        .unwrap();
        match slide.layout {
            SlideLayout::Bullets { title, bullets } => {
                assert_eq!(title.padding_left, json!(250));
                assert_eq!(bullets.padding_left, json!(250));
                assert_eq!(bullets.content[0].color, json!("white"));
                assert_eq!(bullets.content[1].color, json!("red"));
            }
            other => panic!("unexpected layout {:?}", other),
        }
    }

    #[test]
    fn test_bullets_slide_level_padding_and_color() {
        let defaults = ResolvedDefaults::default();
        let slide = bullets_slide(
            &raw(json!({
                "title": "Points",
                "bullets": {"text": ["a"], "padding_left": 40, "build": true},
                "padding_left": 10,
                "color": "yellow"
            })),
            &defaults,
            0,
        )
        .unwrap();
        match slide.layout {
            SlideLayout::Bullets { title, bullets } => {
                assert_eq!(title.padding_left, json!(10));
                assert_eq!(title.color, json!("yellow"));
                assert_eq!(bullets.padding_left, json!(40));
                assert_eq!(bullets.build, json!(true));
                assert_eq!(bullets.content[0].color, json!("yellow"));
            }
            other => panic!("unexpected layout {:?}", other),
        }
    }

    #[test]
    fn test_html_slide_passthrough() {
        let defaults = ResolvedDefaults::default();
        let slide = html_slide(&raw(json!({"html": "<b>hi</b>"})), &defaults, 0).unwrap();
        assert_eq!(
            slide.layout,
            SlideLayout::Html {
                content: json!("<b>hi</b>")
            }
        );
        assert!(html_slide(&raw(json!({"type": "html"})), &defaults, 2).is_err());
    }
}
