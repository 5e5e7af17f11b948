// ABOUTME: Slide identifier index for the vitality application
// ABOUTME: Maps upper-cased slide identifiers to slide positions for navigation

use crate::model::Slide;
use crate::shorthand::scalar_text;
use log::warn;
use std::collections::BTreeMap;

/// Build the identifier lookup over the finished slide sequence.
/// A later slide with the same identifier replaces the earlier entry.
pub fn index_slide_ids(slides: &[Slide]) -> BTreeMap<String, usize> {
    let mut index = BTreeMap::new();
    for (position, slide) in slides.iter().enumerate() {
        let Some(id) = slide.id.as_ref() else {
            continue;
        };
        let key = scalar_text(id).to_uppercase();
        if let Some(earlier) = index.insert(key.clone(), position) {
            warn!(
                "Slide identifier {} used by slides {} and {}; keeping {}",
                key, earlier, position, position
            );
        }
    }
    index
}
