//! Presenter notes extraction from `presentation:notes`.

use crate::namespace::OdpNames;
use crate::xml::Element;

/// Extract the notes of a page's notes container.
///
/// Each child of each `draw:text-box` of each `draw:frame` (usually one
/// `text:p` per paragraph) becomes one note. A container without text
/// frames yields an empty list.
pub fn extract_notes(notes: &Element, names: &OdpNames) -> Vec<String> {
    let mut extracted = Vec::new();
    for frame in notes.children_named(&names.frame) {
        for text_box in frame.children_named(&names.text_box) {
            for paragraph in text_box.child_elements() {
                let text = paragraph.text();
                log::debug!("N: {}", text);
                extracted.push(text);
            }
        }
    }
    extracted
}
