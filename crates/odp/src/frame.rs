//! Classification of `draw:frame` elements and routing of their content.

use crate::list::flatten_list;
use crate::namespace::OdpNames;
use crate::xml::{joined_text, Element};
use odp_core::SlideBuilder;
use std::fmt;

/// What a frame contributes to its slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// `presentation:class="title"`: sets the slide title.
    Title,
    /// `presentation:class="outline"`: contributes bullet lists.
    Outline,
    /// Any other frame holding a `draw:image`.
    Image,
    /// Any other frame: free text.
    Text,
}

impl FrameKind {
    /// Decide a frame's kind from its class attribute, compared
    /// case-insensitively, and its children.
    pub fn classify(frame: &Element, names: &OdpNames) -> Self {
        let class = frame.attribute(&names.frame_class).map(str::to_lowercase);
        match class.as_deref() {
            Some("title") => FrameKind::Title,
            Some("outline") => FrameKind::Outline,
            _ if frame.find_child(&names.image).is_some() => FrameKind::Image,
            _ => FrameKind::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FrameKind::Title => "title",
            FrameKind::Outline => "outline",
            FrameKind::Image => "image",
            FrameKind::Text => "text",
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a frame and add its content to the slide.
///
/// The returned kind is only used for diagnostics.
pub fn apply_frame(frame: &Element, slide: &mut SlideBuilder, names: &OdpNames) -> FrameKind {
    let kind = FrameKind::classify(frame, names);

    match kind {
        FrameKind::Title => {
            slide.set_title(joined_text(frame.children_named(&names.text_box)));
        }
        FrameKind::Outline => {
            for text_box in frame.children_named(&names.text_box) {
                for list in text_box.children_named(&names.list) {
                    slide.extend_outline(flatten_list(list, 0, names));
                }
            }
        }
        FrameKind::Image => {
            if let Some(image) = frame.find_child(&names.image) {
                match image.attribute(&names.href) {
                    Some(href) => slide.push_image(href),
                    None => log::warn!("image frame without a link, skipping"),
                }
            }
        }
        FrameKind::Text => {
            slide.append_extra(&joined_text(frame.children_named(&names.text_box)));
        }
    }

    kind
}
