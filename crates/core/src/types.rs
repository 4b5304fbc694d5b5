//! Domain types for representing a parsed presentation.

use serde::{Deserialize, Serialize};

/// Represents an entire presentation with its parsed slides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presentation {
    /// Original container filename (without path).
    pub filename: String,

    /// Slides in document order.
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create a new, empty presentation for the given container.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            slides: Vec::new(),
        }
    }

    /// Add a slide to the presentation.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Total number of images referenced across all slides.
    pub fn image_count(&self) -> usize {
        self.slides.iter().map(|s| s.images.len()).sum()
    }
}

/// One outline bullet with its nesting depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// 0 at the outermost list level.
    pub indent: usize,

    /// Full text of the list item's paragraph.
    pub text: String,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(indent: usize, text: impl Into<String>) -> Self {
        Self {
            indent,
            text: text.into(),
        }
    }
}

/// A single parsed slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// The page's own name attribute, if any.
    pub name: Option<String>,

    /// Text of the title frame.
    pub title: Option<String>,

    /// Flattened bullets from every outline frame, in frame order.
    pub outline: Vec<OutlineEntry>,

    /// Container paths of embedded images, in frame order.
    pub images: Vec<String>,

    /// Text of all unclassified frames, concatenated without separators.
    pub extra: String,

    /// Presenter notes. `None` when the page has no notes container at all.
    pub notes: Option<Vec<String>>,
}

/// Accumulates a slide's content while its frames are visited.
///
/// The finished [`Slide`] is only produced by [`SlideBuilder::build`], so a
/// slide is never observed half-populated.
#[derive(Debug, Default)]
pub struct SlideBuilder {
    slide: Slide,
}

impl SlideBuilder {
    /// Start a slide with the page's name attribute.
    pub fn new(name: Option<String>) -> Self {
        Self {
            slide: Slide {
                name,
                ..Slide::default()
            },
        }
    }

    /// Set the slide title. A later title frame replaces an earlier one.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.slide.title = Some(title.into());
    }

    /// Append flattened outline entries.
    pub fn extend_outline(&mut self, entries: impl IntoIterator<Item = OutlineEntry>) {
        self.slide.outline.extend(entries);
    }

    /// Record an embedded image path.
    pub fn push_image(&mut self, path: impl Into<String>) {
        self.slide.images.push(path.into());
    }

    /// Append free text with no separator.
    pub fn append_extra(&mut self, text: &str) {
        self.slide.extra.push_str(text);
    }

    /// Record the presenter notes of a present notes container.
    pub fn set_notes(&mut self, notes: Vec<String>) {
        self.slide.notes = Some(notes);
    }

    /// Finish the slide.
    pub fn build(self) -> Slide {
        self.slide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_in_order() {
        let mut builder = SlideBuilder::new(Some("page1".into()));
        builder.extend_outline(vec![OutlineEntry::new(0, "A"), OutlineEntry::new(1, "a")]);
        builder.extend_outline(vec![OutlineEntry::new(0, "B")]);
        builder.push_image("Pictures/one.png");
        builder.push_image("Pictures/two.png");
        builder.append_extra("foo");
        builder.append_extra("bar");

        let slide = builder.build();
        assert_eq!(slide.name.as_deref(), Some("page1"));
        assert_eq!(
            slide.outline,
            vec![
                OutlineEntry::new(0, "A"),
                OutlineEntry::new(1, "a"),
                OutlineEntry::new(0, "B"),
            ]
        );
        assert_eq!(slide.images, vec!["Pictures/one.png", "Pictures/two.png"]);
        assert_eq!(slide.extra, "foobar");
        assert_eq!(slide.notes, None);
    }

    #[test]
    fn test_last_title_wins() {
        let mut builder = SlideBuilder::new(None);
        builder.set_title("First");
        builder.set_title("Second");
        assert_eq!(builder.build().title.as_deref(), Some("Second"));
    }

    #[test]
    fn test_empty_notes_are_distinct_from_absent() {
        let mut builder = SlideBuilder::new(None);
        builder.set_notes(Vec::new());
        assert_eq!(builder.build().notes, Some(Vec::new()));
        assert_eq!(SlideBuilder::new(None).build().notes, None);
    }

    #[test]
    fn test_presentation_image_count() {
        let mut presentation = Presentation::new("deck.odp");
        let mut builder = SlideBuilder::new(None);
        builder.push_image("Pictures/a.png");
        presentation.add_slide(builder.build());
        presentation.add_slide(Slide::default());
        assert_eq!(presentation.slides.len(), 2);
        assert_eq!(presentation.image_count(), 1);
    }
}
