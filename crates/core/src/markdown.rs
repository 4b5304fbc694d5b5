//! reveal-hugo markdown output.
//!
//! Generates one markdown document per presentation: a TOML front matter
//! block followed by the slides, separated by horizontal rules.

use crate::config::ConvertOptions;
use crate::error::Result;
use crate::types::Slide;
use chrono::{DateTime, Utc};
use std::io::Write;

/// Summary used when no override is supplied.
pub const DEFAULT_SUMMARY: &str = "Just another presentation";

/// Delimiter line around the TOML front matter.
const FRONT_MATTER_DELIMITER: &str = "+++";

/// Written between consecutive slides.
const SLIDE_SEPARATOR: &str = "\n\n---\n\n";

/// Added once per outline nesting level.
const INDENT_UNIT: &str = "  ";

const NOTE_OPEN: &str = "{{% note %}}";
const NOTE_CLOSE: &str = "{{% /note %}}";

const LAYOUT: &str = "bundle";
const THEME: &str = "moon";
const TRANSITION: &str = "zoom";
const SLIDE_NUMBER: &str = "c/t";
const EMBEDDED: bool = true;

/// Destination for images referenced by slides.
///
/// The emitter hands over each image's container path and links to the name
/// the sink returns.
pub trait AssetSink {
    /// Export one resource and return the file name to link to.
    fn export(&mut self, resource: &str) -> Result<String>;
}

/// Front matter values for one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub summary: String,
    pub date: DateTime<Utc>,
}

impl FrontMatter {
    /// Resolve front matter from the run options.
    ///
    /// Without a title override the output file name is used; the parsed
    /// slide titles never feed the front matter.
    pub fn resolve(options: &ConvertOptions, output_name: &str, date: DateTime<Utc>) -> Self {
        Self {
            title: options
                .title
                .clone()
                .unwrap_or_else(|| output_name.to_string()),
            summary: options
                .summary
                .clone()
                .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
            date,
        }
    }

    /// Render the front matter block including both delimiters.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(FRONT_MATTER_DELIMITER);
        out.push('\n');
        out.push_str(&format!("title = {}\n", toml_string(&self.title)));
        out.push_str(&format!("summary = {}\n", toml_string(&self.summary)));
        out.push_str(&format!("date = {}\n", self.date.format("%Y-%m-%dT%H:%M:%SZ")));
        out.push_str(&format!("layout = {}\n", toml_string(LAYOUT)));
        out.push_str("outputs = [\"Reveal\"]\n");
        out.push('\n');
        out.push_str("[reveal_hugo]\n");
        out.push_str(&format!("\ttheme = {}\n", toml_string(THEME)));
        out.push_str(&format!("\ttransition = {}\n", toml_string(TRANSITION)));
        out.push_str(&format!("\tslide_number = {}\n", toml_string(SLIDE_NUMBER)));
        out.push_str(&format!("\tembedded = {}\n", EMBEDDED));
        out.push_str(FRONT_MATTER_DELIMITER);
        out.push('\n');
        out
    }
}

/// Quote a value as a TOML basic string.
fn toml_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Serializer for reveal-hugo compatible markdown.
#[derive(Debug, Clone, Default)]
pub struct MarkdownEmitter;

impl MarkdownEmitter {
    /// Create a new emitter.
    pub fn new() -> Self {
        Self
    }

    /// Write the front matter and all slides.
    ///
    /// Images are exported through `assets` as they are reached, so a failure
    /// part way leaves whatever was already written in place.
    pub fn emit<W, A>(
        &self,
        out: &mut W,
        front_matter: &FrontMatter,
        slides: &[Slide],
        assets: &mut A,
    ) -> Result<()>
    where
        W: Write,
        A: AssetSink + ?Sized,
    {
        out.write_all(front_matter.render().as_bytes())?;

        for (idx, slide) in slides.iter().enumerate() {
            if idx > 0 {
                out.write_all(SLIDE_SEPARATOR.as_bytes())?;
            }
            self.emit_slide(out, slide, assets)?;
        }

        out.flush()?;
        Ok(())
    }

    fn emit_slide<W, A>(&self, out: &mut W, slide: &Slide, assets: &mut A) -> Result<()>
    where
        W: Write,
        A: AssetSink + ?Sized,
    {
        if let Some(ref title) = slide.title {
            writeln!(out, "\n## {}", title)?;
        }

        if !slide.outline.is_empty() {
            out.write_all(b"\n")?;
            for entry in &slide.outline {
                writeln!(out, " {}* {}", INDENT_UNIT.repeat(entry.indent), entry.text)?;
            }
            out.write_all(b"\n")?;
        }

        for image in &slide.images {
            let link = assets.export(image)?;
            writeln!(out, "\n![]({})", link)?;
        }

        if !slide.extra.is_empty() {
            writeln!(out, "\n{}", slide.extra)?;
        }

        if let Some(ref notes) = slide.notes {
            writeln!(out, "\n{}", NOTE_OPEN)?;
            for note in notes {
                writeln!(out, " * {}", note)?;
            }
            writeln!(out, "{}", NOTE_CLOSE)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OutlineEntry, SlideBuilder};
    use chrono::TimeZone;

    /// Records exports and links to the base name, like the real exporter.
    #[derive(Default)]
    struct RecordingSink {
        exported: Vec<String>,
    }

    impl AssetSink for RecordingSink {
        fn export(&mut self, resource: &str) -> Result<String> {
            self.exported.push(resource.to_string());
            Ok(resource.rsplit('/').next().unwrap_or(resource).to_string())
        }
    }

    fn render(slides: &[Slide], sink: &mut RecordingSink) -> String {
        let mut buf = Vec::new();
        MarkdownEmitter::new()
            .emit(&mut buf, &front_matter(), slides, sink)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn front_matter() -> FrontMatter {
        FrontMatter {
            title: "deck.md".into(),
            summary: DEFAULT_SUMMARY.into(),
            date: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
        }
    }

    fn body(rendered: &str) -> &str {
        let end = rendered.find("+++\n").unwrap();
        let rest = &rendered[end + 4..];
        let close = rest.find("+++\n").unwrap();
        &rest[close + 4..]
    }

    #[test]
    fn test_front_matter_layout() {
        let expected = "+++\n\
            title = \"deck.md\"\n\
            summary = \"Just another presentation\"\n\
            date = 2024-03-09T14:05:07Z\n\
            layout = \"bundle\"\n\
            outputs = [\"Reveal\"]\n\
            \n\
            [reveal_hugo]\n\
            \ttheme = \"moon\"\n\
            \ttransition = \"zoom\"\n\
            \tslide_number = \"c/t\"\n\
            \tembedded = true\n\
            +++\n";
        assert_eq!(front_matter().render(), expected);
    }

    #[test]
    fn test_front_matter_resolve_overrides() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let defaults = FrontMatter::resolve(&ConvertOptions::default(), "talk.md", date);
        assert_eq!(defaults.title, "talk.md");
        assert_eq!(defaults.summary, DEFAULT_SUMMARY);

        let options = ConvertOptions::default()
            .with_title(Some("Keynote".into()))
            .with_summary(Some("Annual update".into()));
        let overridden = FrontMatter::resolve(&options, "talk.md", date);
        assert_eq!(overridden.title, "Keynote");
        assert_eq!(overridden.summary, "Annual update");
    }

    #[test]
    fn test_front_matter_escapes_quotes() {
        let mut fm = front_matter();
        fm.title = "The \"big\" one".into();
        assert!(fm.render().contains("title = \"The \\\"big\\\" one\"\n"));
    }

    #[test]
    fn test_empty_presentation_is_front_matter_only() {
        let mut sink = RecordingSink::default();
        let rendered = render(&[], &mut sink);
        assert_eq!(rendered, front_matter().render());
    }

    #[test]
    fn test_full_slide_layout() {
        let mut builder = SlideBuilder::new(None);
        builder.set_title("Intro");
        builder.extend_outline(vec![
            OutlineEntry::new(0, "Point A"),
            OutlineEntry::new(1, "Detail 1"),
        ]);
        builder.push_image("Pictures/chart.png");
        builder.append_extra("Footnote");
        builder.set_notes(vec!["Remember this".into()]);

        let mut sink = RecordingSink::default();
        let rendered = render(&[builder.build()], &mut sink);

        let expected = "\n## Intro\n\
            \n \
            * Point A\n   \
            * Detail 1\n\
            \n\
            \n![](chart.png)\n\
            \nFootnote\n\
            \n{{% note %}}\n \
            * Remember this\n\
            {{% /note %}}\n";
        assert_eq!(body(&rendered), expected);
        assert_eq!(sink.exported, vec!["Pictures/chart.png"]);
    }

    #[test]
    fn test_separator_only_between_slides() {
        let slides: Vec<Slide> = ["One", "Two", "Three"]
            .iter()
            .map(|t| {
                let mut b = SlideBuilder::new(None);
                b.set_title(*t);
                b.build()
            })
            .collect();

        let mut sink = RecordingSink::default();
        let rendered = render(&slides, &mut sink);

        assert_eq!(
            body(&rendered),
            "\n## One\n\n\n---\n\n\n## Two\n\n\n---\n\n\n## Three\n"
        );
    }

    #[test]
    fn test_notes_wrapper_presence() {
        let mut with_empty = SlideBuilder::new(None);
        with_empty.set_notes(Vec::new());
        let mut sink = RecordingSink::default();

        let rendered = render(&[with_empty.build()], &mut sink);
        assert_eq!(body(&rendered), "\n{{% note %}}\n{{% /note %}}\n");

        let rendered = render(&[Slide::default()], &mut sink);
        assert_eq!(body(&rendered), "");
    }

    #[test]
    fn test_empty_outline_and_extra_are_omitted() {
        let mut builder = SlideBuilder::new(None);
        builder.set_title("T");
        builder.extend_outline(Vec::new());
        builder.append_extra("");
        let mut sink = RecordingSink::default();
        let rendered = render(&[builder.build()], &mut sink);
        assert_eq!(body(&rendered), "\n## T\n");
    }

    #[test]
    fn test_indent_scales_with_level() {
        let mut builder = SlideBuilder::new(None);
        builder.extend_outline(vec![OutlineEntry::new(3, "deep")]);
        let mut sink = RecordingSink::default();
        let rendered = render(&[builder.build()], &mut sink);
        assert_eq!(body(&rendered), "\n       * deep\n\n");
    }

    #[test]
    fn test_images_link_exported_names_in_order() {
        let mut builder = SlideBuilder::new(None);
        builder.push_image("Pictures/a/logo.png");
        builder.push_image("Pictures/b/logo.png");
        let mut sink = RecordingSink::default();
        let rendered = render(&[builder.build()], &mut sink);
        assert_eq!(body(&rendered), "\n![](logo.png)\n\n![](logo.png)\n");
        assert_eq!(sink.exported, vec!["Pictures/a/logo.png", "Pictures/b/logo.png"]);
    }
}
