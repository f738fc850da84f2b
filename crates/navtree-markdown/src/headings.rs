//! Heading extraction from markdown content.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// A heading found in a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (1-6).
    pub level: u8,
    /// Plain heading text.
    pub text: String,
    /// Explicit `{#id}` attribute, if any.
    pub id: Option<String>,
}

/// Headings of one page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageHeadings {
    /// Text of the first H1 heading.
    pub title: Option<String>,
    /// All other headings in document order.
    pub sections: Vec<Heading>,
}

/// Extract the title and section headings from markdown.
///
/// The first H1 becomes the title and is not listed as a section. Inline
/// formatting is dropped; code spans keep their text.
#[must_use]
pub fn extract_headings(content: &str) -> PageHeadings {
    let parser = Parser::new_ext(content, Options::ENABLE_HEADING_ATTRIBUTES);
    let mut result = PageHeadings::default();
    let mut current: Option<Heading> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                current = Some(Heading {
                    level: heading_level_to_num(level),
                    text: String::new(),
                    id: id.map(|id| id.to_string()),
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push(' ');
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(mut heading) = current.take() {
                    heading.text = heading.text.trim().to_owned();
                    if heading.level == 1 && result.title.is_none() {
                        result.title = Some(heading.text);
                    } else {
                        result.sections.push(heading);
                    }
                }
            }
            _ => {}
        }
    }

    result
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
