//! Section representation and the heading-delimited section parser.
//!
//! A section is a markdown heading together with the text beneath it. Parsing happens in two
//! passes: a line scan that emits one flat section per ATX heading, then a fold pass that absorbs
//! every nested subsection into the content of its nearest enclosing ancestor. Only the line rule
//! `^(#+)\s+(.+)$` is used to recognise headings, so fenced code or setext headings are not
//! special-cased.

use regex::Regex;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#+)\s+(.+)$").unwrap());

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading and the body text beneath it, including any folded subsections.
pub struct Section {
    /// Number of `#` markers in the heading (1 for top-level).
    pub level: usize,
    /// Heading text without markup symbols, trimmed.
    pub title: String,
    /// Body lines, each terminated by a newline, followed by folded subsection text.
    pub content: String,
}

impl Section {
    #[must_use]
    /// Open a section with no content yet.
    pub fn new(level: usize, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            content: String::new(),
        }
    }

    /// Append a nested section's title and content to this section's content.
    fn absorb(&mut self, nested: &Section) {
        self.content.push('\n');
        self.content.push_str(&nested.title);
        self.content.push('\n');
        self.content.push_str(&nested.content);
    }
}

#[must_use]
/// Recognise an ATX heading line, returning its level and trimmed title.
///
/// A `#` run must be followed by whitespace and some text; lines whose text trims to nothing
/// are treated as body content.
pub fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let title = caps.get(2)?.as_str().trim();
    if title.is_empty() {
        return None;
    }
    Some((level, title))
}

#[must_use]
/// Split a document into flat sections in document order, without folding.
///
/// Text before the first heading is discarded.
pub fn scan_sections(document: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;

    for line in document.split('\n') {
        if let Some((level, title)) = parse_heading(line) {
            if let Some(done) = current.take() {
                sections.push(done);
            }
            current = Some(Section::new(level, title));
        } else if let Some(section) = current.as_mut() {
            section.content.push_str(line);
            section.content.push('\n');
        }
    }

    if let Some(done) = current {
        sections.push(done);
    }

    sections
}

#[must_use]
/// Fold nested subsections into their nearest enclosing ancestor.
///
/// Walks the list backwards so that the deepest sections are absorbed first; each section then
/// takes every following retained section that is strictly deeper, stopping at the first sibling
/// or ancestor. Absorbed sections are tagged and dropped when the output is rebuilt.
pub fn fold_subsections(mut sections: Vec<Section>) -> Vec<Section> {
    let mut absorbed = vec![false; sections.len()];

    for i in (0..sections.len()).rev() {
        let (head, tail) = sections.split_at_mut(i + 1);
        let parent = &mut head[i];

        for (offset, next) in tail.iter().enumerate() {
            let j = i + 1 + offset;
            if absorbed[j] {
                continue;
            }
            if next.level <= parent.level {
                break;
            }
            parent.absorb(next);
            absorbed[j] = true;
        }
    }

    sections
        .into_iter()
        .zip(absorbed)
        .filter_map(|(section, gone)| (!gone).then_some(section))
        .collect()
}

#[must_use]
/// Parse a document into folded sections.
pub fn parse_sections(document: &str) -> Vec<Section> {
    fold_subsections(scan_sections(document))
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
