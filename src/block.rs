//! Summary blocks: the trigger that asks for an aggregation.
//!
//! A host note requests a summary with a fenced code block whose info string names the block
//! language (`daily-summary` by default) and whose body is the section title to collect:
//!
//! ````markdown
//! ```daily-summary
//! Daily
//! ```
//! ````
//!
//! Expanding a note replaces each such block with the aggregated text, searching every note
//! except the host itself.

use crate::aggregate::Aggregator;
use crate::error::{Error, Result};
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::vault::DocumentStore;
use std::ops::Range;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

/// Info string language that marks a summary block.
pub const DEFAULT_BLOCK_LANGUAGE: &str = "daily-summary";

#[derive(Clone, Debug, PartialEq, Eq)]
/// A summary block found in a host note.
pub struct Block {
    /// Byte range of the whole fenced block, fences included.
    pub range: Range<usize>,
    /// Fenced text with container prefixes removed, untrimmed.
    pub source: String,
}

impl Block {
    #[must_use]
    /// Section title the block asks for.
    pub fn title(&self) -> &str {
        self.source.trim()
    }
}

/// Render the output of one summary block whose body is `source`, hosted by `host`.
///
/// # Errors
///
/// Returns an error if the store cannot be listed.
pub fn render_block<S: DocumentStore + ?Sized>(
    aggregator: &Aggregator<'_, S>,
    source: &str,
    host: &str,
) -> Result<String> {
    aggregator.render(source.trim(), host)
}

/// Text of a fenced body with the container prefixes (`> `, list indentation) of each line
/// removed.
fn strip_continuations(body: Node<'_>, text: &str) -> String {
    let mut cuts = Vec::new();
    let mut stack = vec![body];
    while let Some(node) = stack.pop() {
        if node.kind() == "block_continuation" {
            cuts.push(node.byte_range());
            continue;
        }
        let mut walker = node.walk();
        stack.extend(node.children(&mut walker));
    }
    cuts.sort_by_key(|cut| cut.start);

    let mut out = String::new();
    let mut pos = body.start_byte();
    for cut in cuts {
        out.push_str(text.get(pos..cut.start).unwrap_or_default());
        pos = pos.max(cut.end);
    }
    out.push_str(text.get(pos..body.end_byte()).unwrap_or_default());
    out
}

/// Prefix to repeat on continuation lines of a block starting at byte `start`.
///
/// Quote markers and indentation are kept; list markers become spaces of the same width.
fn continuation_prefix(text: &str, start: usize) -> String {
    let line_start = text[..start].rfind('\n').map_or(0, |i| i + 1);
    text[line_start..start]
        .chars()
        .map(|c| if c == '>' || c.is_whitespace() { c } else { ' ' })
        .collect()
}

/// Put `prefix` in front of every line of `rendered` after the first.
fn reindent(rendered: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return rendered.to_string();
    }
    let mut out = rendered.replace('\n', &format!("\n{prefix}"));
    if rendered.ends_with('\n') {
        out.truncate(out.len() - prefix.len());
    }
    out
}

/// Locates summary blocks in host notes with a tree-sitter query.
pub struct BlockProcessor<F: Format = MarkdownFormat> {
    format: F,
    language: String,
}

impl BlockProcessor<MarkdownFormat> {
    #[must_use]
    /// Markdown processor for blocks tagged `language`.
    pub fn markdown(language: impl Into<String>) -> Self {
        Self::new(MarkdownFormat, language)
    }
}

impl<F: Format> BlockProcessor<F> {
    #[must_use]
    /// Processor using `format` for blocks tagged `language`.
    pub fn new(format: F, language: impl Into<String>) -> Self {
        Self {
            format,
            language: language.into(),
        }
    }

    /// Summary blocks in `text`, in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar or query cannot be loaded, or parsing yields no tree.
    pub fn find_blocks(&self, text: &str) -> Result<Vec<Block>> {
        let language = self.format.language();
        let mut parser = Parser::new();
        parser.set_language(&language)?;
        let tree = parser
            .parse(text, None)
            .ok_or_else(|| Error::Parse("host note".to_string()))?;

        let query = Query::new(&language, self.format.block_query())?;
        let names = query.capture_names();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), text.as_bytes());

        let mut blocks = Vec::new();
        while let Some(m) = matches.next() {
            let mut range = None;
            let mut tag = None;
            let mut source = String::new();
            for capture in m.captures {
                let node_range = capture.node.byte_range();
                let node_text = text.get(node_range.clone()).unwrap_or_default();
                match names.get(capture.index as usize).copied() {
                    Some("block") => range = Some(node_range),
                    Some("lang") => tag = Some(node_text),
                    Some("body") => source = strip_continuations(capture.node, text),
                    _ => {}
                }
            }
            if let (Some(range), Some(tag)) = (range, tag) {
                if tag == self.language {
                    blocks.push(Block { range, source });
                }
            }
        }

        blocks.sort_by_key(|block| block.range.start);
        blocks.dedup_by_key(|block| block.range.start);
        Ok(blocks)
    }

    /// Replace every summary block in the host note `text` with its aggregated output.
    ///
    /// # Errors
    ///
    /// Returns an error if blocks cannot be located or the store cannot be listed.
    pub fn expand<S: DocumentStore + ?Sized>(
        &self,
        aggregator: &Aggregator<'_, S>,
        host: &str,
        text: &str,
    ) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for block in self.find_blocks(text)? {
            if block.range.start < cursor {
                continue;
            }
            out.push_str(&text[cursor..block.range.start]);
            let prefix = continuation_prefix(text, block.range.start);
            let rendered = render_block(aggregator, &block.source, host)?;
            out.push_str(&reindent(&rendered, &prefix));
            if text[block.range.clone()].ends_with('\n') && !rendered.ends_with('\n') {
                out.push('\n');
            }
            cursor = block.range.end;
        }
        out.push_str(&text[cursor..]);
        Ok(out)
    }
}

#[cfg(test)]
#[path = "tests/block.rs"]
mod tests;
