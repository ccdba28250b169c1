//! Markdown format implementation using tree-sitter-md.
//!
//! Only the block grammar is needed: fenced code blocks, their info string and their content
//! are all block-level nodes.

use crate::formats::Format;

/// Tree-sitter queries for fenced code blocks (```` ``` ```` or `~~~` fences).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn block_query(&self) -> &'static str {
        "(fenced_code_block (info_string (language) @lang) (code_fence_content)? @body) @block"
    }
}
