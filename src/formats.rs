//! Format trait and implementations for documents that host summary blocks.
//!
//! A format supplies the tree-sitter grammar and the query that locates fenced blocks, so the
//! block processor does not need to know how a particular markup language spells them.

pub mod markdown;

/// Tree-sitter grammar and queries for one document format.
pub trait Format {
    /// Grammar used to parse host documents.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing `@block` (the whole fence), `@lang` (its info string language) and an
    /// optional `@body` (the fenced text).
    fn block_query(&self) -> &str;
}
