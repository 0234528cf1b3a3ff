//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over different
//! document formats (markdown, org-mode, restructuredtext, etc.) by providing
//! tree-sitter queries specific to each format.

pub mod markdown;

/// Tree-sitter bindings for one document format.
pub trait Format {
    /// Grammar used to parse this format.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing every heading node that carries an outline depth.
    fn heading_query(&self) -> &str;
}
