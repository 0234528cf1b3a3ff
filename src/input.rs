//! Document discovery and paragraph extraction.
//!
//! Discovery mirrors a flat data directory: files matching the configured
//! extensions, dotfiles and editor lock files skipped, sorted so that every
//! run assigns the same ordinal to the same file. Extraction parses each
//! document once with the format's grammar and materializes the paragraph
//! stream. Code fences are not headings; the grammar, not a line scan,
//! decides.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::paragraph::{Document, Paragraph};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

/// Style name given to non-heading paragraphs.
pub const BODY_STYLE: &str = "Body Text";

/// Collect narratable documents from files and directories.
///
/// Directories are scanned one level deep. Names starting with `.` or `~$`
/// are skipped, and only the configured extensions match. The result is
/// sorted so file ordinals are deterministic across runs.
///
/// # Errors
///
/// Returns any directory listing failure.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in fs::read_dir(&path)? {
                let candidate = entry?.path();
                if candidate.is_file()
                    && !is_skipped(&candidate)
                    && matches_extension(&candidate, extensions)
                {
                    found.push(candidate);
                }
            }
        } else if !is_skipped(&path) && matches_extension(&path, extensions) {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

fn is_skipped(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.') || name.starts_with("~$"))
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
}

/// Load one document: read, extract the paragraph stream, and title it
/// after the file stem.
///
/// # Errors
///
/// Returns I/O failures, grammar or query setup failures, and
/// [`Error::MalformedHeadingStyle`] for a heading the classifier rejects.
pub fn load_document(path: &Path, format: &dyn Format) -> Result<Document> {
    let source = fs::read_to_string(path)?.replace("\r\n", "\n");
    let title = path.file_stem().map_or_else(
        || "untitled".to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    );
    let paragraphs = extract_paragraphs(&source, format)?;
    Ok(Document { title, paragraphs })
}

/// Extract the flat paragraph stream from source text.
///
/// Headings found by the format's query become `Heading {depth}` paragraphs;
/// the text between them splits into body paragraphs on blank lines. Styles
/// are routed through the classifier, so a heading it cannot accept fails
/// the whole load rather than degrading into body text.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the grammar or query cannot be set up, and
/// [`Error::MalformedHeadingStyle`] from classification.
pub fn extract_paragraphs(source: &str, format: &dyn Format) -> Result<Vec<Paragraph>> {
    let language = format.language();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| Error::Parse(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::Parse("parser produced no tree".to_string()))?;
    let query =
        Query::new(&language, format.heading_query()).map_err(|e| Error::Parse(e.to_string()))?;

    let mut headings: Vec<(usize, usize, String, String)> = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
    while let Some(found) = matches.next() {
        for capture in found.captures {
            headings.push(heading_parts(capture.node, source)?);
        }
    }
    headings.sort_by_key(|&(start, ..)| start);

    let mut paragraphs = Vec::new();
    let mut position = 0;
    for (start, end, style, title) in headings {
        push_body(&mut paragraphs, &source[position..start]);
        paragraphs.push(Paragraph::classified(title, style)?);
        position = end;
    }
    push_body(&mut paragraphs, &source[position..]);
    Ok(paragraphs)
}

/// Pull `(start, end, style, title)` out of one heading node.
fn heading_parts(node: Node<'_>, source: &str) -> Result<(usize, usize, String, String)> {
    let mut walk = node.walk();
    let mut style = None;
    let mut title = String::new();
    for child in node.named_children(&mut walk) {
        if child.kind().ends_with("_marker") {
            let hashes = source[child.byte_range()].matches('#').count();
            style = Some(format!("Heading {hashes}"));
        } else if child.kind() == "inline" {
            title = source[child.byte_range()].trim().to_string();
        }
    }
    let style = style.ok_or_else(|| {
        Error::Parse(format!(
            "heading without a depth marker: {:?}",
            &source[node.byte_range()]
        ))
    })?;
    Ok((node.start_byte(), node.end_byte(), style, title))
}

/// Split a non-heading chunk into body paragraphs on blank lines.
fn push_body(paragraphs: &mut Vec<Paragraph>, chunk: &str) {
    for block in chunk.split("\n\n") {
        let text = block.trim();
        if !text.is_empty() {
            paragraphs.push(Paragraph {
                text: text.to_string(),
                style: BODY_STYLE.to_string(),
                heading_depth: None,
            });
        }
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
