//! Paragraph stream representation for loaded documents.
//!
//! A document reaches the outline engine as a flat, materialized sequence of
//! paragraphs; materialized because the engine walks it twice (once to
//! measure digit widths, once to cut segments) and both passes must see
//! identical content. Styles follow the word-processor convention: `Heading
//! 1` is a top-level heading, `Heading 2` a sub-section, anything else is
//! body text.

use crate::error::{Error, Result};

/// One input unit of a loaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Paragraph text without markup.
    pub text: String,
    /// Style name as reported by the loader (for example `Heading 2`).
    pub style: String,
    /// Outline depth, present exactly when the style denotes a heading
    /// (1 = top level).
    pub heading_depth: Option<usize>,
}

impl Paragraph {
    /// Build a paragraph by classifying its style name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedHeadingStyle`] when the style claims to be
    /// a heading but its depth suffix is not a positive integer.
    pub fn classified(text: impl Into<String>, style: impl Into<String>) -> Result<Self> {
        let style = style.into();
        let heading_depth = heading_depth_from_style(&style)?;
        Ok(Self {
            text: text.into(),
            style,
            heading_depth,
        })
    }

    /// Whether this paragraph carries an outline depth.
    #[must_use]
    pub fn is_heading(&self) -> bool {
        self.heading_depth.is_some()
    }
}

/// Classify a style name into an outline depth.
///
/// Styles not starting with `Heading` are body text (`None`). Styles that do
/// start with `Heading` must carry an integer depth of at least 1; depth 0
/// is rejected because level 0 of the outline holds the file ordinal.
///
/// # Errors
///
/// Returns [`Error::MalformedHeadingStyle`] for a `Heading` style whose
/// suffix is missing, non-numeric, or zero.
pub fn heading_depth_from_style(style: &str) -> Result<Option<usize>> {
    let Some(suffix) = style.strip_prefix("Heading") else {
        return Ok(None);
    };
    match suffix.trim().parse::<usize>() {
        Ok(depth) if depth >= 1 => Ok(Some(depth)),
        _ => Err(Error::MalformedHeadingStyle {
            style: style.to_string(),
        }),
    }
}

/// A loaded document: a title and its materialized paragraph stream.
#[derive(Debug, Clone)]
pub struct Document {
    /// Title used for the pre-heading track name; loaders derive it from
    /// the file stem.
    pub title: String,
    /// Paragraphs in document order.
    pub paragraphs: Vec<Paragraph>,
}

#[cfg(test)]
#[path = "tests/paragraph.rs"]
mod tests;
