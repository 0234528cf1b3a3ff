//! Segment assembly: cutting the paragraph stream at outline boundaries.
//!
//! Exactly one segment is open at any point of the walk. Heading paragraphs
//! inside the cutoff close it and open the next one; everything else (body
//! paragraphs and headings below the cutoff) appends to it. The emitted
//! texts, concatenated, reproduce the input paragraph texts with nothing
//! lost, duplicated, or reordered.

use crate::error::Result;
use crate::outline::OutlineCounter;
use crate::paragraph::Document;
use crate::sanitize::sanitize;
use std::mem;

/// A contiguous span of document text destined for one exported track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Sanitized hierarchical track name.
    pub name: String,
    /// Member paragraph texts joined with newlines, in document order.
    pub text: String,
}

/// Export seam: receives closed segments in document order.
///
/// Implementations own synthesis, encoding, and persistence. Whether an
/// empty segment becomes an artifact is the sink's decision, not the
/// walk's.
pub trait TrackSink {
    /// Handle one closed segment.
    ///
    /// # Errors
    ///
    /// Propagates whatever the export backend fails with; the walk stops at
    /// the first failure.
    fn emit(&mut self, segment: Segment) -> Result<()>;
}

/// Walk one document and emit its segments in order.
///
/// A segment opens under the default document label before any heading is
/// seen. At each in-scope heading the open segment closes and is emitted,
/// unless its text is empty (which happens when the document starts directly
/// with a heading), and a new one opens under the freshly incremented
/// outline label with the heading's own text as its first content. At end
/// of stream the open segment is emitted unconditionally, empty or not.
///
/// # Errors
///
/// Propagates sink failures and stops at the first one.
pub fn segment_document(
    document: &Document,
    counter: &mut OutlineCounter,
    sink: &mut dyn TrackSink,
) -> Result<()> {
    let mut name = sanitize(&counter.initial_label(&document.title));
    let mut body: Vec<&str> = Vec::new();

    for paragraph in &document.paragraphs {
        if let Some(depth) = paragraph.heading_depth {
            if let Some(label) = counter.observe_heading(depth, &paragraph.text) {
                let text = body.join("\n");
                body.clear();
                let closed = mem::replace(&mut name, sanitize(&label));
                if !text.is_empty() {
                    sink.emit(Segment { name: closed, text })?;
                }
            }
        }
        body.push(&paragraph.text);
    }

    sink.emit(Segment {
        name,
        text: body.join("\n"),
    })
}

#[cfg(test)]
#[path = "tests/segment.rs"]
mod tests;
