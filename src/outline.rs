//! Outline numbering: the digit-width pre-scan and the multi-level counter.
//!
//! Track names must sort the same way as strings and as numbers, so the
//! digit width of every outline level has to be known before the first name
//! is generated. [`DepthWidths::measure`] is the read-only pre-scan that
//! finds the largest sibling run per level; [`OutlineCounter`] is the
//! second-pass state machine that turns heading transitions into zero-padded
//! labels.

use crate::paragraph::Paragraph;

/// Digit width per outline level, computed once per document.
///
/// Index 0 is the file level: its width comes from the total document count
/// of the run rather than from the pre-scan, so callers override it with
/// [`DepthWidths::with_file_count`].
#[derive(Debug, Clone)]
pub struct DepthWidths {
    widths: Vec<usize>,
}

impl DepthWidths {
    /// Measure the widest sibling run ever reached at each level
    /// `0..=cutoff`, as a decimal digit count (minimum 1).
    ///
    /// Headings deeper than `cutoff` never receive their own number and are
    /// ignored entirely. Moving to a shallower heading ends the sibling run
    /// at the depth being left; runs still open at end of stream are folded
    /// in before the width conversion, so a trailing run counts too.
    #[must_use]
    pub fn measure(paragraphs: &[Paragraph], cutoff: usize) -> Self {
        let mut maxes = vec![0usize; cutoff + 1];
        let mut counts = vec![0usize; cutoff + 1];
        let mut current = 0usize;

        for paragraph in paragraphs {
            let Some(depth) = paragraph.heading_depth else {
                continue;
            };
            if depth > cutoff {
                continue;
            }
            if depth > current {
                current = depth;
            } else if depth < current {
                maxes[current] = maxes[current].max(counts[current]);
                counts[current] = 0;
                current = depth;
            }
            counts[current] += 1;
        }
        for (max, count) in maxes.iter_mut().zip(&counts) {
            *max = (*max).max(*count);
        }

        Self {
            widths: maxes.into_iter().map(digits).collect(),
        }
    }

    /// Override the file level (index 0) with the digit width of the total
    /// number of documents in the run.
    #[must_use]
    pub fn with_file_count(mut self, total: usize) -> Self {
        self.widths[0] = digits(total);
        self
    }

    /// Digit width at `level`, or 1 when the level is out of range.
    #[must_use]
    pub fn level(&self, level: usize) -> usize {
        self.widths.get(level).copied().unwrap_or(1)
    }

    /// Number of levels covered (cutoff + 1).
    #[must_use]
    pub fn levels(&self) -> usize {
        self.widths.len()
    }
}

/// Decimal digit count with a floor of one (0 still prints one digit).
fn digits(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

/// Second-pass state machine: per-level sibling counters plus the depth of
/// the last heading seen.
///
/// Level 0 holds the file ordinal; it is seeded once per document and never
/// auto-incremented. Whenever level `d` increments, every deeper level is
/// reset to zero first, so sibling numbering restarts under each new parent.
#[derive(Debug)]
pub struct OutlineCounter {
    widths: DepthWidths,
    counters: Vec<usize>,
    current_depth: usize,
    trailing_zero: bool,
}

impl OutlineCounter {
    /// Start a counter for one document.
    ///
    /// The cutoff is implied by `widths` (levels minus one), which keeps the
    /// two passes agreeing on scope by construction. `ordinal` is the
    /// 1-based position of the document in the run.
    #[must_use]
    pub fn new(widths: DepthWidths, ordinal: usize, trailing_zero: bool) -> Self {
        let mut counters = vec![0usize; widths.levels()];
        counters[0] = ordinal;
        Self {
            widths,
            counters,
            current_depth: 0,
            trailing_zero,
        }
    }

    /// Deepest heading level that still opens a segment.
    #[must_use]
    pub fn cutoff(&self) -> usize {
        self.counters.len() - 1
    }

    /// Depth of the last heading seen, inside the cutoff or not.
    #[must_use]
    pub fn current_depth(&self) -> usize {
        self.current_depth
    }

    /// Label for the document-initial segment, before any heading is seen.
    #[must_use]
    pub fn initial_label(&self, title: &str) -> String {
        self.label(0, title)
    }

    /// Feed one heading. Returns the label for the segment it opens, or
    /// `None` when the heading sits deeper than the cutoff (no boundary;
    /// the heading reads as body text).
    pub fn observe_heading(&mut self, depth: usize, title: &str) -> Option<String> {
        self.current_depth = depth;
        if depth > self.cutoff() {
            return None;
        }
        for counter in &mut self.counters[depth + 1..] {
            *counter = 0;
        }
        self.counters[depth] += 1;
        Some(self.label(depth, title))
    }

    /// Render the zero-padded outline label for a boundary at `depth`.
    fn label(&self, depth: usize, title: &str) -> String {
        let mut parts: Vec<String> = self.counters[..=depth]
            .iter()
            .enumerate()
            .map(|(level, count)| {
                let width = self.widths.level(level);
                format!("{count:0width$}")
            })
            .collect();
        if self.trailing_zero && depth < self.cutoff() {
            let width = self.widths.level(depth + 1);
            parts.push(format!("{:0width$}", 0));
        }
        format!("{}. - {title}", parts.join("."))
    }
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
