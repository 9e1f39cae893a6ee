//! Progress document updater.
//!
//! The document is a markdown file with task tables grouped under
//! `### <title> (<done>/<total>)` headers, plus a progress badge, a
//! `**Total Progress**` line and a glyph bar summarising all sections.
//!
//! [`update`] parses the text into typed lines, runs three passes over them
//! and renders the result:
//! 1. row status glyphs follow the completed identifier set
//! 2. section done counts are recounted from the rows (totals are kept)
//! 3. the global summary is re-rendered from the summed section counts
//!
//! Everything outside the rewritten fragments round-trips byte-for-byte.

mod line;
mod passes;
mod render;


use crate::error::Result;
use std::collections::BTreeSet;

// Re-export public API
pub use line::{Line, LineKind, Row, SectionHeader, Status, DONE_GLYPH, PENDING_GLYPH};
pub use passes::{
    update_row_statuses, update_section_counts, update_summary, SectionCount, Totals,
};
pub use render::{percent, progress_bar, DEFAULT_BAR_LENGTH};

/// A progress document as an ordered list of typed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Parse document text.
    ///
    /// # Returns
    ///
    /// * `Ok(Document)` - The classified lines
    /// * `Err(SyncError::ParseError)` - A section header has malformed counts
    pub fn parse(text: &str) -> Result<Self> {
        let lines = text
            .split_inclusive('\n')
            .enumerate()
            .map(|(i, raw)| Line::parse(raw, i + 1))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            line.render_into(&mut out);
        }
        out
    }
}

/// Options for [`update`].
#[derive(Debug, Clone, Copy)]
pub struct UpdateOptions {
    pub bar_length: usize,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            bar_length: DEFAULT_BAR_LENGTH,
        }
    }
}

/// Result of running all three passes.
#[derive(Debug, Clone)]
pub struct Update {
    pub text: String,
    pub totals: Totals,
    pub sections: Vec<SectionCount>,
    /// Number of rows whose status glyph flipped.
    pub rows_changed: usize,
}

impl Update {
    /// Whether the rendered text differs from `original`.
    pub fn changed_from(&self, original: &str) -> bool {
        self.text != original
    }
}

/// Rewrite `text` so it reflects the `completed` identifier set.
pub fn update(text: &str, completed: &BTreeSet<u64>, options: UpdateOptions) -> Result<Update> {
    let mut doc = Document::parse(text)?;

    let rows_changed = update_row_statuses(&mut doc, completed);
    let (totals, sections) = update_section_counts(&mut doc);
    update_summary(&mut doc, totals, options.bar_length);

    Ok(Update {
        text: doc.render(),
        totals,
        sections,
        rows_changed,
    })
}
