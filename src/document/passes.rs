//! The three rewrite passes over a parsed document.
//!
//! Order matters: section counts read the row glyphs written by the status
//! pass, and the summary pass renders the totals folded by the section pass.

use super::line::{LineKind, Status};
use super::render::{badge_fragment, bar_line, total_line};
use super::Document;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static BADGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[!\[Progress\]\(https://img\.shields\.io/badge/Progress-(\d+%2F\d+)-blue\)\]\(\)")
        .expect("Invalid badge regex")
});

/// Aggregate done/total across all sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub done: u64,
    pub total: u64,
}

impl Totals {
    pub fn percent(&self) -> u64 {
        super::render::percent(self.done, self.total)
    }

    fn with_section(self, section: &SectionCount) -> Self {
        Self {
            done: self.done + section.done,
            total: self.total + section.total,
        }
    }
}

/// Recomputed counts for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCount {
    pub title: String,
    /// DONE rows found in the section. May exceed `total`.
    pub done: u64,
    /// Declared total, copied from the header.
    pub total: u64,
}

/// Pass 1: set every row's glyph from the completed set.
///
/// Returns the number of rows whose glyph changed.
pub fn update_row_statuses(doc: &mut Document, completed: &BTreeSet<u64>) -> usize {
    let mut changed = 0;
    for line in &mut doc.lines {
        if let LineKind::Row(row) = &mut line.kind {
            let status = if completed.contains(&row.id) {
                Status::Done
            } else {
                Status::Pending
            };
            if row.status != status {
                row.status = status;
                changed += 1;
            }
        }
    }
    changed
}

/// Pass 2: recount DONE rows per section and rewrite each header's done count.
///
/// A section runs from its header to the next heading line (any line
/// starting with `#`) or the end of the document. Rows before the first
/// section header are not counted anywhere.
pub fn update_section_counts(doc: &mut Document) -> (Totals, Vec<SectionCount>) {
    let lines = &mut doc.lines;
    let mut totals = Totals::default();
    let mut sections = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if !matches!(lines[i].kind, LineKind::SectionHeader(_)) {
            i += 1;
            continue;
        }

        let mut end = i + 1;
        let mut done = 0;
        while end < lines.len() && !lines[end].is_heading() {
            if let LineKind::Row(row) = &lines[end].kind
                && row.status == Status::Done
            {
                done += 1;
            }
            end += 1;
        }

        if let LineKind::SectionHeader(header) = &mut lines[i].kind {
            header.done = done;
            let section = SectionCount {
                title: header.title().to_string(),
                done,
                total: header.total,
            };
            totals = totals.with_section(&section);
            sections.push(section);
        }
        i = end;
    }

    (totals, sections)
}

/// Pass 3: rewrite the badge fragment, the total progress line and the bar.
///
/// Lines that are missing from the document are simply not written.
pub fn update_summary(doc: &mut Document, totals: Totals, bar_length: usize) {
    for line in &mut doc.lines {
        match line.kind {
            LineKind::TotalLine => line.replace_text(total_line(totals.done, totals.total)),
            LineKind::Bar => line.replace_text(bar_line(totals.done, totals.total, bar_length)),
            LineKind::Other => {
                if let Some(fragment) = BADGE_REGEX
                    .captures(line.raw_text())
                    .and_then(|caps| caps.get(1))
                {
                    let text = line.raw_text();
                    let updated = format!(
                        "{}{}{}",
                        &text[..fragment.start()],
                        badge_fragment(totals.done, totals.total),
                        &text[fragment.end()..]
                    );
                    line.replace_text(updated);
                }
            }
            LineKind::Row(_) | LineKind::SectionHeader(_) => {}
        }
    }
}
