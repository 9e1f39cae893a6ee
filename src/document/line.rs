//! Typed line records for the progress document.
//!
//! Each physical line is classified once into a [`LineKind`]. Row and
//! section header lines are split into the parts that get rewritten and the
//! parts that are carried through verbatim, so rendering a line back gives
//! the original bytes unless one of the rewritable fields was changed.

use crate::error::{Result, SyncError};
use regex::Regex;
use std::sync::LazyLock;

/// Glyph marking a completed row.
pub const DONE_GLYPH: &str = "✅";

/// Glyph marking a row that is still pending.
pub const PENDING_GLYPH: &str = "⬜";

// | 49 | [Group Anagrams](./49.group-anagrams.md) | 🟡 Medium | ⬜ |
static ROW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\|\s*)(\d+)(\s*\|.+\|.+\|\s*)(✅|⬜)(\s*\|\s*)$").expect("Invalid row regex")
});

// ### Hashing (1/3)
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(### .+?\()(\d+)/(\d+)(\)\s*)$").expect("Invalid section header regex")
});

// Looks like a section header, but the counts are not plain integers.
static LOOSE_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^### .+\(([^()/]*)/([^()/]*)\)\s*$").expect("Invalid loose header regex")
});

static TOTAL_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*Total Progress\*\*:\s*\d+/\d+\s*\(\d+%\)\s*$")
        .expect("Invalid total progress regex")
});

static BAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^`[█░]+`\s*$").expect("Invalid progress bar regex"));

/// Completion status of a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    Pending,
}

impl Status {
    pub fn glyph(self) -> &'static str {
        match self {
            Status::Done => DONE_GLYPH,
            Status::Pending => PENDING_GLYPH,
        }
    }

    fn from_glyph(glyph: &str) -> Self {
        if glyph == DONE_GLYPH {
            Status::Done
        } else {
            Status::Pending
        }
    }
}

/// A task row: `| <id> | <cell> | <cell> | <glyph> |`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u64,
    pub status: Status,
    /// Everything before the glyph, including the id cell.
    prefix: String,
    /// Everything after the glyph.
    suffix: String,
}

/// A section header: `### <title> (<done>/<total>)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub done: u64,
    /// Declared total. Never rewritten.
    pub total: u64,
    /// `### <title> (`
    head: String,
    /// `)` plus any trailing whitespace.
    tail: String,
}

impl SectionHeader {
    /// The section title without the `### ` marker and the counts.
    pub fn title(&self) -> &str {
        self.head
            .strip_prefix("### ")
            .unwrap_or(&self.head)
            .trim_end_matches('(')
            .trim_end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Row(Row),
    SectionHeader(SectionHeader),
    /// `**Total Progress**: <done>/<total> (<pct>%)`
    TotalLine,
    /// A backtick-quoted run of bar glyphs.
    Bar,
    Other,
}

/// One physical line of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    /// Line content without its terminator.
    text: String,
    /// `"\n"`, `"\r\n"`, or empty for an unterminated last line.
    ending: String,
}

impl Line {
    /// Classify a single line. `number` is 1-based and only used in errors.
    pub fn parse(raw: &str, number: usize) -> Result<Self> {
        let (text, ending) = split_ending(raw);
        let kind = classify(text, number)?;
        Ok(Self {
            kind,
            text: text.to_string(),
            ending: ending.to_string(),
        })
    }

    /// Line content without its terminator, reflecting any rewrites.
    pub fn text(&self) -> String {
        match &self.kind {
            LineKind::Row(row) => format!("{}{}{}", row.prefix, row.status.glyph(), row.suffix),
            LineKind::SectionHeader(h) => format!("{}{}/{}{}", h.head, h.done, h.total, h.tail),
            _ => self.text.clone(),
        }
    }

    /// Replace the content of a non-row, non-header line.
    pub(crate) fn replace_text(&mut self, text: String) {
        self.text = text;
    }

    /// Raw stored text, only meaningful for `TotalLine`, `Bar` and `Other`.
    pub(crate) fn raw_text(&self) -> &str {
        &self.text
    }

    /// A heading of any level ends the current section.
    pub fn is_heading(&self) -> bool {
        self.text.starts_with('#')
    }

    pub fn render_into(&self, out: &mut String) {
        out.push_str(&self.text());
        out.push_str(&self.ending);
    }
}

fn split_ending(raw: &str) -> (&str, &str) {
    if let Some(text) = raw.strip_suffix("\r\n") {
        (text, "\r\n")
    } else if let Some(text) = raw.strip_suffix('\n') {
        (text, "\n")
    } else {
        (raw, "")
    }
}

fn classify(text: &str, number: usize) -> Result<LineKind> {
    if let Some(caps) = ROW_REGEX.captures(text) {
        // An id too large for u64 is not a task row we can match against notes.
        if let Ok(id) = caps[2].parse::<u64>() {
            return Ok(LineKind::Row(Row {
                id,
                status: Status::from_glyph(&caps[4]),
                prefix: format!("{}{}{}", &caps[1], &caps[2], &caps[3]),
                suffix: caps[5].to_string(),
            }));
        }
    }

    if let Some(caps) = HEADER_REGEX.captures(text) {
        let done = parse_count(&caps[2], number)?;
        let total = parse_count(&caps[3], number)?;
        return Ok(LineKind::SectionHeader(SectionHeader {
            done,
            total,
            head: caps[1].to_string(),
            tail: caps[4].to_string(),
        }));
    }

    if let Some(caps) = LOOSE_HEADER_REGEX.captures(text) {
        return Err(SyncError::ParseError {
            line: number,
            message: format!(
                "malformed section counts '({}/{})' in header: {}",
                &caps[1], &caps[2], text
            ),
        });
    }

    if TOTAL_LINE_REGEX.is_match(text) {
        return Ok(LineKind::TotalLine);
    }

    if BAR_REGEX.is_match(text) {
        return Ok(LineKind::Bar);
    }

    Ok(LineKind::Other)
}

fn parse_count(digits: &str, number: usize) -> Result<u64> {
    digits.parse::<u64>().map_err(|e| SyncError::ParseError {
        line: number,
        message: format!("section count '{}' is not a valid integer: {}", digits, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(text: &str) -> LineKind {
        Line::parse(text, 1).unwrap().kind
    }

    #[test]
    fn parses_pending_row() {
        let line = Line::parse(
            "| 49 | [Group Anagrams](./49.group-anagrams.md) | 🟡 Medium | ⬜ |\n",
            1,
        )
        .unwrap();
        match &line.kind {
            LineKind::Row(row) => {
                assert_eq!(row.id, 49);
                assert_eq!(row.status, Status::Pending);
            }
            other => panic!("expected row, got {:?}", other),
        }
    }

    #[test]
    fn parses_done_row_with_nested_punctuation() {
        let text = "| 1 | [Two | Sum (easy)](./1.two-sum.md) | 🟢 Easy | ✅ |";
        match kind(text) {
            LineKind::Row(row) => {
                assert_eq!(row.id, 1);
                assert_eq!(row.status, Status::Done);
            }
            other => panic!("expected row, got {:?}", other),
        }
    }

    #[test]
    fn row_round_trips_verbatim() {
        let raw = "|  7 |  [Reverse](./7.reverse.md)  | 🟡 Medium |  ⬜  |  \r\n";
        let line = Line::parse(raw, 1).unwrap();
        let mut out = String::new();
        line.render_into(&mut out);
        assert_eq!(out, raw);
    }

    #[test]
    fn table_header_and_separator_are_not_rows() {
        assert_eq!(kind("| # | Problem | Difficulty | Status |"), LineKind::Other);
        assert_eq!(kind("|---|---|---|---|"), LineKind::Other);
    }

    #[test]
    fn parses_section_header() {
        match kind("### Hashing (1/3)") {
            LineKind::SectionHeader(h) => {
                assert_eq!(h.done, 1);
                assert_eq!(h.total, 3);
                assert_eq!(h.title(), "Hashing");
            }
            other => panic!("expected header, got {:?}", other),
        }
    }

    #[test]
    fn header_title_may_contain_parentheses() {
        match kind("### Two Pointers (Part 1) (0/4)") {
            LineKind::SectionHeader(h) => {
                assert_eq!(h.total, 4);
                assert_eq!(h.title(), "Two Pointers (Part 1)");
            }
            other => panic!("expected header, got {:?}", other),
        }
    }

    #[test]
    fn header_with_non_numeric_counts_is_parse_error() {
        let err = Line::parse("### Hashing (a/3)\n", 12).unwrap_err();
        match err {
            SyncError::ParseError { line, .. } => assert_eq!(line, 12),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn header_with_overflowing_counts_is_parse_error() {
        let err = Line::parse("### Big (1/99999999999999999999999)", 3).unwrap_err();
        assert!(matches!(err, SyncError::ParseError { line: 3, .. }));
    }

    #[test]
    fn plain_headings_are_other() {
        assert_eq!(kind("## Progress"), LineKind::Other);
        assert_eq!(kind("### Notes"), LineKind::Other);
        assert!(Line::parse("## Progress", 1).unwrap().is_heading());
    }

    #[test]
    fn classifies_summary_lines() {
        assert_eq!(kind("**Total Progress**: 3/10 (30%)"), LineKind::TotalLine);
        assert_eq!(kind("`██████░░░░`"), LineKind::Bar);
        assert_eq!(kind("`██ ░░`"), LineKind::Other);
        assert_eq!(kind("text `████`"), LineKind::Other);
    }

    #[test]
    fn unterminated_last_line_keeps_no_ending() {
        let line = Line::parse("tail", 1).unwrap();
        let mut out = String::new();
        line.render_into(&mut out);
        assert_eq!(out, "tail");
    }
}
