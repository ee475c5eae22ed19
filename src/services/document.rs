//! Document Codec
//!
//! Parses the vault's plain-text dialect into a variant-typed line list and
//! renders it back. The codec understands exactly two row families:
//!
//! - WIP rows: `3. [product] Landing page - 80%` (tagged) or
//!   `3. Landing page - 80%` (untagged)
//! - Checklist rows: `- [ ] [P1] buy milk` (prioritized) or
//!   `- [x] buy milk` (plain)
//!
//! Everything else is carried verbatim, which is how unrelated document
//! content survives rewrites. A fixed heading line splits each document into
//! an active zone (above) and a completed zone (below).
//!
//! Each line keeps its raw text alongside its classification, so rendering a
//! document the codec merely read back out is byte-identical; only rows the
//! store actually mutates are re-formatted canonically.

use std::sync::OnceLock;

use regex::Regex;

use life_dash_core::{ChecklistItem, Priority, WipItem};

/// Heading that opens the completed zone of the WIP document.
pub const WIP_COMPLETED_MARKER: &str = "# Completed Tasks";

/// Heading that opens the completed zone of a weekly checklist document.
pub const CHECKLIST_COMPLETED_MARKER: &str = "# Completed Checklist";

/// Heading the weekly template writes for the active checklist section.
pub const CHECKLIST_SECTION_HEADING: &str = "## Weekly Checklist";

/// Heading conventionally used for the active WIP section.
pub const WIP_SECTION_HEADING: &str = "## In Progress";

// ============================================================================
// Row Patterns
// ============================================================================

fn wip_tagged_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d+)\.\s+\[(.+?)\]\s+(.+?)\s+-\s+(\d+)%").expect("pattern compiles")
    })
}

fn wip_plain_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d+)\.\s+([^\[].*?)\s+-\s+(\d+)%").expect("pattern compiles")
    })
}

fn checklist_prioritized_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^- \[([ x])\]\s+\[(P[123])\]\s+(.+)").expect("pattern compiles")
    })
}

fn checklist_plain_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^- \[([ x])\]\s+(.+)").expect("pattern compiles"))
}

fn leading_ordinal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.").expect("pattern compiles"))
}

// ============================================================================
// Line Classification
// ============================================================================

/// Classification of a single document line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A work-in-progress row (tagged or untagged)
    Wip {
        ordinal: usize,
        category: Option<String>,
        title: String,
        progress: u32,
    },
    /// A checklist row (prioritized or plain)
    Checklist {
        checked: bool,
        priority: Option<Priority>,
        text: String,
    },
    /// The fixed heading that opens the completed zone
    CompletedMarker,
    /// Anything the codec does not understand; carried verbatim
    Other,
}

/// A document line: raw text plus its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLine {
    pub raw: String,
    pub kind: LineKind,
}

impl DocLine {
    fn new(raw: String, marker: &str) -> Self {
        let kind = classify_line(&raw, marker);
        Self { raw, kind }
    }
}

/// Total classification function for one line.
///
/// The stricter pattern of each family is tried first; the plain pattern is
/// an explicit fallback. The untagged WIP pattern refuses titles that start
/// with `[` so a bracketed tag can never be mistaken for a title prefix.
pub fn classify_line(line: &str, marker: &str) -> LineKind {
    if line.starts_with(marker) {
        return LineKind::CompletedMarker;
    }

    if let Some(caps) = wip_tagged_re().captures(line) {
        if let (Ok(ordinal), Ok(progress)) = (caps[1].parse(), caps[4].parse()) {
            return LineKind::Wip {
                ordinal,
                category: Some(caps[2].to_string()),
                title: caps[3].to_string(),
                progress,
            };
        }
    }

    if let Some(caps) = wip_plain_re().captures(line) {
        if let (Ok(ordinal), Ok(progress)) = (caps[1].parse(), caps[3].parse()) {
            return LineKind::Wip {
                ordinal,
                category: None,
                title: caps[2].to_string(),
                progress,
            };
        }
    }

    if let Some(caps) = checklist_prioritized_re().captures(line) {
        if let Ok(priority) = caps[2].parse::<Priority>() {
            return LineKind::Checklist {
                checked: &caps[1] == "x",
                priority: Some(priority),
                text: caps[3].to_string(),
            };
        }
    }

    if let Some(caps) = checklist_plain_re().captures(line) {
        return LineKind::Checklist {
            checked: &caps[1] == "x",
            priority: None,
            text: caps[2].to_string(),
        };
    }

    LineKind::Other
}

// ============================================================================
// Canonical Row Formatting
// ============================================================================

/// Canonical encoding of a WIP row. Used when the store mutates a row;
/// untouched rows keep their original text.
pub fn format_wip_row(
    ordinal: usize,
    category: Option<&str>,
    title: &str,
    progress: u32,
) -> String {
    match category {
        Some(tag) => format!("{}. [{}] {} - {}%", ordinal, tag, title, progress),
        None => format!("{}. {} - {}%", ordinal, title, progress),
    }
}

/// Canonical encoding of a checklist row.
pub fn format_checklist_row(checked: bool, priority: Option<Priority>, text: &str) -> String {
    let mark = if checked { "x" } else { " " };
    match priority {
        Some(p) => format!("- [{}] [{}] {}", mark, p, text),
        None => format!("- [{}] {}", mark, text),
    }
}

// ============================================================================
// Document
// ============================================================================

/// A parsed document: the line list plus the completed-zone marker it was
/// parsed against.
#[derive(Debug, Clone)]
pub struct Document {
    marker: String,
    lines: Vec<DocLine>,
}

impl Document {
    /// Parse a document against the given completed-zone marker.
    pub fn parse(text: &str, marker: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| DocLine::new(line.to_string(), marker))
            .collect();
        Self {
            marker: marker.to_string(),
            lines,
        }
    }

    /// Render the document back to text. Unmutated lines are byte-identical
    /// to the input.
    pub fn render(&self) -> String {
        let raws: Vec<&str> = self.lines.iter().map(|l| l.raw.as_str()).collect();
        raws.join("\n")
    }

    /// The parsed line list.
    pub fn lines(&self) -> &[DocLine] {
        &self.lines
    }

    /// Index one past the last active-zone line (the first marker line, or
    /// the document length when no completed zone exists yet).
    fn active_end(&self) -> usize {
        self.lines
            .iter()
            .position(|l| l.kind == LineKind::CompletedMarker)
            .unwrap_or(self.lines.len())
    }

    /// Index of the first completed-zone line, if the zone exists.
    fn marker_index(&self) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| l.kind == LineKind::CompletedMarker)
    }

    // ── Logical collections ────────────────────────────────────────────

    /// Active WIP rows in document order.
    pub fn wip_items(&self) -> Vec<WipItem> {
        self.lines[..self.active_end()]
            .iter()
            .filter_map(|l| wip_item_of(&l.kind))
            .collect()
    }

    /// Completed WIP rows in document order. Ordinal text is whatever the
    /// row carried when it left the active zone.
    pub fn completed_wip_items(&self) -> Vec<WipItem> {
        match self.marker_index() {
            Some(m) => self.lines[m..]
                .iter()
                .filter_map(|l| wip_item_of(&l.kind))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Active (unchecked) checklist rows in document order. Checked rows in
    /// the active zone are invisible to the logical collection but survive
    /// rewrites verbatim.
    pub fn checklist_items(&self) -> Vec<ChecklistItem> {
        self.lines[..self.active_end()]
            .iter()
            .filter_map(|l| checklist_item_of(&l.kind, false))
            .collect()
    }

    /// Completed (checked) checklist rows in document order.
    pub fn completed_checklist_items(&self) -> Vec<ChecklistItem> {
        match self.marker_index() {
            Some(m) => self.lines[m..]
                .iter()
                .filter_map(|l| checklist_item_of(&l.kind, true))
                .collect(),
            None => Vec::new(),
        }
    }

    // ── Logical index resolution ───────────────────────────────────────
    //
    // Every lookup is a fresh top-to-bottom scan; no offsets are cached
    // across calls.

    /// Physical line of the active WIP row at logical `index`.
    pub fn find_active_wip(&self, index: usize) -> Option<usize> {
        let end = self.active_end();
        nth_matching(&self.lines[..end], index, |kind| {
            matches!(kind, LineKind::Wip { .. })
        })
    }

    /// Physical line of the completed WIP row at logical `index`.
    pub fn find_completed_wip(&self, index: usize) -> Option<usize> {
        let m = self.marker_index()?;
        nth_matching(&self.lines[m..], index, |kind| {
            matches!(kind, LineKind::Wip { .. })
        })
        .map(|i| m + i)
    }

    /// Physical line of the active unchecked checklist row at logical `index`.
    pub fn find_active_checklist(&self, index: usize) -> Option<usize> {
        let end = self.active_end();
        nth_matching(&self.lines[..end], index, |kind| {
            matches!(kind, LineKind::Checklist { checked: false, .. })
        })
    }

    /// Physical line of the completed checklist row at logical `index`.
    pub fn find_completed_checklist(&self, index: usize) -> Option<usize> {
        let m = self.marker_index()?;
        nth_matching(&self.lines[m..], index, |kind| {
            matches!(kind, LineKind::Checklist { checked: true, .. })
        })
        .map(|i| m + i)
    }

    // ── Mutation ───────────────────────────────────────────────────────

    /// Replace the line at `at` with new raw text, re-classifying it.
    pub fn replace_line(&mut self, at: usize, raw: String) {
        self.lines[at] = DocLine::new(raw, &self.marker);
    }

    /// Remove the line at `at`.
    pub fn remove_line(&mut self, at: usize) {
        self.lines.remove(at);
    }

    /// Append a row to the end of the active subset: after the last matching
    /// row if one exists, otherwise after the section heading, otherwise at
    /// the tail of the active zone.
    pub fn append_active_row(&mut self, raw: String, heading: &str) {
        let end = self.active_end();
        let incoming = classify_line(&raw, &self.marker);
        let last_row = self.lines[..end]
            .iter()
            .rposition(|l| row_family_matches(&l.kind, &incoming));

        if let Some(at) = last_row {
            self.insert_line(at + 1, raw);
            return;
        }

        if let Some(at) = self.lines[..end]
            .iter()
            .position(|l| l.raw.starts_with(heading))
        {
            self.insert_line(at + 1, String::new());
            self.insert_line(at + 2, raw);
            return;
        }

        let at = self.tail_index(0, end);
        self.insert_line(at, raw);
    }

    /// Move the line at `at` into the completed zone, transforming its raw
    /// text on the way. The zone is created at the end of the document on
    /// first use. The moved row is appended; nothing already in the zone is
    /// reordered.
    pub fn move_to_completed(&mut self, at: usize, transform: impl FnOnce(&str) -> String) {
        let line = self.lines.remove(at);
        let raw = transform(&line.raw);

        match self.marker_index() {
            Some(m) => {
                let insert_at = self.tail_index(m, self.lines.len());
                self.insert_line(insert_at, raw);
            }
            None => {
                let insert_at = self.tail_index(0, self.lines.len());
                let marker = self.marker.clone();
                self.insert_line(insert_at, String::new());
                self.insert_line(insert_at + 1, marker);
                self.insert_line(insert_at + 2, String::new());
                self.insert_line(insert_at + 3, raw);
            }
        }
    }

    /// Renumber the active WIP rows: the i-th row (1-based) matching a WIP
    /// pattern gets `i.` as its leading ordinal token. Only the token is
    /// rewritten; the rest of the row text is untouched, and non-WIP lines
    /// are never modified.
    pub fn renumber_wip(&mut self) {
        let end = self.active_end();
        let mut next = 0usize;
        for line in &mut self.lines[..end] {
            if let LineKind::Wip { ordinal, .. } = &mut line.kind {
                next += 1;
                if *ordinal != next {
                    *ordinal = next;
                    line.raw = leading_ordinal_re()
                        .replace(&line.raw, format!("{}.", next).as_str())
                        .into_owned();
                }
            }
        }
    }

    fn insert_line(&mut self, at: usize, raw: String) {
        let line = DocLine::new(raw, &self.marker);
        self.lines.insert(at, line);
    }

    /// Insertion point after the last non-empty line in `range`; start of the
    /// range when it is all blank. Keeps trailing blank lines trailing.
    fn tail_index(&self, start: usize, end: usize) -> usize {
        self.lines[start..end]
            .iter()
            .rposition(|l| !l.raw.trim().is_empty())
            .map(|i| start + i + 1)
            .unwrap_or(start)
    }
}

fn wip_item_of(kind: &LineKind) -> Option<WipItem> {
    match kind {
        LineKind::Wip {
            ordinal,
            category,
            title,
            progress,
        } => Some(WipItem {
            ordinal: *ordinal,
            category: category.clone(),
            title: title.clone(),
            progress: *progress,
        }),
        _ => None,
    }
}

fn checklist_item_of(kind: &LineKind, want_checked: bool) -> Option<ChecklistItem> {
    match kind {
        LineKind::Checklist {
            checked,
            priority,
            text,
        } if *checked == want_checked => Some(ChecklistItem {
            text: text.clone(),
            completed: *checked,
            priority: *priority,
        }),
        _ => None,
    }
}

/// Whether two classifications belong to the same row family. Used by
/// `append_active_row` to find the last row of the family being appended.
fn row_family_matches(existing: &LineKind, incoming: &LineKind) -> bool {
    matches!(
        (existing, incoming),
        (LineKind::Wip { .. }, LineKind::Wip { .. })
            | (LineKind::Checklist { .. }, LineKind::Checklist { .. })
    )
}

fn nth_matching(lines: &[DocLine], index: usize, pred: impl Fn(&LineKind) -> bool) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, l)| pred(&l.kind))
        .nth(index)
        .map(|(i, _)| i)
}

// ============================================================================
// Tests
// ============================================================================
