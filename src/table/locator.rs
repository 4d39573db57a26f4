//! Table region detection
//!
//! Scans outward from a line to find the contiguous block of table lines
//! around it. This is the text block handed to a parser.

use super::parser::MARKER;

/// Inclusive line range of a table within a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRegion {
    pub start_line: usize,
    pub end_line: usize,
}

impl TableRegion {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    pub fn contains(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }

    /// The region's lines from `lines`
    pub fn lines<'a>(&self, lines: &[&'a str]) -> Vec<&'a str> {
        lines[self.start_line..=self.end_line].to_vec()
    }

    /// The region's lines joined with `\n`
    pub fn text(&self, lines: &[&str]) -> String {
        self.lines(lines).join("\n")
    }
}

/// Finds table boundaries in a document given as lines
pub trait TableLocator {
    /// Check if a line belongs to a table: its first non-blank character is
    /// the cell marker
    fn is_table_line(&self, line: &str) -> bool {
        line.trim_start().starts_with(MARKER)
    }

    /// Region of the table containing `line`, if `line` is a table line
    fn locate(&self, lines: &[&str], line: usize) -> Option<TableRegion> {
        if !lines.get(line).is_some_and(|l| self.is_table_line(l)) {
            return None;
        }

        let mut start = line;
        while start > 0 && self.is_table_line(lines[start - 1]) {
            start -= 1;
        }

        let mut end = line;
        while end + 1 < lines.len() && self.is_table_line(lines[end + 1]) {
            end += 1;
        }

        Some(TableRegion::new(start, end))
    }

    /// Every table region in the document, top to bottom
    fn find_all(&self, lines: &[&str]) -> Vec<TableRegion> {
        let mut regions = Vec::new();
        let mut line = 0;
        while line < lines.len() {
            match self.locate(lines, line) {
                Some(region) => {
                    line = region.end_line + 1;
                    regions.push(region);
                }
                None => line += 1,
            }
        }
        regions
    }
}

/// Markdown table locator
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownLocator;

// Delimiter rows (`|---|`) start with the marker like any other row
impl TableLocator for MarkdownLocator {}

/// Org-mode table locator
#[derive(Debug, Clone, Copy, Default)]
pub struct OrgLocator;

// Hlines (`|---+---|`, or a bare `|-` while typing) start with the marker too
impl TableLocator for OrgLocator {}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &[&str] = &[
        "# Title",
        "",
        "| a | b |",
        "|---|---|",
        "| 1 | 2 |",
        "text",
        "  | x |",
    ];

    #[test]
    fn test_locate_from_middle() {
        assert_eq!(MarkdownLocator.locate(DOC, 3), Some(TableRegion::new(2, 4)));
    }

    #[test]
    fn test_locate_from_edges() {
        assert_eq!(MarkdownLocator.locate(DOC, 2), Some(TableRegion::new(2, 4)));
        assert_eq!(MarkdownLocator.locate(DOC, 4), Some(TableRegion::new(2, 4)));
    }

    #[test]
    fn test_locate_outside_table() {
        assert_eq!(MarkdownLocator.locate(DOC, 0), None);
        assert_eq!(MarkdownLocator.locate(DOC, 5), None);
        assert_eq!(MarkdownLocator.locate(DOC, 99), None);
    }

    #[test]
    fn test_locate_indented_at_document_end() {
        assert_eq!(OrgLocator.locate(DOC, 6), Some(TableRegion::new(6, 6)));
    }

    #[test]
    fn test_find_all() {
        assert_eq!(
            OrgLocator.find_all(DOC),
            vec![TableRegion::new(2, 4), TableRegion::new(6, 6)]
        );
    }

    #[test]
    fn test_org_hlines_are_table_lines() {
        let doc = &["* Notes", "|-", "| a |", "  |---+---|", "#+TBLFM: $2=1"];
        assert!(OrgLocator.is_table_line("|-"));
        assert_eq!(OrgLocator.locate(doc, 1), Some(TableRegion::new(1, 3)));
    }

    #[test]
    fn test_markdown_needs_leading_marker() {
        assert!(MarkdownLocator.is_table_line("  | --- |"));
        assert!(!MarkdownLocator.is_table_line("a | b"));
        assert!(!MarkdownLocator.is_table_line(""));
    }

    #[test]
    fn test_region_text() {
        let region = TableRegion::new(2, 4);
        assert_eq!(region.line_count(), 3);
        assert!(region.contains(3));
        assert!(!region.contains(5));
        assert_eq!(region.text(DOC), "| a | b |\n|---|---|\n| 1 | 2 |");
    }
}
