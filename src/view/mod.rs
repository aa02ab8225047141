//! Transcript layout
//!
//! Layout is a pure step separate from drawing: transcript lines are
//! flattened into rendered rows (one per on-screen line), and each row
//! records the column ranges of its links so the host can hit-test mouse
//! clicks. The drawing itself happens in the app layer against these rows.

pub mod theme;

use unicode_width::UnicodeWidthStr;

use crate::line::{Line, LineKind, Node};

/// Style class of one rendered segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStyle {
    Kind(LineKind),
    Link,
}

/// A run of same-styled text within a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: SegmentStyle,
}

/// Column span of a link within a row, in terminal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRegion {
    pub start: u16,
    pub end: u16,
    pub url: String,
}

impl LinkRegion {
    pub fn contains(&self, column: u16) -> bool {
        (self.start..self.end).contains(&column)
    }
}

/// One on-screen line of the transcript viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub segments: Vec<Segment>,
    pub links: Vec<LinkRegion>,
}

impl Row {
    /// The URL under `column`, if any.
    pub fn link_at(&self, column: u16) -> Option<&str> {
        self.links
            .iter()
            .find(|region| region.contains(column))
            .map(|region| region.url.as_str())
    }
}

/// Flatten transcript lines into rendered rows.
///
/// Text nodes split on `\n`; link labels never do. Column positions are
/// measured in terminal cells so wide characters hit-test correctly.
pub fn layout_transcript(lines: &[Line]) -> Vec<Row> {
    let mut rows = Vec::new();
    for line in lines {
        let style = SegmentStyle::Kind(line.kind());
        let mut row = Row::default();
        let mut column: u16 = 0;

        for node in line.nodes() {
            match node {
                Node::Text(text) => {
                    let mut parts = text.split('\n');
                    if let Some(first) = parts.next() {
                        push_text(&mut row, &mut column, first, style);
                    }
                    for part in parts {
                        rows.push(std::mem::take(&mut row));
                        column = 0;
                        push_text(&mut row, &mut column, part, style);
                    }
                }
                Node::Link { label, url } => {
                    let width = label.width() as u16;
                    row.links.push(LinkRegion {
                        start: column,
                        end: column + width,
                        url: url.clone(),
                    });
                    row.segments.push(Segment {
                        text: label.clone(),
                        style: SegmentStyle::Link,
                    });
                    column += width;
                }
            }
        }
        rows.push(row);
    }
    rows
}

fn push_text(row: &mut Row, column: &mut u16, text: &str, style: SegmentStyle) {
    if text.is_empty() {
        return;
    }
    row.segments.push(Segment {
        text: text.to_string(),
        style,
    });
    *column += text.width() as u16;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Node;

    #[test]
    fn test_single_text_line_is_one_row() {
        let rows = layout_transcript(&[Line::response_text("hello")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].segments.len(), 1);
        assert_eq!(rows[0].segments[0].text, "hello");
    }

    #[test]
    fn test_newlines_split_rows() {
        let rows = layout_transcript(&[Line::response_text("a\n\nb")]);
        assert_eq!(rows.len(), 3);
        assert!(rows[1].segments.is_empty());
        assert_eq!(rows[2].segments[0].text, "b");
    }

    #[test]
    fn test_link_columns_account_for_preceding_text() {
        let rows = layout_transcript(&[Line::response(vec![
            Node::text("go: "),
            Node::link("here", "https://example.com"),
        ])]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].links.len(), 1);
        let region = &rows[0].links[0];
        assert_eq!(region.start, 4);
        assert_eq!(region.end, 8);
        assert_eq!(rows[0].link_at(4), Some("https://example.com"));
        assert_eq!(rows[0].link_at(8), None);
        assert_eq!(rows[0].link_at(3), None);
    }

    #[test]
    fn test_links_after_newline_start_at_column_zero() {
        let rows = layout_transcript(&[Line::response(vec![
            Node::text("first\n"),
            Node::link("second", "https://second.example"),
        ])]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].links[0].start, 0);
        assert_eq!(rows[1].links[0].end, 6);
    }

    #[test]
    fn test_every_link_gets_a_region() {
        let lines = [
            crate::content::banner("t"),
            crate::content::social(),
            crate::content::projects(),
        ];
        let rows = layout_transcript(&lines);
        let total_links: usize = lines.iter().map(|l| l.links().count()).sum();
        let total_regions: usize = rows.iter().map(|r| r.links.len()).sum();
        assert_eq!(total_links, total_regions);
        for row in &rows {
            for region in &row.links {
                assert!(region.end > region.start, "empty region for {}", region.url);
            }
        }
    }

    #[test]
    fn test_multiple_lines_concatenate_rows() {
        let rows = layout_transcript(&[
            Line::response_text("one\ntwo"),
            Line::error_text("three"),
        ]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].segments[0].style, SegmentStyle::Kind(LineKind::Error));
    }
}
