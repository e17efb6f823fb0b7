//! Pipe table sub-pass.
//!
//! Runs on the raw document before any escaping. A table is a header line
//! containing `|`, directly followed by a separator row, followed by every
//! subsequent non-empty line that contains `|`. The whole span is replaced by
//! one line of table markup; all other lines pass through untouched.
//!
//! Cell text is emitted verbatim. Column counts are not checked across rows.

use std::borrow::Cow;

use memchr::memchr;
use smallvec::SmallVec;

use crate::render::HtmlWriter;

/// Cells of one row. Most tables are narrow enough to stay inline.
pub type Cells<'a> = SmallVec<[&'a str; 8]>;

#[inline]
fn has_pipe(line: &str) -> bool {
    memchr(b'|', line.as_bytes()).is_some()
}

/// Check whether a trimmed line is a header/body separator row.
///
/// It must contain both `|` and `-`, and consist of nothing but `|`, `-`, `:`
/// and spaces.
pub fn is_separator_row(line: &str) -> bool {
    has_pipe(line)
        && memchr(b'-', line.as_bytes()).is_some()
        && line.bytes().all(|b| matches!(b, b'|' | b'-' | b':' | b' '))
}

/// Split a row into trimmed cells.
///
/// A leading or trailing pipe produces an empty edge cell, which is dropped.
///
/// ```
/// use mdview::table::split_cells;
///
/// assert_eq!(split_cells("| a | b |").as_slice(), ["a", "b"]);
/// assert_eq!(split_cells("a | b").as_slice(), ["a", "b"]);
/// assert_eq!(split_cells("| a || b |").as_slice(), ["a", "", "b"]);
/// ```
pub fn split_cells(line: &str) -> Cells<'_> {
    let mut cells: Cells<'_> = line.split('|').map(str::trim).collect();
    if cells.first().is_some_and(|cell| cell.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }
    cells
}

/// Render table lines (header, separator, body rows) as table markup.
///
/// The separator row is skipped without being inspected. Fewer than two lines
/// cannot form a table and are returned joined, unchanged.
///
/// ```
/// use mdview::table_lines_to_html;
///
/// let html = table_lines_to_html(&["| A |", "|---|", "| 1 |"]);
/// assert!(html.starts_with("<table>"));
/// assert!(html.contains("<th>A</th>"));
/// assert!(html.contains("<td>1</td>"));
///
/// assert_eq!(table_lines_to_html(&["| A |"]), "| A |");
/// ```
pub fn table_lines_to_html<S: AsRef<str>>(lines: &[S]) -> String {
    if lines.len() < 2 {
        return lines.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("\n");
    }

    let len: usize = lines.iter().map(|line| line.as_ref().len()).sum();
    let mut writer = HtmlWriter::with_capacity_for(len * 2);

    writer.table_start();
    for cell in split_cells(lines[0].as_ref()) {
        writer.th(cell);
    }
    writer.thead_end();

    for row in &lines[2..] {
        writer.tr_start();
        for cell in split_cells(row.as_ref()) {
            writer.td(cell);
        }
        writer.tr_end();
    }
    writer.table_end();

    writer.into_string()
}

/// If a table starts at `start`, return the index one past its last row.
fn table_span(lines: &[&str], start: usize) -> Option<usize> {
    let header = lines[start].trim();
    let separator = lines.get(start + 1)?.trim();
    if !has_pipe(header) || !is_separator_row(separator) {
        return None;
    }

    let body = lines[start + 2..]
        .iter()
        .map(|line| line.trim())
        .take_while(|line| !line.is_empty() && has_pipe(line))
        .count();

    Some(start + 2 + body)
}

/// Replace every pipe table in `text` with table markup.
///
/// Each table collapses to a single line holding the markup, at the position of
/// its header. Scanning resumes after the table, so generated markup is never
/// rescanned. Text without a valid header/separator pair is returned borrowed,
/// byte-for-byte identical.
///
/// ```
/// use mdview::extract_tables;
///
/// let out = extract_tables("intro\n| A |\n|---|\n| 1 |\noutro");
/// assert!(out.starts_with("intro\n<table>"));
/// assert!(out.ends_with("</table>\noutro"));
///
/// assert_eq!(extract_tables("a | b"), "a | b");
/// ```
pub fn extract_tables(text: &str) -> Cow<'_, str> {
    if !has_pipe(text) {
        return Cow::Borrowed(text);
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<Cow<'_, str>> = Vec::with_capacity(lines.len());
    let mut tables = 0usize;
    let mut i = 0;

    while i < lines.len() {
        match table_span(&lines, i) {
            Some(end) => {
                let rows: Vec<&str> = lines[i..end].iter().map(|line| line.trim()).collect();
                log::trace!("table at line {}: {} body rows", i + 1, rows.len() - 2);
                out.push(Cow::Owned(table_lines_to_html(&rows)));
                tables += 1;
                i = end;
            }
            None => {
                out.push(Cow::Borrowed(lines[i]));
                i += 1;
            }
        }
    }

    if tables == 0 {
        return Cow::Borrowed(text);
    }
    Cow::Owned(out.join("\n"))
}
