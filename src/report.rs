/// Inventory of the glyph sheet: code points and expected cell width per entry.
///
/// Comparing the `width` column against what the terminal actually draws is
/// the quickest way to spot a font falling back to a wide or zero-width glyph.
use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::config::ReportConfig;
use crate::glyphs::{self, Mode};

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub group: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
    pub codepoints: Vec<String>,
    pub width: usize,
    pub mode: Mode,
}

pub fn rows() -> Vec<ReportRow> {
    glyphs::all_entries()
        .map(|(group, e)| ReportRow {
            group,
            label: e.label,
            glyph: e.glyph,
            codepoints: e.glyph.chars().map(|c| format!("U+{:04X}", c as u32)).collect(),
            width: e.glyph.width(),
            mode: e.mode,
        })
        .collect()
}

pub fn write_json(out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &rows()).context("Failed to write report")?;
    writeln!(out)
        .and_then(|_| out.flush())
        .context("Failed to write report")
}

pub fn write_text(out: &mut impl Write, cfg: &ReportConfig) -> Result<()> {
    write_rows(out, &rows(), cfg).context("Failed to write report")
}

fn write_rows(out: &mut impl Write, rows: &[ReportRow], cfg: &ReportConfig) -> io::Result<()> {
    let label_w = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);

    let mut current_group = "";
    for row in rows {
        if row.group != current_group {
            if !current_group.is_empty() {
                writeln!(out)?;
            }
            writeln!(out, "{}", row.group)?;
            current_group = row.group;
        }
        // pad by display width, not bytes, so the columns after the glyph line up
        let pad = " ".repeat(3usize.saturating_sub(row.width));
        write!(out, "  {:<label_w$}  {}{pad}", row.label, row.glyph)?;
        if cfg.show_codepoints {
            write!(out, "  {:<13}", row.codepoints.join(" "))?;
        }
        writeln!(out, "  width {}", row.width)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str) -> ReportRow {
        rows().into_iter().find(|r| r.label == label).unwrap()
    }

    #[test]
    fn test_one_row_per_entry() {
        assert_eq!(rows().len(), 64);
    }

    #[test]
    fn test_codepoints() {
        assert_eq!(row("tick").codepoints, vec!["U+2714"]);
        assert_eq!(row("oneHalf").codepoints, vec!["U+00BD"]);
        assert_eq!(row("circleQuestionMark").codepoints, vec!["U+003F", "U+20DD"]);
        assert_eq!(row("beer").codepoints, vec!["U+1F37A"]);
    }

    #[test]
    fn test_widths() {
        assert_eq!(row("tick").width, 1);
        assert_eq!(row("circleQuestionMark").width, 1);
        assert_eq!(row("beer").width, 2);
        assert_eq!(row("Thumbs Up").width, 2);
    }

    #[test]
    fn test_groups() {
        assert_eq!(row("sevenEighths").group, glyphs::SYMBOLS_HEADER);
        assert_eq!(row("burrito").group, glyphs::EMOJI_HEADER);
    }

    #[test]
    fn test_text_report_layout() {
        let mut buf = Vec::new();
        write_text(&mut buf, &ReportConfig::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], glyphs::SYMBOLS_HEADER);
        assert!(lines[1].contains("tick"));
        assert!(lines[1].contains("U+2714"));
        assert!(lines[1].ends_with("width 1"));
        assert!(lines.contains(&"Emoji:"));
        // 64 entries, 2 headers, 1 blank separator
        assert_eq!(lines.len(), 67);
    }

    #[test]
    fn test_text_report_without_codepoints() {
        let mut buf = Vec::new();
        write_text(&mut buf, &ReportConfig { show_codepoints: false }).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("U+"));
        assert!(text.contains("width 2"));
    }

    #[test]
    fn test_json_report() {
        let mut buf = Vec::new();
        write_json(&mut buf).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let arr = v.as_array().unwrap();
        assert_eq!(arr.len(), 64);
        assert_eq!(arr[0]["label"], "tick");
        assert_eq!(arr[0]["glyph"], "✔");
        assert_eq!(arr[0]["mode"], "write");
        assert_eq!(arr[2]["mode"], "print");
        assert_eq!(arr[0]["group"], glyphs::SYMBOLS_HEADER);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_text_report_write_error_has_context() {
        let err = write_text(&mut ClosedPipe, &ReportConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to write report");
        assert_eq!(err.root_cause().to_string(), "closed");
    }

    #[test]
    fn test_json_report_write_error_has_context() {
        let err = write_json(&mut ClosedPipe).unwrap_err();
        assert_eq!(err.to_string(), "Failed to write report");
    }
}
