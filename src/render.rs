use std::io::{self, Write};

use console::style;

use crate::grouping::Grouped;

/// Everything printed for one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub word: String,
    /// Printed after the word as-is; empty means the header is the bare word.
    pub pronunciation: String,
    pub groups: Grouped,
}

pub fn write_report<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    if report.pronunciation.is_empty() {
        writeln!(out, "{}", style(&report.word).bold())?;
    } else {
        writeln!(
            out,
            "{} {}",
            style(&report.word).bold(),
            style(&report.pronunciation).green()
        )?;
    }

    for (pos, texts) in report.groups.iter() {
        writeln!(out)?;
        writeln!(out, "{}", style(pos).magenta())?;
        for (i, text) in texts.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, text)?;
        }
    }
    out.flush()
}
