use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Per-file counts: newline-delimited lines, whitespace-separated words,
/// and raw bytes (the `chars` column is byte-oriented).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FileCounts {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

pub fn count_bytes(bytes: &[u8]) -> FileCounts {
    let mut counts = FileCounts::default();
    // A trailing segment without a newline still counts as a line.
    for line in bytes.split_inclusive(|&b| b == b'\n') {
        counts.lines += 1;
        counts.words += line
            .split(|b| b.is_ascii_whitespace())
            .filter(|word| !word.is_empty())
            .count();
        counts.chars += line.len();
    }
    counts
}

/// Count every named file, in argument order.
pub fn count_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<(String, FileCounts)>> {
    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let mut bytes = Vec::new();
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .with_context(|| format!("cannot read '{}'", path.display()))?;
        reports.push((path.display().to_string(), count_bytes(&bytes)));
    }
    Ok(reports)
}

/// One row per file; the header prints once, before the first row.
pub fn write_report<W: Write>(writer: &mut W, reports: &[(String, FileCounts)]) -> io::Result<()> {
    for (index, (name, counts)) in reports.iter().enumerate() {
        if index == 0 {
            writeln!(
                writer,
                "{:<5} {:<5} {:<5} Filename",
                "lines", "words", "chars"
            )?;
        }
        writeln!(
            writer,
            "{:<5} {:<5} {:<5} {}",
            counts.lines, counts.words, counts.chars, name
        )?;
    }
    Ok(())
}
