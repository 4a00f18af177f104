use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Collect every line (terminators kept) from `paths`, in argument order.
pub fn read_lines<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("cannot open '{}'", path.display()))?;
        collect_lines(&mut BufReader::new(file), &mut lines)
            .with_context(|| format!("cannot read '{}'", path.display()))?;
    }
    Ok(lines)
}

fn collect_lines<R: BufRead>(reader: &mut R, lines: &mut Vec<String>) -> io::Result<()> {
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }
        lines.push(line);
    }
}

/// Sort lines by byte order, descending when `reverse` is set.
pub fn sort_lines(lines: &mut [String], reverse: bool) {
    lines.sort_unstable();
    if reverse {
        lines.reverse();
    }
}

/// Write sorted lines, each optionally prefixed with its 1-based output
/// index right-aligned in a 3-column field.
pub fn write_sorted<W: Write>(writer: &mut W, lines: &[String], numbered: bool) -> io::Result<()> {
    for (index, line) in lines.iter().enumerate() {
        if numbered {
            write!(writer, "{:>3} ", index + 1)?;
        }
        writer.write_all(line.as_bytes())?;
    }
    Ok(())
}
