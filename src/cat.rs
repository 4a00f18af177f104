use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Concatenate `paths` to `writer` in argument order.
///
/// With `number`, every output line gets a running line number,
/// left-aligned in a 5-column field plus two spaces; numbering is
/// continuous across files.
pub fn write_files<W: Write, P: AsRef<Path>>(
    writer: &mut W,
    paths: &[P],
    number: bool,
) -> Result<()> {
    let mut next_line = 1usize;
    for path in paths {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("cannot open '{}'", path.display()))?;
        copy_lines(&mut BufReader::new(file), writer, number, &mut next_line)
            .with_context(|| format!("cannot read '{}'", path.display()))?;
    }
    Ok(())
}

fn copy_lines<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    number: bool,
    next_line: &mut usize,
) -> io::Result<()> {
    // Byte-oriented so non-UTF-8 input passes through untouched.
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }
        if number {
            write!(writer, "{:<5}  ", next_line)?;
        }
        writer.write_all(&line)?;
        *next_line += 1;
    }
}
