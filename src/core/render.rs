use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::core::walk::WalkError;
use crate::fs::FileSystem;
use crate::models::{EntryDetails, FsEntry};

const PLACEHOLDER: &str = "-";

/// Render the listing for `entries` to `writer`, in receipt order.
///
/// Detail mode is additive: the fixed-width table comes first, then the
/// plain name list that every mode prints. The presenter never filters or
/// reorders; walk errors arrive in-band and are printed as annotation
/// lines where they occurred.
pub fn write_listing<W, F>(
    writer: &mut W,
    fs: &F,
    entries: impl IntoIterator<Item = Result<FsEntry, WalkError>>,
    detailed: bool,
) -> io::Result<()>
where
    W: Write,
    F: FileSystem,
{
    if !detailed {
        for item in entries {
            write_name(writer, &item)?;
        }
        return Ok(());
    }

    write_header(writer)?;
    let mut seen = Vec::new();
    for item in entries {
        match &item {
            Ok(entry) => match fs.stat(&entry.path) {
                Ok(details) => write_row(writer, &entry.name, &details)?,
                // Entry vanished between traversal and render; keep the
                // listing going with placeholder fields.
                Err(_) => write_placeholder_row(writer, &entry.name)?,
            },
            Err(error) => writeln!(writer, "[error: {error}]")?,
        }
        seen.push(item);
    }
    for item in seen {
        write_name(writer, &item)?;
    }
    Ok(())
}

fn write_name<W: Write>(writer: &mut W, item: &Result<FsEntry, WalkError>) -> io::Result<()> {
    match item {
        Ok(entry) => writeln!(writer, "{}", entry.name),
        Err(error) => writeln!(writer, "[error: {error}]"),
    }
}

fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{:<30}{:<10}{:<10}{:<10}{}",
        "Name", "Size", "Owner", "Group", "Last Modified"
    )
}

fn write_row<W: Write>(writer: &mut W, name: &str, details: &EntryDetails) -> io::Result<()> {
    let modified = DateTime::<Utc>::from(details.modified).format("%Y-%m-%d %H:%M:%S");
    writeln!(
        writer,
        "{:<30}{:<10}{:<10}{:<10}{}",
        name, details.size, details.owner, details.group, modified
    )
}

fn write_placeholder_row<W: Write>(writer: &mut W, name: &str) -> io::Result<()> {
    writeln!(
        writer,
        "{:<30}{:<10}{:<10}{:<10}{}",
        name, PLACEHOLDER, PLACEHOLDER, PLACEHOLDER, PLACEHOLDER
    )
}
