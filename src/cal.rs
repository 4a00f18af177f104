use std::io::Write;

use anyhow::{Result, anyhow};
use chrono::{Datelike, NaiveDate};

// Seven 2-column cells joined by single spaces.
const GRID_WIDTH: usize = 20;

/// Write the month grid: centered `MonthName Year` title, Monday-first
/// weekday header, day numbers right-aligned in 2-column cells, trailing
/// whitespace stripped from every line.
pub fn write_month<W: Write>(writer: &mut W, year: i32, month: u32) -> Result<()> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("invalid month {month} of year {year}"))?;

    let title = first.format("%B %Y").to_string();
    writeln!(writer, "{}", format!("{title:^GRID_WIDTH$}").trim_end())?;
    writeln!(writer, "Mo Tu We Th Fr Sa Su")?;

    let leading = first.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<String> = vec!["  ".to_owned(); leading];
    cells.extend((1..=days_in_month(year, month)).map(|day| format!("{day:>2}")));

    for week in cells.chunks(7) {
        writeln!(writer, "{}", week.join(" ").trim_end())?;
    }
    Ok(())
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // Both dates exist whenever (year, month) itself was representable.
    next.and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}
