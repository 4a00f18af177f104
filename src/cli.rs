use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rutils")]
#[command(about = "Small Unix-style file utilities", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List directory contents
    Ls(LsArgs),
    /// Concatenate files to standard output
    Cat(CatArgs),
    /// Sort lines from files
    Sort(SortArgs),
    /// Count lines, words and bytes per file
    Wc(WcArgs),
    /// Print a month calendar
    Cal(CalArgs),
}

#[derive(Args, Debug)]
pub struct LsArgs {
    /// Directory (or single file) to list
    #[arg(default_value = ".")]
    pub dirpath: PathBuf,

    /// Show the detailed table (size, owner, group, last modified)
    #[arg(short = 'l', long = "detail")]
    pub detail: bool,

    /// Include entries whose name starts with '.'
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Descend into subdirectories, listing the whole subtree
    #[arg(short = 'R', long = "recursive")]
    pub recursive: bool,
}

#[derive(Args, Debug)]
pub struct CatArgs {
    /// Files to concatenate, in order
    pub files: Vec<PathBuf>,

    /// Number all output lines
    #[arg(short = 'n', long = "number")]
    pub number: bool,
}

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Files whose lines are sorted as one combined set
    pub files: Vec<PathBuf>,

    /// Sort in descending order
    #[arg(short = 'r', long = "reverse")]
    pub reverse: bool,

    /// Prefix output lines with their index
    #[arg(short = 'n', long = "line")]
    pub line: bool,
}

#[derive(Args, Debug)]
pub struct WcArgs {
    /// Files to count
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CalArgs {
    /// Year to print (defaults to the current year)
    #[arg(short = 'y', long = "year", default_value_t = Local::now().year())]
    pub year: i32,

    /// Month to print, 1-12 (defaults to the current month)
    #[arg(
        short = 'm',
        long = "month",
        value_parser = clap::value_parser!(u32).range(1..=12),
        default_value_t = Local::now().month()
    )]
    pub month: u32,
}
