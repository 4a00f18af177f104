use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use rutils::cli::{CalArgs, CatArgs, Cli, Command, LsArgs, SortArgs, WcArgs};
use rutils::core::render::write_listing;
use rutils::core::walk::{TraversalPolicy, traverse};
use rutils::fs::RealFileSystem;
use rutils::{cal, cat, sort, wc};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Ls(args) => return run_ls(&args),
        Command::Cat(args) => run_cat(&args),
        Command::Sort(args) => run_sort(&args),
        Command::Wc(args) => run_wc(&args),
        Command::Cal(args) => run_cal(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rutils: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run_ls(args: &LsArgs) -> ExitCode {
    let fs = RealFileSystem;
    let policy = TraversalPolicy {
        recursive: args.recursive,
        include_hidden: args.all,
    };

    let walk = match traverse(&fs, &args.dirpath, policy) {
        Ok(walk) => walk,
        Err(err) => {
            // A missing root is reported on stdout, not stderr.
            println!("{err}");
            return ExitCode::from(1);
        }
    };

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if let Err(err) = write_listing(&mut writer, &fs, walk, args.detail) {
        eprintln!("rutils: error writing output: {err}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run_cat(args: &CatArgs) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    cat::write_files(&mut writer, &args.files, args.number)?;
    writer.flush()?;
    Ok(())
}

fn run_sort(args: &SortArgs) -> anyhow::Result<()> {
    let mut lines = sort::read_lines(&args.files)?;
    sort::sort_lines(&mut lines, args.reverse);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    sort::write_sorted(&mut writer, &lines, args.line)?;
    writer.flush()?;
    Ok(())
}

fn run_wc(args: &WcArgs) -> anyhow::Result<()> {
    let reports = wc::count_files(&args.files)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    wc::write_report(&mut writer, &reports)?;
    Ok(())
}

fn run_cal(args: &CalArgs) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    cal::write_month(&mut writer, args.year, args.month)?;
    Ok(())
}
