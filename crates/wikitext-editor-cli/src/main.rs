use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use wikitext_editor_config::Config;

mod run;

/// Apply wikitext formatting actions to a page and print the result
#[derive(Parser, Debug)]
#[command(name = "wikitext-format")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Page to read; stdin when omitted. Relative paths resolve against `pages_path`
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Selection as START..END byte offsets
    #[arg(short, long, value_parser = parse_range, conflicts_with = "cursor")]
    selection: Option<Range<usize>>,

    /// Cursor byte offset
    #[arg(short, long)]
    cursor: Option<usize>,

    /// Action to apply, in order (bold, italic, heading3, bullet, unindent, ...)
    #[arg(short, long = "action", value_name = "ACTION")]
    actions: Vec<String>,

    /// Print the formatting state at the final selection
    #[arg(long)]
    state: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log engine decisions at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default configuration file
    InitConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Some(Commands::InitConfig) = cli.command {
        return init_config(cli.config.as_deref());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()?
        }
    }
    .unwrap_or_default();

    let input = run::read_input(cli.file.as_deref(), &config)?;
    let selection = cli.selection.or(cli.cursor.map(|at| at..at));
    let request = run::Request {
        selection,
        actions: cli.actions,
        show_state: cli.state,
    };

    print!("{}", run::run(&input, &request, &config)?);
    Ok(())
}

fn init_config(path: Option<&Path>) -> Result<()> {
    let config = Config::default();
    match path {
        Some(path) => {
            config.save_to_path(path)?;
            println!("Wrote {}", path.display());
        }
        None => {
            config.save()?;
            println!("Wrote {}", Config::config_path().display());
        }
    }
    Ok(())
}

fn parse_range(s: &str) -> Result<Range<usize>, String> {
    let (start, end) = s
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got {s:?}"))?;
    let start: usize = start
        .trim()
        .parse()
        .map_err(|e| format!("invalid start {start:?}: {e}"))?;
    let end: usize = end
        .trim()
        .parse()
        .map_err(|e| format!("invalid end {end:?}: {e}"))?;
    if start > end {
        return Err(format!("start {start} is after end {end}"));
    }
    Ok(start..end)
}
