//! Command-line front end: paint text, list codes, print the cheat sheet.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use opg_sgr::{Bg, CheatSheet, Fg, NamedCode, OutputMode, Sequence, Style};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "opg-sgr", version, about = "Style terminal text with SGR escape sequences")]
struct Cli {
    /// Whether to emit escape sequences
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Auto)]
    output: OutputMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print TEXT wrapped in the given codes
    Paint {
        text: String,
        /// Code names or numbers, e.g. bold, fg.red, bg.blue_b, 4
        #[arg(short, long = "code", value_name = "CODE")]
        codes: Vec<String>,
        /// Leave attributes set after the text
        #[arg(long)]
        no_reset: bool,
    },
    /// List every named code
    Codes,
    /// Print a table of style and color combinations
    Cheatsheet {
        /// Include every style and the default colors
        #[arg(long)]
        all: bool,
        #[arg(long, default_value_t = opg_sgr::cheatsheet::DEFAULT_COL_WIDTH)]
        col_width: usize,
        #[arg(long, default_value = opg_sgr::cheatsheet::DEFAULT_COL_SEPARATOR)]
        separator: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let mode = cli.output;

    match cli.command {
        Command::Paint {
            text,
            codes,
            no_reset,
        } => {
            let seq = Sequence::new(&codes).context("invalid --code")?;
            debug!(attributes = seq.attributes(), ?mode, "painting text");
            writeln!(out, "{}", seq.render_for(&text, !no_reset, mode))?;
        }
        Command::Codes => {
            for label in Style::ALL
                .iter()
                .map(|s| s.label())
                .chain(Fg::ALL.iter().map(|c| c.label()))
                .chain(Bg::ALL.iter().map(|c| c.label()))
            {
                writeln!(out, "{label}")?;
            }
        }
        Command::Cheatsheet {
            all,
            col_width,
            separator,
        } => {
            let sheet = if all {
                CheatSheet::new()
            } else {
                CheatSheet::demo()
            };
            let sheet = sheet.col_width(col_width).col_separator(separator);
            write!(out, "{}", sheet.display(mode))?;
        }
    }

    Ok(())
}
