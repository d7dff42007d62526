//! chemglyph CLI (default binary).
//!
//! Reads a provider molecule document (JSON) or, with `--magic`, a rendered
//! depiction image, and prints the text rendering to stdout. Diagnostics go
//! to stdout too; the exit code is 1 on any failure.

use std::fs::File;
use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};

use chemglyph::types::{DEFAULT_HEIGHT, DEFAULT_MAGIC_COLUMNS, DEFAULT_PADDING, DEFAULT_WIDTH};
use chemglyph::{provider, render_ascii, render_magic, render_unicode};

#[derive(Parser)]
#[command(
    name = "chemglyph",
    about = "Render small-molecule 2D structures as terminal text art",
    version,
    group(ArgGroup::new("renderer").args(["ascii", "unicode", "magic"]))
)]
struct Cli {
    /// Molecule document (JSON) or, with --magic, a depiction image.
    /// `-` reads the document from stdin.
    input: String,

    /// Plain-character rendering
    #[arg(long)]
    ascii: bool,

    /// Box-drawing rendering (default)
    #[arg(long)]
    unicode: bool,

    /// Image-density rendering of a depiction raster
    #[arg(long)]
    magic: bool,

    /// Canvas width in columns (default: terminal width, else 80)
    #[arg(long)]
    width: Option<u16>,

    /// Canvas height in rows (default: terminal height, else 24)
    #[arg(long)]
    height: Option<u16>,

    /// Blank margin around the structure, in cells
    #[arg(long, default_value_t = DEFAULT_PADDING)]
    padding: u16,

    /// Output columns for --magic
    #[arg(long, default_value_t = DEFAULT_MAGIC_COLUMNS)]
    columns: u16,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.magic {
        let image = image::open(&cli.input)
            .with_context(|| format!("opening depiction image {}", cli.input))?;
        println!("{}", render_magic(&image, cli.columns));
        return Ok(());
    }

    let mol = if cli.input == "-" {
        provider::read_molecule(io::stdin().lock()).context("reading molecule from stdin")?
    } else {
        let file = File::open(&cli.input)
            .with_context(|| format!("opening molecule document {}", cli.input))?;
        provider::read_molecule(file)
            .with_context(|| format!("reading molecule document {}", cli.input))?
    };

    let (term_w, term_h) = crossterm::terminal::size().unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT));
    let width = cli.width.unwrap_or(term_w);
    let height = cli.height.unwrap_or(term_h);

    let text = if cli.ascii {
        render_ascii(&mol, width, height, cli.padding)
    } else {
        render_unicode(&mol, width, height, cli.padding)
    };
    println!("{text}");
    Ok(())
}
