use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use slidecraft::Deck as _;

#[derive(Parser, Debug)]
#[command(name = "slidecraft", version)]
struct Cli {
    /// Log fallbacks and per-slide composition at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a deck config and list its still ids.
    Validate(ValidateArgs),
    /// Compose a deck (or one slide) into layout JSON.
    Compose(ComposeArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input deck JSON (carousel or presentation).
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Input deck JSON (carousel or presentation).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Compose only this slide (1-based).
    #[arg(long)]
    slide: Option<usize>,

    /// Output JSON path. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Compose slides on a rayon worker pool.
    #[arg(long)]
    parallel: bool,

    /// Worker count for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Compose(args) => cmd_compose(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn read_deck(path: &Path) -> anyhow::Result<slidecraft::DeckConfig> {
    slidecraft::DeckConfig::from_path(path)
        .with_context(|| format!("load deck '{}'", path.display()))
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let deck = read_deck(&args.in_path)?;
    let units = slidecraft::assemble(&deck)
        .with_context(|| format!("validate deck '{}'", deck.deck_id()))?;
    for unit in &units {
        println!("{}", unit.still_id());
    }
    eprintln!(
        "{} '{}' ok ({} slides)",
        deck.format().as_str(),
        deck.deck_id(),
        units.len()
    );
    Ok(())
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let deck = read_deck(&args.in_path)?;

    let json = match args.slide {
        Some(n) => {
            let units = slidecraft::assemble(&deck)
                .with_context(|| format!("validate deck '{}'", deck.deck_id()))?;
            let unit = n
                .checked_sub(1)
                .and_then(|i| units.get(i))
                .with_context(|| format!("--slide {n} out of range (1-{})", units.len()))?;
            let slide = unit.compose()?;
            eprintln!("composed {} ({} warnings)", slide.id, slide.warnings.len());
            serde_json::to_value(&slide)?
        }
        None => {
            let opts = slidecraft::ComposeOptions {
                parallel: args.parallel,
                threads: args.threads,
            };
            let composed = slidecraft::compose_deck(&deck, &opts)
                .with_context(|| format!("compose deck '{}'", deck.deck_id()))?;
            let stats = composed.stats;
            eprintln!(
                "composed {} slides ({} unique layouts, {} placeholders, {} warnings)",
                stats.slides_total, stats.unique_layouts, stats.placeholders, stats.warnings
            );
            serde_json::to_value(&composed)?
        }
    };

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(&path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            write_json(BufWriter::new(f), &json)
                .with_context(|| format!("write layout json '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => write_json(std::io::stdout().lock(), &json).with_context(|| "write layout json")?,
    }
    Ok(())
}

fn write_json(mut w: impl std::io::Write, json: &serde_json::Value) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut w, json)?;
    writeln!(w)?;
    w.flush()?;
    Ok(())
}
