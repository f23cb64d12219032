//! Narrates Chapter 8 section by section.
//!
//! Run with: cargo run --bin chapter_08 -- --help

use clap::Parser;
use colored::Colorize;
use data_structures_sequences::exercises::{make_rng, PhoneBook};
use data_structures_sequences::quiz::take_true_false;
use data_structures_sequences::{run_section, ChapterConfig, Section};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "chapter_08")]
#[command(version, about = "Chapter 8: Data Structures and Sequences", long_about = None)]
struct Cli {
    /// Section to show (repeatable); all sections by default
    #[arg(short, long = "section", value_name = "NAME")]
    sections: Vec<Section>,

    /// TOML file with exercise parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the random-list exercise (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Fill the phone book from stdin and look up a name
    #[arg(short, long)]
    interactive: bool,

    /// Answer the true/false statements from stdin and get a score
    #[arg(short, long)]
    quiz: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = ChapterConfig::load(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    let mut rng = make_rng(config.seed);

    let sections = if cli.sections.is_empty() {
        Section::ALL.to_vec()
    } else {
        cli.sections
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", "=== Chapter 8: Data Structures and Sequences ===".bold())?;
    for section in sections {
        info!(%section, "running section");
        writeln!(out, "\n{}\n", format!("=== {} ===", section.title()).cyan().bold())?;
        run_section(section, &mut out, &config, &mut rng)?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    if cli.interactive {
        writeln!(out, "\n{}\n", "=== Interactive phone book ===".cyan().bold())?;
        let book = PhoneBook::read_interactive(config.phone_book_entries, &mut input, &mut out)?;
        let number = book.lookup_interactive(&mut input, &mut out)?;
        writeln!(out, "{}", number)?;
    }

    if cli.quiz {
        writeln!(out, "\n{}\n", "=== True or false quiz ===".cyan().bold())?;
        let score = take_true_false(&mut input, &mut out)?;
        info!(correct = score.correct, total = score.total, "quiz finished");
    }

    Ok(())
}
