//! Hangman - CLI
//!
//! Draws a word from a word list and plays one game on the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use hangman::{
    commands::run_play,
    core::TargetWord,
    game::Session,
    wordlists::loader::load_from_file,
};
use rand::{SeedableRng, rngs::StdRng};
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word letter by letter before the gallows is complete",
    version,
    author
)]
struct Cli {
    /// Word list file, one word per line
    wordlist: PathBuf,

    /// Seed for the random source (default: current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let words = load_from_file(&cli.wordlist)
        .with_context(|| format!("failed to load word list from {}", cli.wordlist.display()))?;

    let seed = cli.seed.unwrap_or_else(time_seed);
    log::info!("random seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let target = TargetWord::new(words.choose(&mut rng));
    log::debug!("target word: {target}");

    let mut session = Session::new(target, &mut rng);
    log::info!(
        "session started: {} letters ({} distinct), {} revealed",
        session.target().len(),
        session.target().distinct_letters(),
        session.mask().revealed_count()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_play(&mut session, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Default log level is `warn`; `RUST_LOG` still takes precedence
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}
