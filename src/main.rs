//! Tilescore - CLI
//!
//! Word-tile game with TUI and CLI modes: bonus-square scoring plus a
//! rack possibility finder over the whole dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tilescore::{
    commands::{find_for_rack, prepare_wordlist, run_benchmark, run_simple, score_specs},
    output::{
        print_benchmark_result, print_possibilities, print_prepare_result, print_score_report,
    },
    wordlists::{
        Dictionary, WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "tilescore",
    about = "Word-tile game with bonus-square scoring and rack possibility search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a one-word-per-line file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// List every word formable from a rack, ranked by score
    Possibilities {
        /// Rack letters, e.g. AETRSQU
        rack: String,

        /// Maximum number of words to print
        #[arg(short, long, default_value = "25")]
        limit: usize,
    },

    /// Score a set of placements given as LETTER@row,col
    Score {
        /// Placement specs, e.g. Q@7,7 I@7,8
        placements: Vec<String>,
    },

    /// Benchmark the possibility finder over random racks
    Benchmark {
        /// Number of random racks to test
        #[arg(short = 'n', long, default_value = "100")]
        racks: usize,
    },

    /// Derive a clean word list from a word-plus-definition lexicon
    Prepare {
        /// Input lexicon file (word followed by definition per line)
        input: PathBuf,

        /// Output word list file (one uppercase word per line)
        output: PathBuf,
    },
}

/// Load the dictionary named by the -w flag
///
/// 'embedded' uses the list compiled into the binary; anything else is a
/// path. A missing or unreadable file is fatal: the game cannot compute
/// possibilities without a dictionary.
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path)
            .with_context(|| format!("cannot load word list '{path}'; the game cannot start")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Prepare never needs the dictionary; handle it before loading
    if let Commands::Prepare { input, output } = &command {
        let result = prepare_wordlist(input, output)
            .with_context(|| format!("cannot prepare word list from '{}'", input.display()))?;
        print_prepare_result(&result);
        return Ok(());
    }

    let dictionary = load_dictionary(&cli.wordlist)?;

    match command {
        Commands::Play => run_play_command(&dictionary),
        Commands::Simple => run_simple(&dictionary).map_err(|e| anyhow::anyhow!(e)),
        Commands::Possibilities { rack, limit } => {
            let report = find_for_rack(&rack, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            println!("Rack: {}", report.rack);
            print_possibilities(&report.words, limit);
            Ok(())
        }
        Commands::Score { placements } => {
            let report = score_specs(&placements).map_err(|e| anyhow::anyhow!(e))?;
            print_score_report(&report);
            Ok(())
        }
        Commands::Benchmark { racks } => {
            println!("Running possibility search on {racks} random racks...");
            let result = run_benchmark(&dictionary, racks);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Prepare { .. } => unreachable!("handled above"),
    }
}

fn run_play_command(dictionary: &Dictionary) -> Result<()> {
    use tilescore::interactive::{App, run_tui};

    let app = App::new(dictionary);
    run_tui(app)
}
