//! Wordle Ranker CLI
//!
//! Command-line front end for feedback encoding, candidate narrowing, guess
//! ranking and simulated games.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use clap::{ArgAction, Parser, Subcommand};
use wordle_ranker::{
    encode, BatchReport, Config, Feedback, Ranker, Result, Simulator, Word,
};

/// Narrow Wordle candidates and rank the next guess
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Newline-delimited dictionary file (defaults to the embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Worker threads for ranking and simulation
    #[arg(short, long, global = true)]
    threads: Option<usize>,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the feedback GUESS earns against SECRET
    Encode { guess: Word, secret: Word },

    /// List the words consistent with textual feedback such as c1r2a2n0e0
    Filter {
        #[arg(required = true)]
        feedback: Vec<Feedback>,
    },

    /// Rank the next guess given prior feedback
    Rank {
        feedback: Vec<Feedback>,

        /// Number of guesses to show
        #[arg(long)]
        top: Option<usize>,
    },

    /// Play one game against SECRET
    Solve {
        secret: Word,

        /// First guess (defaults to crane)
        #[arg(long, conflicts_with = "ranked_opening")]
        opening: Option<Word>,

        /// Rank the first guess instead of using an opening word
        #[arg(long)]
        ranked_opening: bool,
    },

    /// Play a seeded batch of games; repeat --opening to compare openers
    Simulate {
        #[arg(long, default_value_t = 100)]
        games: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        #[arg(long = "opening")]
        openers: Vec<Word>,
    },
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut stderr = io::stderr();
            let mut i = 0;
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stderr, "\r{} {}", frames[i % frames.len()], message);
                let _ = stderr.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stderr, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stderr.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn history_of(feedback: &[Feedback]) -> Vec<(Word, Feedback)> {
    feedback.iter().map(|f| (f.guess(), *f)).collect()
}

fn print_words(words: impl IntoIterator<Item = Word>) {
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 && i % 10 == 0 {
            println!();
        }
        print!("{:>8}", word.to_string().to_uppercase());
    }
    println!();
}

fn print_report(report: &BatchReport) {
    let opening = report
        .opening
        .map_or_else(|| "(ranked)".to_string(), |w| w.to_string().to_uppercase());
    println!("Opening: {}", opening);
    println!("Guess distribution:");
    for (attempts, count) in &report.distribution {
        let pct = *count as f64 / report.games as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / report.games).max(1));
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", attempts, count, pct, bar);
    }
    println!("Average guesses: {:.3}", report.mean_attempts());
    if let Some(worst) = &report.worst {
        let guesses: Vec<String> = worst.guesses().iter().map(Word::to_string).collect();
        println!("Hardest: {} ({})", worst.secret, guesses.join(" → "));
    }
    println!();
}

fn run(cli: Cli) -> Result<()> {
    let defaults = Config::default();
    let config = Config {
        threads: cli.threads,
        dictionary_path: cli.dictionary,
        ..defaults
    };
    config.configure_threads()?;

    match cli.command {
        Command::Encode { guess, secret } => {
            let feedback = encode(guess, secret);
            println!("{}", feedback);
            println!("{}", feedback.to_emoji_string());
        }
        Command::Filter { feedback } => {
            let dictionary = config.load_dictionary()?;
            let remaining = wordle_ranker::narrow(&history_of(&feedback), &dictionary)?;
            println!("Remaining possibilities: {}", remaining.len());
            if remaining.is_empty() {
                println!("No words match this feedback.");
            } else {
                print_words(remaining);
            }
        }
        Command::Rank { feedback, top } => {
            let dictionary = config.load_dictionary()?;
            let ranker = Ranker::new(&dictionary);
            let history = history_of(&feedback);
            let remaining = ranker.remaining(&history)?.len();

            let spinner = Spinner::new("Ranking...");
            let ranked = ranker.rank(&history);
            spinner.stop();
            let ranked = ranked?;

            if ranked.is_empty() {
                println!("No possible words remaining.");
                return Ok(());
            }
            let top = top.unwrap_or(config.top);
            println!("Remaining possibilities: {}", remaining);
            println!("{:>4} {:>8} {:>12}", "#", "Word", "Exp. Remain");
            println!("{}", "-".repeat(26));
            for (i, guess) in ranked.iter().take(top).enumerate() {
                println!(
                    "{:>4} {:>8} {:>12.3}",
                    i + 1,
                    guess.word.to_string().to_uppercase(),
                    guess.expected_remaining
                );
            }
        }
        Command::Solve {
            secret,
            opening,
            ranked_opening,
        } => {
            let dictionary = config.load_dictionary()?;
            let opening = if ranked_opening {
                None
            } else {
                opening.or(config.opening_word)
            };
            let simulator = Simulator::new(Ranker::new(&dictionary), opening);

            println!("Solving for: {}", secret.to_string().to_uppercase());
            println!();
            let record = simulator.play(secret)?;
            for (i, turn) in record.turns.iter().enumerate() {
                println!(
                    "Guess {}: {} → {} ({} candidates)",
                    i + 1,
                    turn.guess.to_string().to_uppercase(),
                    turn.feedback.to_emoji_string(),
                    turn.candidates
                );
            }
            println!();
            println!("Solved in {} guesses.", record.attempts());
        }
        Command::Simulate {
            games,
            seed,
            openers,
        } => {
            let dictionary = config.load_dictionary()?;
            let simulator = Simulator::new(Ranker::new(&dictionary), config.opening_word);

            let spinner = Spinner::new("Simulating...");
            let start = Instant::now();
            let reports = if openers.is_empty() {
                simulator.run_batch(games, seed).map(|report| vec![report])
            } else {
                simulator.compare_openers(&openers, games, seed)
            };
            let elapsed = start.elapsed();
            spinner.stop();

            for report in &reports? {
                print_report(report);
            }
            println!("Time elapsed: {:.2?}", elapsed);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
