//! Wordle Game - CLI
//!
//! Guess the five-letter word in a limited number of attempts. Scores are kept
//! per player in a CSV file between runs.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{play_round, show_stats},
    game::{
        DEFAULT_MAX_ATTEMPTS, DEFAULT_SCORES_PATH, DEFAULT_WORD_LIMIT, DEFAULT_WORDS_PATH,
        GameConfig, WordSource, WordleGame,
    },
    ledger::ScoreLedger,
    logging,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word; scores are saved per player",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Player name used for the score ledger
    #[arg(short, long, global = true, default_value = "Alice")]
    player: String,

    /// Word file (one word per line), or 'builtin' for the bundled list
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDS_PATH)]
    words: String,

    /// Score file
    #[arg(short, long, global = true, default_value = DEFAULT_SCORES_PATH)]
    scores: PathBuf,

    /// Read at most this many lines from the word file
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LIMIT)]
    limit: usize,

    /// Read the whole word file
    #[arg(long, global = true, conflicts_with = "limit")]
    no_limit: bool,

    /// Attempts per round
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one round (default)
    Play,

    /// Show every player's high score and games played
    Stats,
}

impl Cli {
    fn config(&self) -> Result<GameConfig> {
        if self.attempts == 0 {
            bail!("--attempts must be at least 1");
        }
        let words = match self.words.as_str() {
            "builtin" => WordSource::Builtin,
            path => WordSource::File(PathBuf::from(path)),
        };
        Ok(GameConfig {
            words,
            scores_path: self.scores.clone(),
            word_limit: (!self.no_limit).then_some(self.limit),
            max_attempts: self.attempts,
        })
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Error: {e}");
    }

    // Failures are reported but do not change the exit status
    if let Err(e) = run(&cli) {
        println!("Error: {e:#}");
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config()?;

    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(&cli.player, &config),
        Commands::Stats => run_stats_command(&config),
    }
}

fn run_play_command(player: &str, config: &GameConfig) -> Result<()> {
    let mut game = WordleGame::new(config)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    play_round(&mut game, player, &mut input, &mut out)?;
    Ok(())
}

fn run_stats_command(config: &GameConfig) -> Result<()> {
    let ledger = ScoreLedger::open(&config.scores_path)?;
    show_stats(&ledger, &mut io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wordle_game").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_game_config() {
        let cli = parse(&[]);
        let config = cli.config().unwrap();

        assert_eq!(cli.player, "Alice");
        assert!(cli.command.is_none());
        assert_eq!(
            config.words,
            WordSource::File(PathBuf::from(DEFAULT_WORDS_PATH))
        );
        assert_eq!(config.word_limit, Some(DEFAULT_WORD_LIMIT));
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.scores_path, PathBuf::from(DEFAULT_SCORES_PATH));
    }

    #[test]
    fn zero_attempts_is_rejected() {
        assert!(parse(&["--attempts", "0"]).config().is_err());
        assert_eq!(parse(&["-a", "6"]).config().unwrap().max_attempts, 6);
    }

    #[test]
    fn no_limit_reads_whole_file() {
        assert_eq!(parse(&["--no-limit"]).config().unwrap().word_limit, None);
        assert_eq!(parse(&["-l", "10"]).config().unwrap().word_limit, Some(10));
    }

    #[test]
    fn no_limit_conflicts_with_limit() {
        let args = ["wordle_game", "--no-limit", "--limit", "10"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn builtin_selects_embedded_words() {
        let config = parse(&["--words", "builtin"]).config().unwrap();
        assert_eq!(config.words, WordSource::Builtin);

        let config = parse(&["-w", "words.txt"]).config().unwrap();
        assert_eq!(config.words, WordSource::File(PathBuf::from("words.txt")));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["stats", "--player", "Bob", "--scores", "s.csv"]);
        assert!(matches!(cli.command, Some(Commands::Stats)));
        assert_eq!(cli.player, "Bob");
        assert_eq!(cli.config().unwrap().scores_path, PathBuf::from("s.csv"));
    }
}
