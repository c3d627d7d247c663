//! Six-letter Wordle - CLI
//!
//! Full-screen game by default, with a line-based game, an auto-solver and a
//! whole-list test run as subcommands.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::io;
use wordle_six::{
    commands::{Game, print_test_all_statistics, require_known, run_test_all, solve_word},
    core::{MAX_GUESSES, Rules, Symbols, Vocabulary, WORD_LENGTH, Word},
    game::AnswerPool,
    output::{formatters::format_stats, print_solve_result},
    solver::{FilterPolicy, Solver, StrategyType},
    wordlists::{ANSWERS, VOCAB, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(name = "wordle_six", about = "Six-letter Wordle with a guess suggester", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy for suggestions: first (default), alphabetical, frequency
    #[arg(short, long, global = true, default_value = "first")]
    strategy: String,

    /// Guess vocabulary: 'embedded' (default) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Answer list: path to a file (default: embedded answers)
    #[arg(short, long, global = true)]
    answers: Option<String>,

    /// Only suggest words without repeated letters
    #[arg(short, long, global = true)]
    unique_letters: bool,

    /// Letters per word
    #[arg(long, global = true, default_value_t = WORD_LENGTH)]
    word_length: usize,

    /// Guesses allowed per round
    #[arg(long, global = true, default_value_t = MAX_GUESSES)]
    max_guesses: usize,

    /// Print feedback as G/Y/- letters instead of coloured squares
    #[arg(long, global = true)]
    letters: bool,

    /// Enable debug messages
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen game (default)
    Tui,

    /// Line-based game on stdin/stdout
    Play,

    /// Let the suggester solve a given answer
    Solve {
        /// The answer to solve
        word: String,
    },

    /// Run the suggester against every answer
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Word lists the session runs with
struct WordLists {
    vocabulary: Vocabulary,
    answers: Vec<Word>,
}

fn init_logging(verbose: bool, tui: bool) {
    let default_level = match (verbose, tui) {
        (true, _) => "debug",
        (false, true) => "off",
        (false, false) => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Load the vocabulary and answers based on the -w and -a flags
fn load_wordlists(wordlist: &str, answers: Option<&str>, length: usize) -> Result<WordLists> {
    let vocab_words = match wordlist {
        "embedded" => words_from_slice(VOCAB),
        path => load_from_file(path, length)
            .with_context(|| format!("Failed to load word list '{path}'"))?,
    };
    let answer_words = match answers {
        Some(path) => load_from_file(path, length)
            .with_context(|| format!("Failed to load answer list '{path}'"))?,
        None if wordlist == "embedded" => words_from_slice(ANSWERS),
        None => vocab_words.clone(),
    };

    if vocab_words.is_empty() {
        bail!("No {length}-letter words in the word list");
    }

    let vocabulary: Vocabulary = vocab_words.into_iter().collect();
    let unknown = answer_words
        .iter()
        .filter(|w| !vocabulary.contains(w.text()))
        .count();
    if unknown > 0 {
        log::warn!("{unknown} answers are not in the vocabulary and can never be guessed");
    }

    info!(
        "loaded {} vocabulary words and {} answers",
        vocabulary.len(),
        answer_words.len()
    );
    Ok(WordLists {
        vocabulary,
        answers: answer_words,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to the full-screen game if no command given
    let command = cli.command.unwrap_or(Commands::Tui);
    init_logging(cli.verbose, matches!(command, Commands::Tui));

    let symbols = if cli.letters {
        Symbols::LETTERS
    } else {
        Symbols::BLOCKS
    };
    let rules = Rules::new(cli.word_length, cli.max_guesses).with_symbols(symbols);
    let policy = FilterPolicy {
        reject_repeated_letters: cli.unique_letters,
    };
    let strategy = StrategyType::from_name(&cli.strategy);
    debug!("strategy {}, policy {policy:?}, rules {rules:?}", strategy.name());

    if cli.word_length != WORD_LENGTH && cli.wordlist == "embedded" {
        bail!("--word-length {} needs a custom --wordlist", cli.word_length);
    }

    let lists = load_wordlists(&cli.wordlist, cli.answers.as_deref(), rules.word_length)?;
    let solver = Solver::new(strategy, lists.vocabulary.words(), policy);

    match command {
        Commands::Tui => run_tui_command(rules, &lists, solver),
        Commands::Play => run_play_command(rules, &lists, &solver),
        Commands::Solve { word } => run_solve_command(&word, rules, &lists, &solver),
        Commands::TestAll { limit } => run_test_all_command(rules, &lists, &solver, limit),
    }
}

fn run_tui_command(
    rules: Rules,
    lists: &WordLists,
    solver: Solver<'_, StrategyType>,
) -> Result<()> {
    use wordle_six::interactive::{App, run_tui};

    let app = App::new(
        rules,
        &lists.vocabulary,
        solver,
        AnswerPool::new(lists.answers.clone()),
    )?;
    let stats = run_tui(app)?;
    if stats.games() > 0 {
        print!("{}", format_stats(&stats));
    }
    Ok(())
}

fn run_play_command(
    rules: Rules,
    lists: &WordLists,
    solver: &Solver<'_, StrategyType>,
) -> Result<()> {
    let game = Game::new(rules, &lists.vocabulary, solver);
    let mut answers = AnswerPool::new(lists.answers.clone());
    let stdin = io::stdin();
    let stdout = io::stdout();

    game.run(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut answers,
        &mut rand::rng(),
    )?;
    Ok(())
}

fn run_solve_command(
    word: &str,
    rules: Rules,
    lists: &WordLists,
    solver: &Solver<'_, StrategyType>,
) -> Result<()> {
    let target = rules
        .word(word)
        .with_context(|| format!("Invalid target word '{word}'"))?;
    require_known(&target, lists.vocabulary.words())?;

    let result = solve_word(target.text(), &rules, solver)?;
    print_solve_result(&result, &rules.symbols, true);
    Ok(())
}

fn run_test_all_command(
    rules: Rules,
    lists: &WordLists,
    solver: &Solver<'_, StrategyType>,
    limit: Option<usize>,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Six-letter Wordle Suggester Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} answers", lists.answers.len());
    println!("Strategy: {}", solver.strategy().name());
    println!();

    let stats = run_test_all(solver, &rules, &lists.answers, limit, true)?;
    print_test_all_statistics(&stats);
    Ok(())
}
