use std::io::BufRead;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};

use crate::checker::CandidateChecker;
use crate::search::{ExpressionSearch, ParenStrategy, SearchConfig};
use crate::search::constants::{DEFAULT_MAX_DIGITS, DEFAULT_TARGET};
use crate::utils::validate_digit_string;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How the solver enumerates parenthesizations
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ParenMode {
    AdjacentTriple,
    Exhaustive,
}

impl From<ParenMode> for ParenStrategy {
    fn from(mode: ParenMode) -> Self {
        match mode {
            ParenMode::AdjacentTriple => ParenStrategy::AdjacentTriple,
            ParenMode::Exhaustive => ParenStrategy::Exhaustive,
        }
    }
}

/// Hectox - solve and check hundred-target digit puzzles
#[derive(Parser, Debug)]
#[command(name = "hectox")]
#[command(about = "Insert operators and parentheses into a digit sequence to reach 100")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for an expression over the number's digits that reaches the target
    Solve {
        /// The puzzle number; its decimal digits form the sequence
        number: u64,

        /// Target value to reach
        #[arg(short, long, default_value_t = DEFAULT_TARGET)]
        target: f64,

        /// Parenthesization strategy
        #[arg(short, long, value_enum, default_value = "adjacent-triple")]
        parens: ParenMode,

        /// Upper bound on the digit count
        #[arg(long, default_value_t = DEFAULT_MAX_DIGITS)]
        max_digits: usize,
    },
    /// Check a candidate solution line against a digit line
    Check {
        /// The original digit sequence; read from stdin when omitted
        digits: Option<String>,

        /// The candidate expression; read from stdin when omitted
        candidate: Option<String>,

        /// Target value the candidate must reach
        #[arg(short, long, default_value_t = DEFAULT_TARGET)]
        target: f64,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level);

    match args.command {
        Command::Solve {
            number,
            target,
            parens,
            max_digits,
        } => run_solve(number, target, parens, max_digits),
        Command::Check {
            digits,
            candidate,
            target,
        } => run_check(digits, candidate, target),
    }
}

fn run_solve(number: u64, target: f64, parens: ParenMode, max_digits: usize) -> Result<()> {
    let digits = number.to_string();

    let search = ExpressionSearch::with_config(SearchConfig {
        target,
        paren_strategy: parens.into(),
        max_digits,
        ..SearchConfig::default()
    });

    info!("Searching digits '{}' for target {}", digits, target);

    match search.find_solution(&digits).context("Search failed")? {
        Some(expression) => println!("Solution: {} = {}", expression, target),
        None => {
            warn!("Search space exhausted");
            println!("No solution found");
        }
    }
    Ok(())
}

fn run_check(digits: Option<String>, candidate: Option<String>, target: f64) -> Result<()> {
    let (digits, candidate) = match (digits, candidate) {
        (Some(d), Some(c)) => (d, c),
        (None, None) => read_input_lines()?,
        _ => bail!("Provide both the digit line and the candidate line, or neither"),
    };

    validate_digit_string(&digits).context("Invalid digit string")?;

    let checker = CandidateChecker::new();
    let report = checker.check(&digits, &candidate, target);

    if let Some(value) = report.value {
        info!("Candidate evaluated to {}", value);
    }

    println!("{}", if report.valid { "valid" } else { "invalid" });
    Ok(())
}

fn read_input_lines() -> Result<(String, String)> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let digits = lines
        .next()
        .context("Missing digit line on stdin")?
        .context("Failed to read digit line")?;
    let candidate = lines
        .next()
        .context("Missing candidate line on stdin")?
        .context("Failed to read candidate line")?;
    Ok((digits.trim().to_string(), candidate.trim().to_string()))
}
