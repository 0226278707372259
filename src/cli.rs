use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fourfold::{
    BuildConfig, Equation, EquationSearcher, LogObserver, ProgressObserver, SolutionMapBuilder,
    Summary,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

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

/// Fourfold - Find a true equation for every 4-digit number
#[derive(Parser, Debug)]
#[command(name = "fourfold")]
#[command(about = "Find true equations built from the digits of 4-digit numbers")]
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
    /// Search every number with the given digit count
    All {
        /// Digits per number (only 4 is supported)
        #[arg(short, long, default_value_t = 4)]
        digits: usize,

        /// Worker threads (default: one per core)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Search numbers one after another on the current thread
        #[arg(long)]
        sequential: bool,

        /// Also print numbers without an equation
        #[arg(long)]
        show_unsolved: bool,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
    /// Find the first equation for one number
    Solve {
        /// A 4-digit number
        number: u32,
    },
    /// Evaluate an equation such as "1+1==1+1"
    Check {
        /// Equation text using + - * / %, parentheses, sqrt(...), factorial(...) and ==
        equation: String,
    },
}

/// Logs each outcome and advances an optional progress bar
struct CliObserver {
    bar: Option<ProgressBar>,
}

impl CliObserver {
    fn new(show_progress: bool) -> Result<Self> {
        let bar = if show_progress {
            let bar = ProgressBar::new(0);
            bar.set_style(
                ProgressStyle::with_template(
                    "{elapsed_precise} {bar:36.cyan/blue} {pos:>4}/{len:4} {msg}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("■■□"),
            );
            Some(bar)
        } else {
            None
        };
        Ok(Self { bar })
    }
}

impl ProgressObserver for CliObserver {
    fn on_start(&self, total: usize) {
        LogObserver.on_start(total);
        if let Some(bar) = &self.bar {
            bar.set_length(total as u64);
        }
    }

    fn on_number(&self, number: u32, equation: Option<&Equation>) {
        LogObserver.on_number(number, equation);
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn on_finish(&self, summary: &Summary) {
        LogObserver.on_finish(summary);
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

fn run_all(config: BuildConfig, show_unsolved: bool, show_progress: bool) -> Result<()> {
    let observer = CliObserver::new(show_progress)?;
    let map = SolutionMapBuilder::new(config)
        .build_with_observer(&observer)
        .context("Search failed")?;

    for (number, equation) in map.iter() {
        match equation {
            Some(eq) => println!("{}: {}", number, eq),
            None if show_unsolved => println!("{}: none", number),
            None => {}
        }
    }
    println!("{}", map.summary());
    Ok(())
}

fn run_solve(number: u32) -> Result<()> {
    info!("Searching for an equation for {}", number);
    let found = EquationSearcher::new()
        .search(number)
        .with_context(|| format!("Cannot search {}", number))?;

    match found {
        Some(eq) => println!("{}", eq),
        None => {
            warn!("No equation found for {}", number);
            println!("none");
        }
    }
    Ok(())
}

fn run_check(text: &str) -> Result<()> {
    let equation: Equation = text
        .parse()
        .with_context(|| format!("Invalid equation '{}'", text))?;

    match equation.evaluate() {
        Ok((lhs, rhs)) => {
            let holds = equation.holds().unwrap_or(false);
            println!("{} (left = {}, right = {})", holds, lhs, rhs);
        }
        Err(e) => println!("invalid: {}", e),
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::All {
            digits,
            threads,
            sequential,
            show_unsolved,
            no_progress,
        } => {
            let config = BuildConfig {
                num_digits: digits,
                threads,
                parallel: !sequential,
            };
            run_all(config, show_unsolved, !no_progress)
        }
        Command::Solve { number } => run_solve(number),
        Command::Check { equation } => run_check(&equation),
    }
}
