//! Rangecut: subtract exclude ranges from include ranges.
//!
//! Usage: rangecut <COMMAND> [OPTIONS]

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use rangecut::commands::{GenerateCommand, GenerateConfig, MergeCommand, SubtractCommand};
use rangecut::config;
use rangecut::error::{RangecutError, Result};
use rangecut::validate::{validate_field_with, Field};

#[derive(Parser)]
#[command(name = "rangecut")]
#[command(version)]
#[command(about = "Rangecut: subtract exclude ranges from include ranges and merge what is left", long_about = None)]
struct Cli {
    /// Accept whitespace around the hyphen of a range (e.g. "10 - 20").
    /// By default each range must be written exactly as START-END.
    #[arg(long, global = true)]
    lenient_hyphen: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove excluded ranges from included ranges
    Subtract {
        /// Ranges to include, e.g. "10-100, 200-300"
        #[arg(short, long, allow_hyphen_values = true, conflicts_with = "include_file")]
        include: Option<String>,

        /// Ranges to exclude, e.g. "20-30"
        #[arg(short, long, allow_hyphen_values = true, conflicts_with = "exclude_file")]
        exclude: Option<String>,

        /// Read included ranges from a file (use - for stdin)
        #[arg(long)]
        include_file: Option<PathBuf>,

        /// Read excluded ranges from a file (use - for stdin)
        #[arg(long)]
        exclude_file: Option<PathBuf>,

        /// Print statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Check a range list and report every problem found
    Validate {
        /// Range list to check
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,

        /// Treat an empty list as an error
        #[arg(short, long)]
        required: bool,
    },

    /// Merge overlapping and adjacent ranges
    Merge {
        /// Range list to merge
        #[arg(allow_hyphen_values = true, conflicts_with = "input")]
        text: Option<String>,

        /// Read the range list from a file (use - for stdin)
        #[arg(short = 'f', long)]
        input: Option<PathBuf>,
    },

    /// Generate a random range list
    Generate {
        /// Number of ranges
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Largest possible start position
        #[arg(long, default_value = "1000")]
        max_start: i64,

        /// Minimum range length
        #[arg(long, default_value = "1")]
        len_min: u32,

        /// Maximum range length
        #[arg(long, default_value = "100")]
        len_max: u32,

        /// Random seed for reproducibility
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    // This must be set before any format checking occurs
    if cli.lenient_hyphen {
        config::set_lenient_hyphen(true);
    }

    let result = match cli.command {
        Commands::Subtract {
            include,
            exclude,
            include_file,
            exclude_file,
            stats,
        } => run_subtract(include, exclude, include_file, exclude_file, stats),

        Commands::Validate { text, required } => run_validate(text, required),

        Commands::Merge { text, input } => run_merge(text, input),

        Commands::Generate {
            count,
            max_start,
            len_min,
            len_max,
            seed,
        } => run_generate(GenerateConfig {
            count,
            max_start,
            len_min,
            len_max,
            seed,
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_subtract(
    include: Option<String>,
    exclude: Option<String>,
    include_file: Option<PathBuf>,
    exclude_file: Option<PathBuf>,
    stats: bool,
) -> Result<()> {
    if is_stdin(include_file.as_ref()) && is_stdin(exclude_file.as_ref()) {
        return Err(RangecutError::InvalidArgument(
            "stdin can feed only one of --include-file and --exclude-file".to_string(),
        ));
    }

    let includes = read_field(include, include_file)?;
    let excludes = read_field(exclude, exclude_file)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let cmd = SubtractCommand::new();
    let result = cmd.run(includes.as_deref(), excludes.as_deref(), &mut handle)?;

    if stats {
        eprintln!("Subtract stats: {}", result);
    }

    Ok(())
}

fn run_validate(text: Option<String>, required: bool) -> Result<()> {
    let intervals = validate_field_with(
        Field::Includes,
        text.as_deref(),
        required,
        config::is_lenient_hyphen(),
    )?;
    println!("ok: {} interval(s)", intervals.len());
    Ok(())
}

fn run_merge(text: Option<String>, input: Option<PathBuf>) -> Result<()> {
    let text = read_field(text, input)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    MergeCommand::new().run(text.as_deref(), &mut handle)?;
    Ok(())
}

fn run_generate(config: GenerateConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    GenerateCommand::new(config).run(&mut handle)?;
    Ok(())
}

/// Resolve a field from inline text or a file.
///
/// File content is read line by line: blank lines are skipped and the
/// remaining lines are joined with commas, so one range per line works.
fn read_field(text: Option<String>, path: Option<PathBuf>) -> Result<Option<String>> {
    let path = match path {
        Some(p) => p,
        None => return Ok(text),
    };

    let content = if is_stdin(Some(&path)) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&path)?
    };

    let joined = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(Some(joined))
}

fn is_stdin(path: Option<&PathBuf>) -> bool {
    path.is_some_and(|p| p.as_os_str() == "-")
}
