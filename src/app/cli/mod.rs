//! CLI Adapter.

use clap::{Parser, Subcommand};

use crate::app::api::{self, ScaffoldOutcome};
use crate::domain::AppError;

const USAGE_EXAMPLE: &str = "Example: aoc-scaffold setup 13";

const AFTER_HELP: &str = "Examples:
  aoc-scaffold setup 13   # aoc_template/ -> day13-part1/
  aoc-scaffold copy 13    # day13-part1/ -> day13-part2/";

#[derive(Parser)]
#[command(name = "aoc-scaffold")]
#[command(version)]
#[command(
    about = "Scaffold per-day solution directories from a template project",
    long_about = None,
    after_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create day<DAY>-part1/ from the template directory
    #[clap(visible_alias = "s")]
    Setup {
        /// Day identifier, used verbatim in the directory name
        #[arg(allow_hyphen_values = true)]
        day: String,
    },
    /// Copy day<DAY>-part1/ into day<DAY>-part2/
    #[clap(visible_alias = "c")]
    Copy {
        /// Day identifier, used verbatim in the directory name
        #[arg(allow_hyphen_values = true)]
        day: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => exit_on_parse_error(err),
    };

    let result: Result<ScaffoldOutcome, AppError> = match cli.command {
        Commands::Setup { day } => api::setup(&day),
        Commands::Copy { day } => api::copy(&day),
    };

    match result {
        Ok(outcome) => report(&outcome),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Help and version go to stdout with status 0; every usage error exits 1.
fn exit_on_parse_error(err: clap::Error) -> ! {
    if !err.use_stderr() {
        err.exit();
    }
    eprint!("{}", err);
    eprintln!("{}", USAGE_EXAMPLE);
    std::process::exit(1);
}

fn report(outcome: &ScaffoldOutcome) {
    let noun = match outcome.replacements {
        1 => "replacement",
        _ => "replacements",
    };
    println!(
        "✅ Created {} from {}/ ({} {} in {})",
        outcome.display_path(),
        outcome.source,
        outcome.replacements,
        noun,
        outcome.manifest.display()
    );
    if outcome.replacements == 0 {
        println!(
            "⚠️  No occurrences of '{}' found in {}",
            outcome.source,
            outcome.manifest_display()
        );
    }
}
