use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use family_budget::cli::{
    handle_config_command, handle_report_command, handle_validate_command, load_ledger,
    load_validated_ledger, LedgerArgs, ReportCommands,
};
use family_budget::config::{BudgetPaths, Settings};

/// Environment variable holding the log filter
const LOG_ENV_VAR: &str = "FAMILY_BUDGET_LOG";

#[derive(Parser)]
#[command(
    name = "fambudget",
    version,
    about = "Family finance dashboard in the terminal",
    long_about = "fambudget reads a ledger snapshot and reports the household's \
                  balance, where the money went by category, and how each \
                  budget is holding up."
)]
struct Cli {
    #[command(flatten)]
    ledger: LedgerArgs,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    /// Check the ledger for unknown categories and duplicate keys
    Validate {
        /// Allow categories outside the known set
        #[arg(long)]
        lenient: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "family_budget=debug"
    } else {
        "family_budget=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Report(cmd)) => {
            let snapshot = load_validated_ledger(&paths, &settings, &cli.ledger)?;
            handle_report_command(&snapshot, &settings, cmd)?;
        }
        Some(Commands::Validate { lenient }) => {
            let snapshot = load_ledger(&paths, &settings, &cli.ledger)?;
            handle_validate_command(&snapshot, &settings, lenient)?;
        }
        Some(Commands::Config { init }) => {
            handle_config_command(&paths, &settings, init)?;
        }
        None => {
            println!("fambudget - family finance dashboard");
            println!();
            println!("Run 'fambudget --help' for usage information.");
            println!("Run 'fambudget dashboard' for the full overview.");
        }
    }

    Ok(())
}
