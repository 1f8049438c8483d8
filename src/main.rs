use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use check_eol::config::{CheckOptions, RELEASE_CYCLE_URL, release_cycle_cache_path};
use check_eol::eol::{CheckContext, check_files};
use check_eol::logging::init_logging;
use check_eol::release::source::{HttpReleaseCycleSource, bump_cache};
use check_eol::release::{EolPolicy, ReleaseCycleTable};

#[derive(Parser)]
#[command(name = "check-eol")]
#[command(version, about = "Flag end-of-life Python versions in requires-python")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    check: CheckArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Args)]
struct CheckArgs {
    /// pyproject.toml files to check
    files: Vec<PathBuf>,

    /// Release-cycle JSON to check against
    #[arg(long, env = "CHECK_EOL_CACHE")]
    cache_path: Option<PathBuf>,

    /// Date to treat as today, as YYYY-MM-DD (defaults to the current UTC date)
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Only trust the cached release status; ignore end-of-life dates
    #[arg(long)]
    status_only: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Refresh the release-cycle cache from the network
    BumpCache {
        /// Where to write the cache (defaults to the user data directory)
        #[arg(long)]
        output: Option<PathBuf>,

        #[arg(long, default_value = RELEASE_CYCLE_URL)]
        url: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref());

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Some(Command::BumpCache { output, url }) => {
            let output = output.unwrap_or_else(release_cycle_cache_path);
            let source = HttpReleaseCycleSource::new(url)?;

            let count = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(bump_cache(&source, &output))
                .with_context(|| format!("failed to refresh {}", output.display()))?;

            println!("Wrote {} releases to {}", count, output.display());
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let args = cli.check;
            let options = CheckOptions {
                cache_path: args.cache_path,
                reference_date: args
                    .reference_date
                    .unwrap_or_else(|| chrono::Utc::now().date_naive()),
                policy: if args.status_only {
                    EolPolicy::StatusOnly
                } else {
                    EolPolicy::StatusOrDate
                },
            };

            check(&args.files, &options)
        }
    }
}

fn check(files: &[PathBuf], options: &CheckOptions) -> anyhow::Result<ExitCode> {
    let table = load_table(options.cache_path.as_deref())?;
    info!(
        "Checking {} file(s) against {} releases as of {}",
        files.len(),
        table.len(),
        options.reference_date
    );

    let ctx = CheckContext {
        table: &table,
        reference_date: options.reference_date,
        policy: options.policy,
    };

    let failed = check_files(files, &ctx, &mut std::io::stdout().lock())?;
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Explicit cache, then the user cache written by `bump-cache`, then the bundled snapshot
fn load_table(cache_path: Option<&Path>) -> anyhow::Result<ReleaseCycleTable> {
    if let Some(path) = cache_path {
        return ReleaseCycleTable::from_path(path)
            .with_context(|| format!("failed to load release cycle from {}", path.display()));
    }

    let user_cache = release_cycle_cache_path();
    if user_cache.is_file() {
        return ReleaseCycleTable::from_path(&user_cache)
            .with_context(|| format!("failed to load release cycle from {}", user_cache.display()));
    }

    ReleaseCycleTable::bundled().context("bundled release cycle is invalid")
}
