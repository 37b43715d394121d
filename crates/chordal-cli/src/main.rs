#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;
use std::process::ExitCode;

use chordal_core::config::{ChordalConfig, resolve_config};
use chordal_core::{ErrorCode, McsStrategy};
use clap::{Parser, Subcommand};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cmd::{CodedError, Context, Outcome};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "chordal: chordal graph recognition",
    long_about = "Decide whether undirected graphs are chordal using Maximum Cardinality \
                  Search and a perfect elimination ordering check.\n\n\
                  Exit status: 0 chordal, 1 not chordal, 2 error."
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true)]
    json: bool,

    /// MCS selection strategy (overrides `[mcs] strategy` in chordal.toml).
    #[arg(long, global = true, value_name = "bucketed|linear")]
    strategy: Option<McsStrategy>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Check whether a graph file is chordal",
        long_about = "Load a graph from an edge list or JSON file and report whether it is \
                      chordal. A non-chordal graph is reported with a witness: two later \
                      neighbours of a vertex that are not adjacent.",
        after_help = "EXAMPLES:\n    # Check an edge list\n    chordal check graph.txt\n\n    \
                      # Include the elimination order\n    chordal check graph.json --order\n\n    \
                      # Machine-readable output\n    chordal check graph.txt --json"
    )]
    Check(cmd::check::CheckArgs),

    #[command(
        about = "Check a built-in dataset",
        after_help = "EXAMPLES:\n    # A square with a triangular roof\n    chordal dataset house\n\n    \
                      # A sized generator\n    chordal dataset cycle:6 --order"
    )]
    Dataset(cmd::datasets::DatasetArgs),

    #[command(about = "List the built-in datasets")]
    Datasets,

    #[command(
        about = "Print the MCS ranking of a graph file",
        long_about = "Print the Maximum Cardinality Search rank of every vertex, the \
                      resulting elimination order and each vertex's elimination parent.",
        after_help = "EXAMPLES:\n    # Use the quadratic reference strategy\n    chordal order graph.txt --strategy linear"
    )]
    Order(cmd::order::OrderArgs),

    #[command(
        about = "Check the block graph of a row/column relation",
        long_about = "Load a biadjacency (edge list with a `shape r c` header, or JSON with \
                      `shape` and `edges`) and check the chordality of its symmetric block \
                      graph. Ranks are reported separately for rows and columns.",
        after_help = "EXAMPLES:\n    chordal bipartite relation.txt --order"
    )]
    Bipartite(cmd::bipartite::BipartiteArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("CHORDAL_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "chordal=debug,info"
        } else {
            "chordal=info,warn"
        })
    });

    let format = env::var("CHORDAL_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: &Cli, config: &ChordalConfig, ctx: &Context) -> anyhow::Result<Outcome> {
    debug!(?config, "resolved configuration");
    match &cli.command {
        Commands::Check(args) => cmd::check::run_check(args, ctx),
        Commands::Dataset(args) => cmd::datasets::run_dataset(args, ctx),
        Commands::Datasets => cmd::datasets::run_datasets(ctx),
        Commands::Order(args) => cmd::order::run_order(args, ctx),
        Commands::Bipartite(args) => cmd::bipartite::run_bipartite(args, ctx),
    }
}

fn fail(mode: OutputMode, error: &CliError) -> ExitCode {
    // nothing more can be reported if stderr itself is gone
    let _ = render_error(mode, error);
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let early_mode = resolve_output_mode(cli.format, cli.json, None);
    let project_root = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => return fail(early_mode, &CliError::new(format!("no working directory: {e}"))),
    };
    let config = match resolve_config(&project_root) {
        Ok(config) => config,
        Err(e) => {
            let error = CodedError::new(ErrorCode::ConfigParseError, format!("{e:#}"));
            return fail(early_mode, &cmd::classify(&anyhow::Error::new(error)));
        }
    };

    let mode = resolve_output_mode(cli.format, cli.json, config.output.format.as_deref());
    let mut chordality = config.chordality(cli.verbose);
    if let Some(strategy) = cli.strategy {
        chordality.strategy = strategy;
    }
    let ctx = Context {
        mode,
        chordality,
        show_order: config.output.show_order,
    };

    match run(&cli, &config, &ctx) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => fail(mode, &cmd::classify(&e)),
    }
}
