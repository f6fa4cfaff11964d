use boardforge::config::ScoringWeights;
use boardforge::error::BfResult;
use boardforge::loader::load_items;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/items.csv")]
    items: String,

    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Generate(cmd::generate::GenerateArgs),
    Score(cmd::score::ScoreArgs),
    Batch(cmd::batch::BatchArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing BoardForge...");

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> BfResult<()> {
    // Flags like --adjacency-penalty live in the subcommand's matches, not the root.
    let sub_matches = matches.subcommand().map(|(_, m)| m).unwrap_or(matches);
    let Cli {
        command,
        items,
        weights,
        ..
    } = cli;

    match command {
        Commands::Generate(mut args) => {
            resolve_weights(&weights, &mut args.config.weights, sub_matches)?;
            let items = load_items(&items)?;
            cmd::generate::run(args, &items)
        }
        Commands::Score(mut args) => {
            resolve_weights(&weights, &mut args.weights, sub_matches)?;
            cmd::score::run(args)
        }
        Commands::Batch(mut args) => {
            resolve_weights(&weights, &mut args.config.weights, sub_matches)?;
            let items = load_items(&items)?;
            cmd::batch::run(args, &items)
        }
    }
}

/// JSON weights become the base; flags passed explicitly still win.
fn resolve_weights(
    path: &Option<String>,
    cli_weights: &mut ScoringWeights,
    sub_matches: &ArgMatches,
) -> BfResult<()> {
    if let Some(path) = path {
        info!("⚖️  Loading Weights from: {}", path);
        let mut file_weights = ScoringWeights::load_from_file(path)?;
        file_weights.merge_from_cli(cli_weights, sub_matches);
        *cli_weights = file_weights;
    }
    Ok(())
}
