use super::{make_rng, CliLogger};
use crate::reports;
use boardforge::api;
use boardforge::config::Config;
use boardforge::core_types::Item;
use boardforge::error::BfResult;
use clap::Args;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short = 'W', long)]
    pub width: Option<usize>,

    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: GenerateArgs, items: &[Item]) -> BfResult<()> {
    let grid = api::resolve_grid(items, args.width, args.height)?;
    info!(
        "🧩 Grid {}x{} | Trials: {} | Retain: {}",
        grid.width, grid.height, args.config.search.trials, args.config.search.retain
    );

    let mut rng = make_rng(args.seed);
    let logger = CliLogger {
        every: args.config.search.report_interval * 10,
    };

    let start = Instant::now();
    let generation = api::generate_board(items, grid, &args.config, &mut rng, &logger)?;
    info!("⏱️  Generated in {:.2}s", start.elapsed().as_secs_f32());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&generation)?);
        return Ok(());
    }

    reports::print_board("GENERATED", &generation.board);
    reports::print_score_report(&[("Selected".to_string(), generation.details)]);
    reports::print_retained_report(&generation.retained_scores, generation.selected_rank);

    println!("Score: {:.4}", generation.selected.score);
    println!(
        "Empty: {} of {}",
        generation.board.empty_count(),
        generation.board.len()
    );
    Ok(())
}
