use super::CliLogger;
use crate::reports;
use boardforge::api;
use boardforge::config::Config;
use boardforge::core_types::Item;
use boardforge::error::BfResult;
use clap::Args;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short = 'W', long)]
    pub width: Option<usize>,

    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    #[arg(short = 'b', long, default_value_t = 8)]
    pub boards: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

pub fn run(args: BatchArgs, items: &[Item]) -> BfResult<()> {
    let grid = api::resolve_grid(items, args.width, args.height)?;
    let logger = CliLogger {
        every: args.config.search.report_interval * 10,
    };

    let start = Instant::now();
    let generations =
        api::generate_batch(items, grid, &args.config, args.boards, args.seed, &logger)?;
    let elapsed = start.elapsed().as_secs_f32();

    let total_trials: usize = generations.iter().map(|g| g.trials).sum();
    info!(
        "🏁 {} boards in {:.2}s ({:.2}M trials/s)",
        generations.len(),
        elapsed,
        total_trials as f32 / elapsed.max(f32::EPSILON) / 1_000_000.0
    );

    reports::print_batch_report(&generations);

    if let Some(best) = generations
        .iter()
        .max_by(|a, b| a.selected.score.total_cmp(&b.selected.score))
    {
        reports::print_board("BEST OF BATCH", &best.board);
        println!("Score: {:.4}", best.selected.score);
    }
    Ok(())
}
