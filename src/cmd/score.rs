use crate::reports;
use boardforge::api;
use boardforge::config::ScoringWeights;
use boardforge::core_types::GridSize;
use boardforge::error::{BfResult, BoardForgeError};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub weights: ScoringWeights,

    /// Difficulty ordinals, row-major, e.g. "1,2,3,4" or "1234".
    #[arg(short, long)]
    pub layout: String,

    #[arg(short = 'W', long)]
    pub width: Option<usize>,

    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs) -> BfResult<()> {
    let layout = api::parse_layout(&args.layout)?;

    let grid = match (args.width, args.height) {
        (Some(w), Some(h)) => GridSize::new(w, h)?,
        (None, None) => {
            let side = (layout.len() as f64).sqrt() as usize;
            if side * side != layout.len() {
                return Err(BoardForgeError::Validation(format!(
                    "{} cells do not form a square; pass --width and --height",
                    layout.len()
                )));
            }
            GridSize::new(side, side)?
        }
        _ => {
            return Err(BoardForgeError::Config(
                "--width and --height must be given together".to_string(),
            ))
        }
    };

    let details = api::score_layout(&layout, grid, &args.weights)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    reports::print_difficulty_grid("INPUT", &layout, grid.width);
    reports::print_score_report(&[("Input".to_string(), details)]);
    println!("Score: {:.4}", details.total);
    Ok(())
}
