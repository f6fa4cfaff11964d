mod grid;
mod tables;

pub use self::grid::{print_board, print_difficulty_grid};
pub use self::tables::{
    batch as print_batch_report, retained as print_retained_report,
    scoring as print_score_report,
};
