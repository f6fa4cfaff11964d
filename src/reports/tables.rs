use boardforge::api::Generation;
use boardforge::scorer::ScoreDetails;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn scoring(results: &[(String, ScoreDetails)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Board").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Mean"),
        Cell::new("Var"),
        Cell::new("Rows").fg(Color::Red),
        Cell::new("Cols").fg(Color::Red),
        Cell::new("Adj").fg(Color::Red),
        Cell::new("Pairs"),
        Cell::new("Spread").fg(Color::Red),
    ]);

    for i in 1..=8 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, d) in results {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.3}", d.total)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", d.mean)),
            Cell::new(format!("{:.2}", d.variance)),
            Cell::new(format!("{:.3}", d.row_penalty)),
            Cell::new(format!("{:.3}", d.col_penalty)),
            Cell::new(format!("{:.2}", d.adjacency_penalty)),
            Cell::new(d.adjacent_repeats),
            Cell::new(format!("{:.3}", d.variance_penalty)),
        ]);
    }
    println!("\n{}", table);
}

pub fn retained(scores: &[f32], selected_rank: usize) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Rank", "Score", ""]);

    for (i, &s) in scores.iter().enumerate() {
        let marker = if i == selected_rank { "◀ picked" } else { "" };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{:.4}", s)).set_alignment(CellAlignment::Right),
            Cell::new(marker).fg(Color::Green),
        ]);
    }
    println!("\nRetained Candidates\n{}", table);
}

pub fn batch(generations: &[Generation]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Best Kept"),
        Cell::new("Filled"),
        Cell::new("Empty").fg(Color::Red),
    ]);

    for (i, g) in generations.iter().enumerate() {
        let best_kept = g.retained_scores.first().copied().unwrap_or(g.selected.score);
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{:.4}", g.selected.score)).fg(Color::Cyan),
            Cell::new(format!("{:.4}", best_kept)),
            Cell::new(g.board.filled_count()),
            Cell::new(g.board.empty_count()).fg(Color::Red),
        ]);
    }
    println!("\n{}", table);
}
