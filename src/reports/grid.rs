use boardforge::core_types::{Board, Difficulty};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Color, Table};
use strum::IntoEnumIterator;

fn difficulty_color(d: Difficulty) -> Color {
    match d {
        Difficulty::Trivial => Color::Green,
        Difficulty::Easy => Color::Yellow,
        Difficulty::Medium => Color::DarkYellow,
        Difficulty::Hard => Color::Magenta,
        Difficulty::Extreme => Color::Red,
    }
}

pub fn print_board(name: &str, board: &Board) {
    println!("\nBoard: {} ({}x{})", name, board.width, board.height);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in board.rows() {
        let cells: Vec<Cell> = row
            .iter()
            .map(|c| match (c.name(), c.difficulty()) {
                (Some(n), Some(d)) => Cell::new(n)
                    .fg(difficulty_color(d))
                    .set_alignment(CellAlignment::Center),
                _ => Cell::new("-").set_alignment(CellAlignment::Center),
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
    print_legend();
}

fn print_legend() {
    let mut legend = Table::new();
    legend.load_preset(ASCII_FULL);
    legend.add_row(
        Difficulty::iter()
            .map(|d| Cell::new(format!("{} {}", d.value(), d)).fg(difficulty_color(d)))
            .collect::<Vec<Cell>>(),
    );
    println!("{}", legend);
}

pub fn print_difficulty_grid(name: &str, seq: &[Difficulty], width: usize) {
    println!("\nLayout: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for chunk in seq.chunks(width.max(1)) {
        let cells: Vec<Cell> = chunk
            .iter()
            .map(|&d| {
                Cell::new(d.value())
                    .fg(difficulty_color(d))
                    .set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}
