//! Plain-text renderer for terminals and logs.
use std::collections::HashSet;
use std::io::Write;

use runtime::RenderSink;
use wordsearch_core::{Position, format_word_for_display};

/// Draws the board as text.
///
/// Found cells are drawn as `(M)`, cells of the live selection as `[M]`.
/// The board is redrawn whenever the highlight or the found set changes.
/// Timer ticks are printed once per displayed second.
pub struct TextRenderer<W: Write> {
    out: W,
    grid: Vec<String>,
    found_cells: HashSet<Position>,
    highlight: HashSet<Position>,
    last_second: Option<String>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            grid: Vec::new(),
            found_cells: HashSet::new(),
            highlight: HashSet::new(),
            last_second: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_board(&mut self) {
        let mut board = String::new();
        for (row, line) in self.grid.iter().enumerate() {
            for (col, letter) in line.chars().enumerate() {
                let pos = Position::new(row as i32, col as i32);
                let cell = if self.found_cells.contains(&pos) {
                    format!("({letter})")
                } else if self.highlight.contains(&pos) {
                    format!("[{letter}]")
                } else {
                    format!(" {letter} ")
                };
                board.push_str(&cell);
            }
            board.push('\n');
        }
        self.write_text(&board);
    }

    fn write_text(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!("failed to write to terminal: {e}");
        }
    }
}

impl<W: Write> RenderSink for TextRenderer<W> {
    fn render_grid(&mut self, grid: &[String], found_cells: &HashSet<Position>) {
        self.grid = grid.to_vec();
        self.found_cells = found_cells.clone();
        self.highlight.clear();
        self.draw_board();
    }

    fn highlight_path(&mut self, path: &[Position]) {
        let highlight: HashSet<Position> = path.iter().copied().collect();
        if highlight == self.highlight {
            return;
        }
        self.highlight = highlight;
        self.draw_board();
    }

    fn mark_found(&mut self, cells: &[Position]) {
        self.found_cells.extend(cells.iter().copied());
        self.draw_board();
    }

    fn render_word_list(&mut self, words: &[String], found: &HashSet<String>) {
        let list = words
            .iter()
            .map(|word| {
                let shown = format_word_for_display(word);
                if found.contains(word) {
                    format!("~{shown}~")
                } else {
                    shown
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        self.write_text(&format!("Words: {list}\n"));
    }

    fn update_progress(&mut self, found: usize, total: usize) {
        self.write_text(&format!("Found {found} of {total}\n"));
    }

    fn timer_tick(&mut self, display: &str) {
        // "MM:SS.CC" -> "MM:SS"
        let second = display.split('.').next().unwrap_or(display).to_owned();
        if self.last_second.as_ref() == Some(&second) {
            return;
        }
        self.write_text(&format!("Time {second}\n"));
        self.last_second = Some(second);
    }

    fn show_completion(&mut self, final_time: &str) {
        self.write_text(&format!("Puzzle complete in {final_time}!\n"));
    }
}
