//! Rendering contract between a session and its host.

use std::collections::HashSet;

use wordsearch_core::Position;

/// Visual output of a session.
///
/// Calls arrive synchronously from inside pointer handling, so
/// implementations should not block.
pub trait RenderSink {
    /// Full redraw of the letter grid with the cells already found.
    fn render_grid(&mut self, grid: &[String], found_cells: &HashSet<Position>);

    /// Replaces the in-progress highlight. An empty path clears it.
    fn highlight_path(&mut self, path: &[Position]);

    /// Cells of a newly found word. Found cells stay marked for the rest of
    /// the game.
    fn mark_found(&mut self, cells: &[Position]);

    fn render_word_list(&mut self, words: &[String], found: &HashSet<String>);

    fn update_progress(&mut self, found: usize, total: usize);

    fn timer_tick(&mut self, display: &str);

    fn show_completion(&mut self, final_time: &str);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render_grid(&mut self, _grid: &[String], _found_cells: &HashSet<Position>) {}
    fn highlight_path(&mut self, _path: &[Position]) {}
    fn mark_found(&mut self, _cells: &[Position]) {}
    fn render_word_list(&mut self, _words: &[String], _found: &HashSet<String>) {}
    fn update_progress(&mut self, _found: usize, _total: usize) {}
    fn timer_tick(&mut self, _display: &str) {}
    fn show_completion(&mut self, _final_time: &str) {}
}

/// One recorded [`RenderSink`] call. Sets are stored sorted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkEvent {
    RenderGrid { found_cells: Vec<Position> },
    HighlightPath(Vec<Position>),
    MarkFound(Vec<Position>),
    RenderWordList { found: Vec<String> },
    UpdateProgress { found: usize, total: usize },
    TimerTick(String),
    ShowCompletion(String),
}

/// Records every call for later inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Drains the recorded events.
    pub fn take(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }

    /// Most recent highlight, if any was drawn.
    pub fn last_highlight(&self) -> Option<&[Position]> {
        self.events.iter().rev().find_map(|event| match event {
            SinkEvent::HighlightPath(path) => Some(path.as_slice()),
            _ => None,
        })
    }

    pub fn found_batches(&self) -> Vec<&[Position]> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::MarkFound(cells) => Some(cells.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn completion(&self) -> Option<&str> {
        self.events.iter().find_map(|event| match event {
            SinkEvent::ShowCompletion(time) => Some(time.as_str()),
            _ => None,
        })
    }
}

impl RenderSink for RecordingSink {
    fn render_grid(&mut self, _grid: &[String], found_cells: &HashSet<Position>) {
        let mut found_cells: Vec<_> = found_cells.iter().copied().collect();
        found_cells.sort_unstable();
        self.events.push(SinkEvent::RenderGrid { found_cells });
    }

    fn highlight_path(&mut self, path: &[Position]) {
        self.events.push(SinkEvent::HighlightPath(path.to_vec()));
    }

    fn mark_found(&mut self, cells: &[Position]) {
        self.events.push(SinkEvent::MarkFound(cells.to_vec()));
    }

    fn render_word_list(&mut self, _words: &[String], found: &HashSet<String>) {
        let mut found: Vec<_> = found.iter().cloned().collect();
        found.sort_unstable();
        self.events.push(SinkEvent::RenderWordList { found });
    }

    fn update_progress(&mut self, found: usize, total: usize) {
        self.events.push(SinkEvent::UpdateProgress { found, total });
    }

    fn timer_tick(&mut self, display: &str) {
        self.events.push(SinkEvent::TimerTick(display.to_owned()));
    }

    fn show_completion(&mut self, final_time: &str) {
        self.events.push(SinkEvent::ShowCompletion(final_time.to_owned()));
    }
}
