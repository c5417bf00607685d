//! A single game of word search, from start screen to completion.
//!
//! [`Session`] owns every piece of mutable state for one game: the selection,
//! the game phase, the found cells, the timer, and the pointer classifier.
//! Hosts forward raw pointer events and read results back through the
//! [`RenderSink`] they supplied.

use std::collections::HashSet;
use std::time::Duration;

use wordsearch_core::geometry::{get_line_cells, is_valid_line};
use wordsearch_core::{
    Clock, DragPathPolicy, GameConfig, GameState, InteractionKind, InteractionSink,
    PointerClassifier, PointerEvent, PointerSurface, Position, PrecisionTimer, PuzzleConfig,
    SelectionMode, SelectionState, TapOutcome, try_match,
};

use crate::sink::RenderSink;
use crate::view::{CellState, cell_states};

pub struct Session<R, C> {
    classifier: PointerClassifier,
    game: Game<R, C>,
}

/// Everything except the classifier, so the classifier can borrow it as its
/// interaction sink.
struct Game<R, C> {
    puzzle: PuzzleConfig,
    state: GameState,
    selection: SelectionState,
    found_cells: HashSet<Position>,
    timer: PrecisionTimer,
    /// The current press created the tap anchor.
    press_anchored: bool,
    /// Selection replaced by `drag_start`, restored if the press ends as a tap.
    before_drag: Option<SelectionState>,
    final_time: Option<String>,
    sink: R,
    clock: C,
}

impl<R: RenderSink, C: Clock> Session<R, C> {
    pub fn new(puzzle: PuzzleConfig, config: &GameConfig, sink: R, clock: C) -> Self {
        Self {
            classifier: PointerClassifier::new(config),
            game: Game {
                puzzle,
                state: GameState::new(),
                selection: SelectionState::new(),
                found_cells: HashSet::new(),
                timer: PrecisionTimer::new(),
                press_anchored: false,
                before_drag: None,
                final_time: None,
                sink,
                clock,
            },
        }
    }

    pub fn puzzle(&self) -> &PuzzleConfig {
        &self.game.puzzle
    }

    pub fn state(&self) -> &GameState {
        &self.game.state
    }

    pub fn selection(&self) -> &SelectionState {
        &self.game.selection
    }

    pub fn found_cells(&self) -> &HashSet<Position> {
        &self.game.found_cells
    }

    pub fn drag_policy(&self) -> DragPathPolicy {
        self.classifier.drag_policy()
    }

    /// Final time as shown on completion, once the puzzle is complete.
    pub fn final_time(&self) -> Option<&str> {
        self.game.final_time.as_deref()
    }

    /// Time played, frozen at completion.
    pub fn elapsed(&self) -> Duration {
        self.game.state.elapsed(self.game.clock.now())
    }

    pub fn sink(&self) -> &R {
        &self.game.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.game.sink
    }

    pub fn into_sink(self) -> R {
        self.game.sink
    }

    pub fn clock(&self) -> &C {
        &self.game.clock
    }

    /// Starts (or restarts) the game: clears all progress, draws the board,
    /// and starts the timer.
    pub fn start_game(&mut self) {
        let now = self.game.clock.now();
        let game = &mut self.game;

        game.state.reset();
        game.state.start(now);
        game.selection.clear_selection();
        game.found_cells.clear();
        game.press_anchored = false;
        game.before_drag = None;
        game.final_time = None;
        self.classifier.reset();

        game.sink.render_grid(game.puzzle.grid(), &game.found_cells);
        game.sink
            .render_word_list(game.puzzle.words(), game.state.found_words());
        game.sink.update_progress(0, game.puzzle.total_words());
        game.sink.highlight_path(&[]);
        game.timer.start(now);

        tracing::info!(
            title = game.puzzle.title(),
            words = game.puzzle.total_words(),
            grid_size = game.puzzle.grid_size(),
            "game started"
        );
    }

    /// Returns true if the press landed on the grid and is now tracked.
    pub fn pointer_down<S>(&mut self, event: &PointerEvent, surface: &S) -> bool
    where
        S: PointerSurface + ?Sized,
    {
        if !self.game.state.is_playing() {
            return false;
        }
        self.classifier.pointer_down(event, surface, &mut self.game)
    }

    pub fn pointer_move<S>(&mut self, event: &PointerEvent, surface: &mut S)
    where
        S: PointerSurface + ?Sized,
    {
        self.classifier.pointer_move(event, surface, &mut self.game);
    }

    pub fn pointer_up<S>(&mut self, event: &PointerEvent, surface: &S) -> Option<InteractionKind>
    where
        S: PointerSurface + ?Sized,
    {
        self.classifier.pointer_up(event, surface, &mut self.game)
    }

    pub fn pointer_cancel(&mut self) {
        self.classifier.pointer_cancel(&mut self.game);
    }

    pub fn pointer_leave(&mut self) {
        self.classifier.pointer_leave(&mut self.game);
    }

    /// Pushes the running time to the sink. Call at frame cadence.
    pub fn tick(&mut self) {
        let game = &mut self.game;
        if !game.state.is_playing() {
            return;
        }
        if let Some(display) = game.timer.tick(game.clock.now()) {
            game.sink.timer_tick(&display);
        }
    }

    pub fn view(&self) -> Vec<Vec<CellState>> {
        cell_states(
            self.game.puzzle.grid(),
            &self.game.selection,
            &self.game.found_cells,
        )
    }
}

impl<R: RenderSink, C: Clock> Game<R, C> {
    fn redraw_selection(&mut self) {
        self.sink.highlight_path(self.selection.current_path());
    }

    fn clear_selection(&mut self) {
        self.selection.clear_selection();
        self.sink.highlight_path(&[]);
    }

    /// Matches a fully expanded path and applies the result.
    fn check_for_match(&mut self, cells: &[Position]) {
        let now = self.clock.now();
        let result = try_match(
            self.puzzle.grid(),
            cells,
            self.puzzle.words(),
            self.state.found_words(),
        );
        tracing::debug!(cells = cells.len(), matched = result.matched, "selection checked");

        let Some(word) = result.word.filter(|_| result.matched) else {
            return;
        };

        let total = self.puzzle.total_words();
        self.state.mark_word_found(&word, total, now);
        self.found_cells.extend(result.cells.iter().copied());

        self.sink.mark_found(&result.cells);
        self.sink
            .render_word_list(self.puzzle.words(), self.state.found_words());
        self.sink.update_progress(self.state.found_count(), total);
        tracing::info!(word = %word, found = self.state.found_count(), total, "word found");

        if self.state.is_complete() {
            let final_time = self.timer.stop(now);
            tracing::info!(final_time = %final_time, "puzzle complete");
            self.sink.show_completion(&final_time);
            self.final_time = Some(final_time);
        }
    }
}

impl<R: RenderSink, C: Clock> InteractionSink for Game<R, C> {
    fn tap_start(&mut self, pos: Position) {
        if !self.state.is_playing() {
            return;
        }
        self.before_drag = None;
        self.press_anchored = !self.selection.is_active();
        if self.press_anchored {
            self.selection = SelectionState::start_selection(pos, SelectionMode::Tap);
            self.redraw_selection();
        }
    }

    fn tap_end(&mut self, pos: Position) {
        if !self.state.is_playing() {
            return;
        }
        if let Some(previous) = self.before_drag.take() {
            self.selection = previous;
        }

        // Releasing the press that placed the anchor keeps it in place.
        if std::mem::take(&mut self.press_anchored) && self.selection.current_path() == [pos] {
            self.redraw_selection();
            return;
        }

        match self.selection.handle_tap_selection(pos) {
            TapOutcome::Anchored => {
                tracing::debug!(%pos, "selection anchored");
                self.redraw_selection();
            }
            TapOutcome::Cancelled => {
                tracing::debug!(%pos, "selection cancelled");
                self.sink.highlight_path(&[]);
            }
            TapOutcome::Commit => {
                if let [start, end] = *self.selection.current_path() {
                    if is_valid_line(start, end) {
                        let cells = get_line_cells(start, end);
                        self.check_for_match(&cells);
                    } else {
                        tracing::debug!(%start, %end, "tap pair is not a straight line");
                    }
                }
                self.clear_selection();
            }
        }
    }

    fn drag_start(&mut self, pos: Position) {
        if !self.state.is_playing() {
            return;
        }
        let previous = std::mem::replace(
            &mut self.selection,
            SelectionState::start_selection(pos, SelectionMode::Drag),
        );
        self.before_drag = Some(previous);
        self.redraw_selection();
    }

    fn drag_move(&mut self, path: &[Position]) {
        if !self.state.is_playing() || self.selection.mode() != SelectionMode::Drag {
            return;
        }
        self.selection.replace_path(path);
        self.redraw_selection();
    }

    fn drag_over(&mut self, pos: Position) -> usize {
        if !self.state.is_playing() || self.selection.mode() != SelectionMode::Drag {
            return 0;
        }
        if self.selection.handle_drag_move(pos) {
            tracing::trace!(%pos, cells = self.selection.current_path().len(), "path updated");
            self.redraw_selection();
        }
        self.selection.current_path().len()
    }

    fn drag_end(&mut self) {
        self.before_drag = None;
        self.press_anchored = false;
        if self.state.is_playing() && self.selection.complete_drag_selection() {
            let cells = self.selection.current_path().to_vec();
            self.check_for_match(&cells);
        }
        self.clear_selection();
    }

    fn cancel(&mut self) {
        self.before_drag = None;
        self.press_anchored = false;
        self.clear_selection();
    }
}
