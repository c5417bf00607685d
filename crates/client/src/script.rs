//! Pointer scripts: recorded or generated input replayed against a session.
//!
//! A script is a RON list of [`ScriptStep`]s. Raw steps carry pixel
//! coordinates; `Tap` and `Drag` are written in grid cells and expanded
//! against the layout in use.
//!
//! ```ron
//! [
//!     Tap(row: 3, col: 1),
//!     Tap(row: 5, col: 1),
//!     Drag(from: (row: 7, col: 2), to: (row: 7, col: 4)),
//!     Wait(ms: 200),
//! ]
//! ```
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use wordsearch_content::LoadResult;
use wordsearch_content::loaders::read_file;
use wordsearch_core::geometry::{get_direction, is_valid_line};
use wordsearch_core::matching::locate_word;
use wordsearch_core::{DragPathPolicy, GridLayout, PointerEvent, Position, PuzzleConfig};

/// Pointer id used for every replayed event.
pub const SCRIPT_POINTER_ID: u32 = 1;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub enum ScriptStep {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Cancel,
    Leave,
    /// Press and release on the centre of a cell.
    Tap { row: i32, col: i32 },
    /// Straight drag from the centre of one cell to another.
    Drag { from: Position, to: Position },
    Wait { ms: u64 },
}

/// Concrete input produced by expanding a script.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplayEvent {
    Down(PointerEvent),
    Move(PointerEvent),
    Up(PointerEvent),
    Cancel,
    Leave,
    Pause(Duration),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerScript {
    steps: Vec<ScriptStep>,
}

impl PointerScript {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps }
    }

    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse pointer script {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Self> {
        let steps: Vec<ScriptStep> =
            ron::from_str(content).context("Invalid pointer script RON")?;
        Ok(Self::new(steps))
    }

    /// One drag per word, in word-list order. Words that cannot be traced in
    /// the grid are skipped.
    pub fn auto_play(puzzle: &PuzzleConfig) -> Self {
        let steps = puzzle
            .words()
            .iter()
            .filter_map(|word| match locate_word(puzzle.grid(), word) {
                Some((from, to)) => Some(ScriptStep::Drag { from, to }),
                None => {
                    tracing::warn!(word = %word, "word not found in grid, skipping");
                    None
                }
            })
            .collect();
        Self::new(steps)
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Expands every step into pointer events on `layout`.
    ///
    /// Drags follow the path the given policy reads: under `Geometric` the
    /// pointer travels the offset whose projection reaches the end cell;
    /// under `Incremental` it visits the centre of every cell on the line.
    pub fn expand(&self, layout: &GridLayout, policy: DragPathPolicy) -> Vec<ReplayEvent> {
        let mut events = Vec::new();
        for step in &self.steps {
            match *step {
                ScriptStep::Down { x, y } => events.push(ReplayEvent::Down(event(x, y))),
                ScriptStep::Move { x, y } => events.push(ReplayEvent::Move(event(x, y))),
                ScriptStep::Up { x, y } => events.push(ReplayEvent::Up(event(x, y))),
                ScriptStep::Cancel => events.push(ReplayEvent::Cancel),
                ScriptStep::Leave => events.push(ReplayEvent::Leave),
                ScriptStep::Wait { ms } => {
                    events.push(ReplayEvent::Pause(Duration::from_millis(ms)));
                }
                ScriptStep::Tap { row, col } => {
                    let (x, y) = layout.cell_center(Position::new(row, col));
                    events.push(ReplayEvent::Down(event(x, y)));
                    events.push(ReplayEvent::Up(event(x, y)));
                }
                ScriptStep::Drag { from, to } => {
                    if from == to || !is_valid_line(from, to) {
                        tracing::warn!(%from, %to, "drag is not a straight line, skipping");
                        continue;
                    }
                    expand_drag(layout, policy, from, to, &mut events);
                }
            }
        }
        events
    }
}

fn event(x: f64, y: f64) -> PointerEvent {
    PointerEvent::new(SCRIPT_POINTER_ID, x, y)
}

fn expand_drag(
    layout: &GridLayout,
    policy: DragPathPolicy,
    from: Position,
    to: Position,
    events: &mut Vec<ReplayEvent>,
) {
    let direction = get_direction(from, to);
    let steps = (to.row - from.row).abs().max((to.col - from.col).abs());
    let (start_x, start_y) = layout.cell_center(from);
    events.push(ReplayEvent::Down(event(start_x, start_y)));

    let (end_x, end_y) = match policy {
        DragPathPolicy::Geometric => {
            // The projection sums both axes, so a diagonal covers half the
            // distance per axis.
            let axes = f64::from(direction.d_row.abs() + direction.d_col.abs());
            let cell = layout.width / f64::from(layout.grid_size);
            let reach = f64::from(steps) * cell / axes;
            let end_x = start_x + reach * f64::from(direction.d_col);
            let end_y = start_y + reach * f64::from(direction.d_row);

            let samples = 2 * steps;
            for i in 1..=samples {
                let t = f64::from(i) / f64::from(samples);
                events.push(ReplayEvent::Move(event(
                    start_x + (end_x - start_x) * t,
                    start_y + (end_y - start_y) * t,
                )));
            }
            (end_x, end_y)
        }
        DragPathPolicy::Incremental => {
            for i in 1..=steps {
                let (x, y) = layout.cell_center(from.step(direction, i));
                events.push(ReplayEvent::Move(event(x, y)));
            }
            layout.cell_center(to)
        }
    };

    events.push(ReplayEvent::Up(event(end_x, end_y)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn moves(events: &[ReplayEvent]) -> Vec<(f64, f64)> {
        events
            .iter()
            .filter_map(|e| match e {
                ReplayEvent::Move(ev) => Some((ev.x, ev.y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn parses_ron_steps() {
        let script = PointerScript::parse(
            r#"[
                Down(x: 10.0, y: 12.5),
                Cancel,
                Tap(row: 1, col: 2),
                Drag(from: (row: 0, col: 0), to: (row: 0, col: 2)),
                Wait(ms: 50),
            ]"#,
        )
        .unwrap();

        assert_eq!(
            script.steps(),
            &[
                ScriptStep::Down { x: 10.0, y: 12.5 },
                ScriptStep::Cancel,
                ScriptStep::Tap { row: 1, col: 2 },
                ScriptStep::Drag {
                    from: p(0, 0),
                    to: p(0, 2)
                },
                ScriptStep::Wait { ms: 50 },
            ]
        );
    }

    #[test]
    fn loads_script_files() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".ron").tempfile().unwrap();
        writeln!(file, "[Tap(row: 0, col: 1), Leave]").unwrap();

        let script = PointerScript::load(file.path()).unwrap();
        assert_eq!(
            script.steps(),
            &[ScriptStep::Tap { row: 0, col: 1 }, ScriptStep::Leave]
        );
    }

    #[test]
    fn missing_script_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.ron");

        let err = PointerScript::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.ron"));
    }

    #[test]
    fn rejects_malformed_scripts() {
        assert!(PointerScript::parse("[Jump(x: 1.0)]").is_err());
    }

    #[test]
    fn tap_expands_to_press_and_release_at_cell_centre() {
        let layout = GridLayout::with_cell_size(40.0, 5);
        let events = PointerScript::new(vec![ScriptStep::Tap { row: 1, col: 2 }])
            .expand(&layout, DragPathPolicy::Geometric);

        assert_eq!(
            events,
            vec![
                ReplayEvent::Down(event(100.0, 60.0)),
                ReplayEvent::Up(event(100.0, 60.0)),
            ]
        );
    }

    #[test]
    fn geometric_diagonal_drag_halves_each_axis() {
        let layout = GridLayout::with_cell_size(40.0, 10);
        let events = PointerScript::new(vec![ScriptStep::Drag {
            from: p(0, 3),
            to: p(4, 7),
        }])
        .expand(&layout, DragPathPolicy::Geometric);

        assert_eq!(events.first(), Some(&ReplayEvent::Down(event(140.0, 20.0))));
        assert_eq!(events.last(), Some(&ReplayEvent::Up(event(220.0, 100.0))));
        assert_eq!(moves(&events).len(), 8);
    }

    #[test]
    fn incremental_drag_visits_each_cell_centre() {
        let layout = GridLayout::with_cell_size(40.0, 10);
        let events = PointerScript::new(vec![ScriptStep::Drag {
            from: p(5, 7),
            to: p(5, 5),
        }])
        .expand(&layout, DragPathPolicy::Incremental);

        assert_eq!(moves(&events), vec![(260.0, 220.0), (220.0, 220.0)]);
        assert_eq!(events.last(), Some(&ReplayEvent::Up(event(220.0, 220.0))));
    }

    #[test]
    fn crooked_drags_are_skipped() {
        let layout = GridLayout::with_cell_size(40.0, 10);
        let events = PointerScript::new(vec![
            ScriptStep::Drag {
                from: p(0, 0),
                to: p(1, 3),
            },
            ScriptStep::Drag {
                from: p(2, 2),
                to: p(2, 2),
            },
        ])
        .expand(&layout, DragPathPolicy::Geometric);

        assert!(events.is_empty());
    }

    #[test]
    fn auto_play_drags_every_placed_word() {
        let puzzle = PuzzleConfig::new(
            "t",
            "",
            vec!["MOM".into(), "XXX".into(), "DAD".into()],
            vec!["MOM".into(), "DAD".into()],
        )
        .unwrap();

        let script = PointerScript::auto_play(&puzzle);
        assert_eq!(
            script.steps(),
            &[
                ScriptStep::Drag {
                    from: p(0, 0),
                    to: p(0, 2)
                },
                ScriptStep::Drag {
                    from: p(2, 0),
                    to: p(2, 2)
                },
            ]
        );
    }
}
