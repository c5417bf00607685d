//! End-to-end pointer scenarios driven through a [`Session`].

use std::collections::HashSet;

use runtime::{RecordingSink, Session, SinkEvent};
use wordsearch_core::matching::try_match;
use wordsearch_core::{
    DragPathPolicy, GameConfig, GamePhase, GameState, GridLayout, InteractionKind, ManualClock,
    PointerEvent, Position, PuzzleConfig,
};

const CELL: f64 = 40.0;

type TestSession = Session<RecordingSink, ManualClock>;

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn start(config: GameConfig) -> (TestSession, GridLayout) {
    let puzzle =
        PuzzleConfig::new("Tiny", "", strings(&["MOM", "AXA", "DAD"]), strings(&["MOM", "DAD"]))
            .expect("puzzle is valid");
    let layout = GridLayout::with_cell_size(CELL, puzzle.grid_size());
    let mut session = Session::new(puzzle, &config, RecordingSink::new(), ManualClock::new());
    session.start_game();
    (session, layout)
}

fn drag(
    session: &mut TestSession,
    layout: &mut GridLayout,
    points: &[(f64, f64)],
) -> Option<InteractionKind> {
    let (first, rest) = points.split_first()?;
    session.pointer_down(&PointerEvent::new(1, first.0, first.1), &*layout);
    for &(x, y) in rest {
        session.pointer_move(&PointerEvent::new(1, x, y), layout);
    }
    let last = points.last()?;
    session.pointer_up(&PointerEvent::new(1, last.0, last.1), &*layout)
}

fn tap(session: &mut TestSession, layout: &GridLayout, pos: Position) -> Option<InteractionKind> {
    let (x, y) = layout.cell_center(pos);
    let event = PointerEvent::new(1, x, y);
    session.pointer_down(&event, layout);
    session.pointer_up(&event, layout)
}

/// Matching and game state alone, on a two-row grid. `PuzzleConfig` only
/// accepts square grids, so the session versions below pad it to 3x3.
#[test]
fn two_row_grid_completes_after_both_rows() {
    let grid = strings(&["MOM", "DAD"]);
    let words = strings(&["MOM", "DAD"]);
    let mut state = GameState::new();
    state.start(std::time::Duration::ZERO);

    let first = try_match(&grid, &[p(0, 0), p(0, 1), p(0, 2)], &words, state.found_words());
    assert!(first.matched);
    assert_eq!(first.word.as_deref(), Some("MOM"));
    state.mark_word_found("MOM", words.len(), std::time::Duration::from_secs(1));
    assert_eq!(state.phase(), GamePhase::Playing);
    assert_eq!(state.end_time(), None);

    let second = try_match(&grid, &[p(1, 0), p(1, 1), p(1, 2)], &words, state.found_words());
    assert_eq!(second.word.as_deref(), Some("DAD"));
    state.mark_word_found("DAD", words.len(), std::time::Duration::from_secs(2));
    assert_eq!(state.phase(), GamePhase::Complete);
    assert_eq!(state.end_time(), Some(std::time::Duration::from_secs(2)));

    // Already found: never matches again.
    let repeat: HashSet<String> = state.found_words().clone();
    assert!(!try_match(&grid, &[p(0, 0), p(0, 1), p(0, 2)], &words, &repeat).matched);
}

#[test]
fn dragging_both_rows_completes_the_puzzle() {
    let (mut session, mut layout) = start(GameConfig::default());

    let kind = drag(
        &mut session,
        &mut layout,
        &[(20.0, 20.0), (60.0, 22.0), (100.0, 20.0)],
    );
    assert_eq!(kind, Some(InteractionKind::Drag));
    assert!(session.state().is_found("MOM"));
    assert_eq!(session.state().phase(), GamePhase::Playing);

    session.clock().advance_millis(2_500);

    // Right to left along the bottom row; the word reads backwards too.
    let kind = drag(&mut session, &mut layout, &[(100.0, 100.0), (20.0, 100.0)]);
    assert_eq!(kind, Some(InteractionKind::Drag));
    assert!(session.state().is_complete());
    assert_eq!(session.final_time(), Some("00:02.50"));

    let sink = session.sink();
    assert_eq!(
        sink.found_batches(),
        vec![
            &[p(0, 0), p(0, 1), p(0, 2)][..],
            &[p(2, 2), p(2, 1), p(2, 0)][..],
        ]
    );
    assert!(sink.events().contains(&SinkEvent::UpdateProgress { found: 2, total: 2 }));
    assert_eq!(sink.completion(), Some("00:02.50"));

    // No more input once complete.
    assert!(!session.pointer_down(&PointerEvent::new(1, 60.0, 60.0), &layout));
}

#[test]
fn tapping_the_same_cell_twice_cancels() {
    let (mut session, layout) = start(GameConfig::default());

    assert_eq!(tap(&mut session, &layout, p(2, 2)), Some(InteractionKind::Tap));
    assert_eq!(session.selection().current_path(), &[p(2, 2)]);

    assert_eq!(tap(&mut session, &layout, p(2, 2)), Some(InteractionKind::Tap));
    assert!(!session.selection().is_active());
    assert!(session.sink().found_batches().is_empty());
    assert_eq!(session.state().found_count(), 0);
}

#[test]
fn small_jitter_is_still_a_tap() {
    let (mut session, mut layout) = start(GameConfig::default());

    // 11px crosses the drag threshold but projects onto the start cell.
    let kind = drag(&mut session, &mut layout, &[(60.0, 60.0), (71.0, 60.0)]);
    assert_eq!(kind, Some(InteractionKind::Tap));
    assert!(session.selection().is_active());
    assert_eq!(session.selection().current_path(), &[p(1, 1)]);

    // The anchor behaves like any tapped anchor: tapping it again cancels.
    tap(&mut session, &layout, p(1, 1));
    assert!(!session.selection().is_active());
}

#[test]
fn tap_pairs_find_words_in_either_order() {
    let (mut session, layout) = start(GameConfig::default());

    tap(&mut session, &layout, p(0, 2));
    tap(&mut session, &layout, p(0, 0));
    assert!(session.state().is_found("MOM"));

    // Re-selecting a found word scores nothing.
    tap(&mut session, &layout, p(0, 0));
    tap(&mut session, &layout, p(0, 2));
    assert_eq!(session.sink().found_batches().len(), 1);
}

#[test]
fn incremental_policy_follows_the_pointer() {
    let config = GameConfig::default().with_drag_policy(DragPathPolicy::Incremental);
    let (mut session, mut layout) = start(config);
    assert_eq!(session.drag_policy(), DragPathPolicy::Incremental);

    let kind = drag(
        &mut session,
        &mut layout,
        &[(20.0, 20.0), (35.0, 20.0), (60.0, 20.0), (100.0, 20.0)],
    );
    assert_eq!(kind, Some(InteractionKind::Drag));
    assert!(session.state().is_found("MOM"));

    // Walking back onto the start cell leaves nothing to commit.
    let kind = drag(
        &mut session,
        &mut layout,
        &[(20.0, 100.0), (60.0, 100.0), (20.0, 100.0)],
    );
    assert_eq!(kind, Some(InteractionKind::Drag));
    assert!(!session.state().is_found("DAD"));
    assert!(!session.selection().is_active());
}

#[test]
fn mom_dad_rows_on_a_padded_grid_complete_once() {
    let (mut session, layout) = start(GameConfig::default());

    tap(&mut session, &layout, p(0, 0));
    tap(&mut session, &layout, p(0, 2));
    assert!(session.state().is_found("MOM"));
    assert_eq!(session.state().phase(), GamePhase::Playing);
    assert_eq!(session.state().end_time(), None);

    session.clock().advance_millis(1_000);
    tap(&mut session, &layout, p(2, 0));
    tap(&mut session, &layout, p(2, 2));
    assert_eq!(session.state().phase(), GamePhase::Complete);
    let finished = session.state().end_time();
    assert_eq!(finished, Some(std::time::Duration::from_secs(1)));

    // Input after completion changes nothing.
    session.clock().advance_millis(5_000);
    tap(&mut session, &layout, p(0, 0));
    tap(&mut session, &layout, p(0, 2));
    assert_eq!(session.state().end_time(), finished);
    assert_eq!(session.state().found_count(), 2);
}

#[test]
fn incremental_jump_past_a_neighbour_stays_a_tap() {
    let config = GameConfig::default().with_drag_policy(DragPathPolicy::Incremental);
    let (mut session, mut layout) = start(config);

    // One move from (0,0) straight onto (0,2): the cell is not adjacent.
    let kind = drag(&mut session, &mut layout, &[(20.0, 20.0), (100.0, 20.0)]);
    assert_eq!(kind, Some(InteractionKind::Tap));
    assert_eq!(session.selection().current_path(), &[p(0, 0)]);

    // The anchor survived, so tapping the far end finds the word.
    tap(&mut session, &layout, p(0, 2));
    assert!(session.state().is_found("MOM"));
}

#[test]
fn view_reflects_found_and_selected_cells() {
    let (mut session, layout) = start(GameConfig::default());
    tap(&mut session, &layout, p(0, 0));
    tap(&mut session, &layout, p(0, 2));
    tap(&mut session, &layout, p(2, 0));

    let view = session.view();
    assert!(view[0].iter().all(|cell| cell.is_found));
    assert!(view[2][0].is_active);
    assert!(!view[1][1].is_active && !view[1][1].is_found);
}

#[test]
fn restarting_clears_progress() {
    let (mut session, layout) = start(GameConfig::default());
    tap(&mut session, &layout, p(0, 0));
    tap(&mut session, &layout, p(0, 2));
    assert_eq!(session.found_cells().len(), 3);

    session.start_game();
    assert_eq!(session.state().found_count(), 0);
    assert!(session.found_cells().is_empty());
    assert!(session.final_time().is_none());
}
