//! Terminal game loop: load content, replay pointer input, record the score.
use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use runtime::{FileScoreService, InMemoryScoreService, RenderSink, ScoreService, Session};
use tokio::time::{Instant, MissedTickBehavior};
use wordsearch_content::{ConfigLoader, PuzzleLoader, family_puzzle};
use wordsearch_core::{Clock, GameConfig, GridLayout, PuzzleConfig, SystemClock};

use crate::config::ClientConfig;
use crate::dirs;
use crate::render::TextRenderer;
use crate::script::{PointerScript, ReplayEvent};

/// Timer refresh cadence.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Feeds one replayed event to the session.
///
/// Returns the requested delay for `Pause` events.
pub fn apply_event<R, C>(
    session: &mut Session<R, C>,
    layout: &mut GridLayout,
    event: &ReplayEvent,
) -> Option<Duration>
where
    R: RenderSink,
    C: Clock,
{
    match event {
        ReplayEvent::Down(ev) => {
            if !session.pointer_down(ev, &*layout) {
                tracing::debug!(x = ev.x, y = ev.y, "press ignored");
            }
        }
        ReplayEvent::Move(ev) => session.pointer_move(ev, layout),
        ReplayEvent::Up(ev) => {
            if let Some(kind) = session.pointer_up(ev, &*layout) {
                tracing::trace!(kind = ?kind, "interaction classified");
            }
        }
        ReplayEvent::Cancel => session.pointer_cancel(),
        ReplayEvent::Leave => session.pointer_leave(),
        ReplayEvent::Pause(delay) => return Some(*delay),
    }
    None
}

pub async fn run(config: ClientConfig) -> Result<()> {
    let puzzle = load_puzzle(&config)?;
    let game_config = load_game_config(&config)?;
    let mut layout = GridLayout::with_cell_size(config.cell_size, puzzle.grid_size());

    let script = match &config.script_path {
        Some(path) => PointerScript::load(path)?,
        None => PointerScript::auto_play(&puzzle),
    };
    if script.is_empty() {
        tracing::warn!("pointer script has no steps");
    }

    println!("{}\n{}\n", puzzle.title(), puzzle.description());

    let renderer = TextRenderer::new(io::stdout());
    let mut session = Session::new(puzzle, &game_config, renderer, SystemClock::new());
    session.start_game();

    let events = script.expand(&layout, session.drag_policy());
    tracing::info!(
        steps = script.steps().len(),
        events = events.len(),
        policy = %session.drag_policy(),
        "replaying pointer script"
    );
    replay(&mut session, &mut layout, events, config.step_delay).await;

    let Some(final_time) = session.final_time().map(str::to_owned) else {
        let state = session.state();
        println!(
            "Stopped with {} of {} words found.",
            state.found_count(),
            session.puzzle().total_words()
        );
        return Ok(());
    };

    let time_ms = u64::try_from(session.elapsed().as_millis()).unwrap_or(u64::MAX);
    record_score(&config, &game_config, time_ms, &final_time).await
}

/// Replays `events` with `step_delay` between them while ticking the timer
/// every frame. Stops early on completion or Ctrl-C.
async fn replay<R, C>(
    session: &mut Session<R, C>,
    layout: &mut GridLayout,
    events: Vec<ReplayEvent>,
    step_delay: Duration,
) where
    R: RenderSink,
    C: Clock,
{
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut events = events.into_iter();
    let next_step = tokio::time::sleep(Duration::ZERO);
    tokio::pin!(next_step);

    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            _ = frames.tick() => session.tick(),
            () = &mut next_step => {
                let Some(event) = events.next() else {
                    break;
                };
                let delay = apply_event(session, layout, &event).unwrap_or(step_delay);
                next_step.as_mut().reset(Instant::now() + delay);
            }
            _ = &mut interrupt => {
                tracing::info!("interrupted");
                session.pointer_cancel();
                break;
            }
        }

        if session.state().is_complete() {
            break;
        }
    }

    session.tick();
}

fn load_puzzle(config: &ClientConfig) -> Result<PuzzleConfig> {
    match &config.puzzle_path {
        Some(path) => PuzzleLoader::load(path),
        None => family_puzzle().context("Built-in puzzle is invalid"),
    }
}

fn load_game_config(config: &ClientConfig) -> Result<GameConfig> {
    match &config.game_config_path {
        Some(path) => ConfigLoader::load(path),
        None => Ok(GameConfig::default()),
    }
}

async fn record_score(
    config: &ClientConfig,
    game_config: &GameConfig,
    time_ms: u64,
    time_display: &str,
) -> Result<()> {
    let Some(player) = config.player_name.as_deref() else {
        tracing::info!("no player name set, score not recorded");
        return Ok(());
    };

    let service: Box<dyn ScoreService> = if config.ephemeral_scores {
        Box::new(InMemoryScoreService::new())
    } else {
        let path = config
            .scores_path
            .clone()
            .unwrap_or_else(dirs::default_scores_path);
        let service = FileScoreService::open(&path)
            .await
            .with_context(|| format!("Failed to open leaderboard {}", path.display()))?;
        Box::new(service)
    };

    let rank = service
        .submit_score(player, time_ms, time_display)
        .await
        .context("Failed to submit score")?;
    tracing::info!(player, rank, time_ms, "score recorded");

    let top = service
        .top_scores(game_config.leaderboard_limit)
        .await
        .context("Failed to read leaderboard")?;

    println!("\nRank #{rank} for {player}");
    println!("Leaderboard:");
    for (index, entry) in top.iter().enumerate() {
        println!(
            "{:>3}. {:<24} {}",
            index + 1,
            entry.player_name,
            entry.time_display
        );
    }

    Ok(())
}
