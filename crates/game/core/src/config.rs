/// How drag moves update the selection path.
///
/// A session uses exactly one policy; the two are never mixed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DragPathPolicy {
    /// The path is the projection of the pointer onto the locked direction,
    /// recomputed on every move and replaced wholesale.
    #[default]
    Geometric,

    /// The path grows one adjacent, collinear cell at a time and can be
    /// walked back over already-visited cells.
    Incremental,
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    /// Pointer travel, in pixels, below which an interaction is still a tap.
    pub drag_threshold: f64,
    pub drag_policy: DragPathPolicy,
    /// Number of leaderboard entries shown after a completed game.
    pub leaderboard_limit: usize,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DRAG_THRESHOLD: f64 = 10.0;
    pub const DEFAULT_LEADERBOARD_LIMIT: usize = 5;

    pub fn new() -> Self {
        Self {
            drag_threshold: Self::DEFAULT_DRAG_THRESHOLD,
            drag_policy: DragPathPolicy::default(),
            leaderboard_limit: Self::DEFAULT_LEADERBOARD_LIMIT,
        }
    }

    pub fn with_drag_policy(mut self, drag_policy: DragPathPolicy) -> Self {
        self.drag_policy = drag_policy;
        self
    }

    pub fn with_drag_threshold(mut self, drag_threshold: f64) -> Self {
        self.drag_threshold = drag_threshold;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
