/// Final classification of a completed pointer interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum InteractionKind {
    Tap,
    Drag,
}

/// Decides on release whether an interaction was a drag.
///
/// Crossing the drag threshold is not enough: a drag also needs to have
/// produced at least one committable (two-cell) path. Jitter that moved the
/// pointer past the threshold without ever leaving the start cell stays a tap.
pub const fn classify_interaction(has_moved: bool, has_emitted_drag_path: bool) -> InteractionKind {
    if has_moved && has_emitted_drag_path {
        InteractionKind::Drag
    } else {
        InteractionKind::Tap
    }
}
