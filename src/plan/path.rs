use std::str::FromStr;

use crate::{
    animation::ease::Ease,
    animation::segment::Segment,
    foundation::core::{Axis, Movement},
    foundation::error::{QuestError, QuestResult},
    foundation::math::{non_negative, round_half_up},
};

/// Base shape of the travel path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMode {
    #[default]
    Cubic,
    Linear,
}

impl PathMode {
    /// Ease put on the descriptor when no per-axis plan overrides it.
    pub fn default_ease(self) -> Ease {
        match self {
            Self::Cubic => Ease::InOutCubic,
            Self::Linear => Ease::Linear,
        }
    }

    /// Like [`FromStr`], but unknown names fall back to [`PathMode::Cubic`].
    pub fn parse_lenient(name: &str) -> Self {
        match name.parse() {
            Ok(mode) => mode,
            Err(err) => {
                tracing::warn!(%err, "falling back to cubic path");
                Self::Cubic
            }
        }
    }
}

impl FromStr for PathMode {
    type Err = QuestError;

    fn from_str(s: &str) -> QuestResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cubic" => Ok(Self::Cubic),
            "linear" => Ok(Self::Linear),
            other => Err(QuestError::invalid_mode(format!("unknown path '{other}'"))),
        }
    }
}

impl<'de> serde::Deserialize<'de> for PathMode {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(d)?;
        Ok(Self::parse_lenient(&name))
    }
}

/// Parse a split axis name; `"none"` and the empty string disable splitting.
pub fn parse_split(name: &str) -> QuestResult<Option<Axis>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "x" => Ok(Some(Axis::X)),
        "y" => Ok(Some(Axis::Y)),
        "" | "none" => Ok(None),
        other => Err(QuestError::invalid_mode(format!("unknown split axis '{other}'"))),
    }
}

/// How one axis takes part in a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisRole {
    /// No split axis is configured.
    Direct,
    /// The configured split axis.
    Designated,
    /// The other axis while a split axis is configured.
    Companion,
}

impl AxisRole {
    pub fn for_axis(axis: Axis, split: Option<Axis>) -> Self {
        match split {
            None => Self::Direct,
            Some(s) if s == axis => Self::Designated,
            Some(_) => Self::Companion,
        }
    }
}

/// Timing shared by both axes of one participant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisContext {
    /// Full travel window in ms.
    pub duration: f64,
    /// The participant's start offset in ms.
    pub stagger_delay: f64,
    /// Sum of both axes' distances.
    pub total_distance: f64,
}

/// This axis's share of the window, proportional to its part of the total
/// Manhattan distance.
///
/// With no distance at all the designated axis keeps the whole window and the
/// companion gets none.
pub fn axis_duration(distance: f64, ctx: &AxisContext, role: AxisRole) -> f64 {
    if ctx.total_distance <= 0.0 {
        return match role {
            AxisRole::Companion => 0.0,
            AxisRole::Direct | AxisRole::Designated => ctx.duration,
        };
    }
    round_half_up(ctx.duration * distance / ctx.total_distance).clamp(0.0, ctx.duration)
}

/// Segments for one axis, in leg order.
///
/// Without a split axis the whole range plays in one leg over the full window,
/// eased by the path's default. Each `delay` is the per-keyframe value handed to
/// the engine, not an absolute start time, so delays are not monotonic across
/// legs: a companion's second leg waits `duration - axis` even when its first
/// leg already waited a larger stagger.
pub fn plan_axis(
    movement: Movement,
    ctx: &AxisContext,
    mode: PathMode,
    role: AxisRole,
) -> Vec<Segment> {
    let d = ctx.duration;
    match (mode, role) {
        (_, AxisRole::Direct) => vec![Segment::new(movement, d, 0.0, mode.default_ease())],
        (PathMode::Cubic, AxisRole::Companion) => {
            vec![Segment::new(movement, d, 0.0, Ease::Linear)]
        }
        (PathMode::Cubic, AxisRole::Designated) => {
            vec![Segment::new(movement, d, 0.0, Ease::InOutCubic)]
        }
        (PathMode::Linear, AxisRole::Designated) => {
            let axis = axis_duration(movement.distance(), ctx, role);
            // Centered in the window, after the participant's own offset.
            let delay = ctx.stagger_delay + (d - axis) / 2.0;
            vec![Segment::new(movement, axis, delay, Ease::Linear)]
        }
        (PathMode::Linear, AxisRole::Companion) => {
            let axis = axis_duration(movement.distance(), ctx, role);
            let mid = movement.midpoint();
            vec![
                Segment::new(
                    Movement::new(movement.from, mid),
                    axis / 2.0,
                    ctx.stagger_delay,
                    Ease::Linear,
                ),
                Segment::new(
                    Movement::new(mid, movement.to),
                    axis / 2.0,
                    d - axis,
                    Ease::Linear,
                ),
            ]
        }
    }
}

/// Both axes of one participant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MovementPlan {
    pub x: Vec<Segment>,
    pub y: Vec<Segment>,
}

impl MovementPlan {
    pub fn axis(&self, axis: Axis) -> &[Segment] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

/// Plan both axes, assigning roles from `split`.
pub fn plan_movement(
    x: Movement,
    y: Movement,
    duration: f64,
    stagger_delay: f64,
    mode: PathMode,
    split: Option<Axis>,
) -> QuestResult<MovementPlan> {
    let duration = non_negative("duration", duration).map_err(QuestError::validation)?;
    let stagger_delay =
        non_negative("stagger delay", stagger_delay).map_err(QuestError::validation)?;
    for (name, m) in [("x", x), ("y", y)] {
        if !m.from.is_finite() || !m.to.is_finite() {
            return Err(QuestError::validation(format!("{name} movement must be finite")));
        }
    }

    let ctx = AxisContext {
        duration,
        stagger_delay,
        total_distance: x.distance() + y.distance(),
    };
    Ok(MovementPlan {
        x: plan_axis(x, &ctx, mode, AxisRole::for_axis(Axis::X, split)),
        y: plan_axis(y, &ctx, mode, AxisRole::for_axis(Axis::Y, split)),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/plan/path.rs"]
mod tests;
