//! Party Quest plans group travel animations.
//!
//! Given a set of elements, a start anchor and an end anchor, it computes for
//! every participant the per-axis displacement, a segment plan (ease, duration
//! and delay per leg) and a staggered start offset, then hands one descriptor per
//! element to an external animation engine.
//!
//! # Pipeline overview
//!
//! 1. **Assemble**: members and party containers → ordered [`Participant`]s
//! 2. **Resolve**: start/end [`Target`]s → [`Anchor`]s, once per call
//! 3. **Measure**: anchor centers minus element centers → per-axis [`Movement`]
//! 4. **Stagger**: participant index → start offset ([`stagger_delay`])
//! 5. **Plan**: movement + [`PathMode`] + split axis → [`Segment`]s per axis
//! 6. **Dispatch**: [`AnimationSpec`] per element → [`AnimationEngine`]
//!
//! Layout is read through the injected [`ElementQuery`] capability, so planning
//! runs headless against a [`DomSnapshot`] as well as against a live document.
//! Every error surfaces before the first dispatch.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod geometry;
mod party;
mod plan;
mod quest;

/// Element query capability and target references.
pub mod dom;
/// Animation engine collaborator traits and a recording backend.
pub mod engine;

pub use animation::ease::Ease;
pub use animation::segment::{PropertySpec, Segment};
pub use dom::snapshot::{DomSnapshot, Node, NodeId};
pub use dom::{ElementQuery, Target};
pub use engine::recording::{Dispatch, RecordedTimeline, RecordingEngine, TimelineEntry};
pub use engine::{AnimationEngine, AnimationSpec, Timeline, TimelineEngine, TimelineOptions};
pub use foundation::core::{Axis, Movement, Point, Rect, Vec2};
pub use foundation::error::{QuestError, QuestResult};
pub use geometry::resolver::{
    Anchor, element_rect, movement_between, resolve_anchor, resolve_displacement,
};
pub use party::assembler::{Participant, assemble_party, resolve_targets};
pub use plan::path::{
    AxisContext, AxisRole, MovementPlan, PathMode, axis_duration, parse_split, plan_axis,
    plan_movement,
};
pub use plan::stagger::{DEFAULT_PACE, DENSE_PACE, stagger_delay, stagger_offsets};
pub use quest::config::{DEFAULT_DURATION_MS, QuestBuilder, QuestConfig};
pub use quest::orchestrator::{ParticipantPlan, QuestPlan, plan_quest, quest, quest_timeline};
