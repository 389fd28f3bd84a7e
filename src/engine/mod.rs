pub mod recording;

use crate::{animation::ease::Ease, animation::segment::PropertySpec, foundation::core::Point};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-element animation descriptor handed to the engine.
pub struct AnimationSpec {
    /// Horizontal translation plan.
    pub x: PropertySpec,
    /// Vertical translation plan.
    pub y: PropertySpec,
    /// Full travel window in ms.
    pub duration: f64,
    /// Ease for properties that do not carry their own.
    pub ease: Ease,
    /// Fill colors cycled over the animation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fill: Vec<String>,
    /// Background colors cycled over the animation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub background_color: Vec<String>,
    /// Start offset in ms.
    pub delay: f64,
    /// Restart automatically when finished.
    #[serde(rename = "loop")]
    pub looped: bool,
}

impl AnimationSpec {
    /// Time after dispatch at which both properties have settled, ignoring
    /// looping: the descriptor delay, then the window or the longer property's
    /// legs, whichever runs longer.
    pub fn end_time(&self) -> f64 {
        self.delay
            + self
                .duration
                .max(self.x.active_time())
                .max(self.y.active_time())
    }

    /// Translation `elapsed` ms after dispatch, ignoring looping. Both properties
    /// hold their start value until the descriptor delay has passed. `None` when
    /// a property has no legs.
    pub fn position_at(&self, elapsed: f64) -> Option<Point> {
        let local = elapsed - self.delay;
        Some(Point::new(self.x.value_at(local)?, self.y.value_at(local)?))
    }
}

/// One-shot or looping animation of a single element.
pub trait AnimationEngine<E> {
    /// Engine-side reference to a running animation.
    type Handle;

    fn animate(&mut self, target: &E, spec: &AnimationSpec) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Options for a new timeline.
pub struct TimelineOptions {
    /// Restart the whole timeline when its last entry finishes.
    #[serde(rename = "loop")]
    pub looped: bool,
}

/// Multi-element timeline under construction.
pub trait Timeline<E> {
    /// Insert `spec` for `target`, starting `offset` ms into the timeline.
    fn add(&mut self, target: &E, spec: &AnimationSpec, offset: f64);

    /// Rewind and play from the start.
    fn restart(&mut self);
}

/// Engines able to build timelines.
pub trait TimelineEngine<E> {
    type Timeline: Timeline<E>;

    fn create_timeline(&mut self, options: TimelineOptions) -> Self::Timeline;
}

#[cfg(test)]
#[path = "../../tests/unit/engine/descriptor.rs"]
mod tests;
