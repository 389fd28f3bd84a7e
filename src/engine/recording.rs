use crate::{
    engine::{AnimationEngine, AnimationSpec, Timeline, TimelineEngine, TimelineOptions},
    foundation::error::{QuestError, QuestResult},
};

/// A descriptor as it reached the engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Dispatch<E> {
    pub target: E,
    pub spec: AnimationSpec,
}

/// Engine that plays nothing and keeps every call, in order.
///
/// Serves as the headless backend: the recorded dispatches are exactly what a
/// real engine would have received.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RecordingEngine<E> {
    pub dispatches: Vec<Dispatch<E>>,
    pub timelines_created: usize,
}

impl<E> Default for RecordingEngine<E> {
    fn default() -> Self {
        Self {
            dispatches: Vec::new(),
            timelines_created: 0,
        }
    }
}

impl<E> RecordingEngine<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total engine invocations of either kind.
    pub fn calls(&self) -> usize {
        self.dispatches.len() + self.timelines_created
    }
}

impl<E: serde::Serialize> RecordingEngine<E> {
    pub fn to_json(&self) -> QuestResult<String> {
        serde_json::to_string_pretty(&self.dispatches)
            .map_err(|e| QuestError::serde(e.to_string()))
    }
}

impl<E: Clone> AnimationEngine<E> for RecordingEngine<E> {
    /// Position in [`RecordingEngine::dispatches`].
    type Handle = usize;

    fn animate(&mut self, target: &E, spec: &AnimationSpec) -> usize {
        self.dispatches.push(Dispatch {
            target: target.clone(),
            spec: spec.clone(),
        });
        self.dispatches.len() - 1
    }
}

/// Entry of a [`RecordedTimeline`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TimelineEntry<E> {
    pub target: E,
    pub spec: AnimationSpec,
    pub offset: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct RecordedTimeline<E> {
    pub options: TimelineOptions,
    pub entries: Vec<TimelineEntry<E>>,
    pub restarts: u32,
}

impl<E> RecordedTimeline<E> {
    /// Time at which the last entry finishes, ignoring looping. Legs that run
    /// past their descriptor's window count in full.
    pub fn span(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.offset + e.spec.end_time())
            .fold(0.0, f64::max)
    }
}

impl<E: Clone> Timeline<E> for RecordedTimeline<E> {
    fn add(&mut self, target: &E, spec: &AnimationSpec, offset: f64) {
        self.entries.push(TimelineEntry {
            target: target.clone(),
            spec: spec.clone(),
            offset,
        });
    }

    fn restart(&mut self) {
        self.restarts += 1;
    }
}

impl<E: Clone> TimelineEngine<E> for RecordingEngine<E> {
    type Timeline = RecordedTimeline<E>;

    fn create_timeline(&mut self, options: TimelineOptions) -> RecordedTimeline<E> {
        self.timelines_created += 1;
        RecordedTimeline {
            options,
            entries: Vec::new(),
            restarts: 0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/recording.rs"]
mod tests;
