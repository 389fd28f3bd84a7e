use crate::{
    animation::ease::Ease,
    foundation::core::Movement,
    foundation::error::{QuestError, QuestResult},
    foundation::math::non_negative,
};

/// One timed leg of a single axis's motion.
///
/// Serialized in the engine's keyframe shape: `{ "to": [from, to], "duration",
/// "delay", "ease" }`. Durations and delays are milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "SegmentWire", try_from = "SegmentWire")]
pub struct Segment {
    pub from: f64,
    pub to: f64,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Segment {
    pub fn new(range: Movement, duration: f64, delay: f64, ease: Ease) -> Self {
        debug_assert!(duration.is_finite() && duration >= 0.0);
        debug_assert!(delay.is_finite() && delay >= 0.0);
        Self {
            from: range.from,
            to: range.to,
            duration,
            delay,
            ease,
        }
    }

    pub fn range(&self) -> Movement {
        Movement::new(self.from, self.to)
    }

    /// Checks the duration/delay invariants for segments built outside the planner.
    pub fn validate(&self) -> QuestResult<()> {
        non_negative("segment duration", self.duration).map_err(QuestError::validation)?;
        non_negative("segment delay", self.delay).map_err(QuestError::validation)?;
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(QuestError::validation("segment range must be finite"));
        }
        Ok(())
    }

    /// Value reached `elapsed` ms after this leg starts playing. Zero-length legs
    /// jump straight to `to`.
    pub fn value_at(&self, elapsed: f64) -> f64 {
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            elapsed / self.duration
        };
        self.from + (self.to - self.from) * self.ease.apply(t)
    }
}

#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct SegmentWire {
    to: [f64; 2],
    duration: f64,
    #[serde(default)]
    delay: f64,
    #[serde(default)]
    ease: Ease,
}

impl From<Segment> for SegmentWire {
    fn from(s: Segment) -> Self {
        Self {
            to: [s.from, s.to],
            duration: s.duration,
            delay: s.delay,
            ease: s.ease,
        }
    }
}

impl TryFrom<SegmentWire> for Segment {
    type Error = QuestError;

    fn try_from(w: SegmentWire) -> QuestResult<Self> {
        let seg = Segment {
            from: w.to[0],
            to: w.to[1],
            duration: w.duration,
            delay: w.delay,
            ease: w.ease,
        };
        seg.validate()?;
        Ok(seg)
    }
}

/// Per-property animation value: a single leg or an ordered list of legs.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum PropertySpec {
    Single(Segment),
    Keyframes(Vec<Segment>),
}

impl PropertySpec {
    pub fn segments(&self) -> &[Segment] {
        match self {
            Self::Single(s) => std::slice::from_ref(s),
            Self::Keyframes(v) => v,
        }
    }

    /// Final value once every leg has played.
    pub fn end_value(&self) -> Option<f64> {
        self.segments().last().map(|s| s.to)
    }

    /// Time the legs take when played back to back, each waiting its own delay.
    pub fn active_time(&self) -> f64 {
        self.segments().iter().map(|s| s.delay + s.duration).sum()
    }

    /// Value `elapsed` ms into playback. Legs run one after another; while a leg
    /// waits out its delay the value holds where the previous leg ended.
    pub fn value_at(&self, elapsed: f64) -> Option<f64> {
        let segments = self.segments();
        let mut held = segments.first()?.from;
        let mut t = elapsed.max(0.0);
        for seg in segments {
            if t < seg.delay {
                return Some(held);
            }
            t -= seg.delay;
            if t < seg.duration {
                return Some(seg.value_at(t));
            }
            t -= seg.duration;
            held = seg.to;
        }
        Some(held)
    }
}

impl From<Vec<Segment>> for PropertySpec {
    fn from(mut segments: Vec<Segment>) -> Self {
        if segments.len() == 1 {
            Self::Single(segments.remove(0))
        } else {
            Self::Keyframes(segments)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/segment.rs"]
mod tests;
