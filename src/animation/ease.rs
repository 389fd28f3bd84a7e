/// Named easing curves, serialized with the engine's ease names
/// (`"linear"`, `"inOutCubic"`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
}

#[derive(Clone, Copy)]
enum Shape {
    In,
    Out,
    InOut,
}

impl Ease {
    /// Every curve here is a polynomial `t^n` played forwards, backwards or
    /// mirrored around the half.
    fn curve(self) -> (Shape, i32) {
        match self {
            Self::Linear => (Shape::In, 1),
            Self::InQuad => (Shape::In, 2),
            Self::OutQuad => (Shape::Out, 2),
            Self::InOutQuad => (Shape::InOut, 2),
            Self::InCubic => (Shape::In, 3),
            Self::OutCubic => (Shape::Out, 3),
            Self::InOutCubic => (Shape::InOut, 3),
        }
    }

    /// Eased progress for normalized time `t`; `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let (shape, n) = self.curve();
        let t = t.clamp(0.0, 1.0);
        match shape {
            Shape::In => t.powi(n),
            Shape::Out => 1.0 - (1.0 - t).powi(n),
            Shape::InOut if t < 0.5 => (2.0 * t).powi(n) / 2.0,
            Shape::InOut => 1.0 - (2.0 - 2.0 * t).powi(n) / 2.0,
        }
    }

    /// Engine-facing name of this curve.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "inQuad",
            Self::OutQuad => "outQuad",
            Self::InOutQuad => "inOutQuad",
            Self::InCubic => "inCubic",
            Self::OutCubic => "outCubic",
            Self::InOutCubic => "inOutCubic",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
