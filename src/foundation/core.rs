pub use kurbo::{Point, Rect, Vec2};

/// Screen-space axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// Component of `v` along this axis.
    pub fn of(self, v: Vec2) -> f64 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
        }
    }
}

/// Value range travelled along one axis, in pixels relative to the element's
/// resting position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Movement {
    /// Offset at the start anchor.
    pub from: f64,
    /// Offset at the end anchor.
    pub to: f64,
}

impl Movement {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    pub fn distance(self) -> f64 {
        (self.to - self.from).abs()
    }

    /// Turning point used by two-leg companion plans.
    ///
    /// This is `to / 2`, not the average of both ends: legs pass through half the
    /// end offset regardless of where they started.
    pub fn midpoint(self) -> f64 {
        self.to / 2.0
    }

    pub fn as_array(self) -> [f64; 2] {
        [self.from, self.to]
    }
}

impl From<[f64; 2]> for Movement {
    fn from([from, to]: [f64; 2]) -> Self {
        Self { from, to }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
