pub mod snapshot;

use crate::foundation::core::{Point, Rect};

/// Read-only access to a laid-out element tree.
///
/// Implementations return live geometry at call time; the planner never caches
/// anything across calls.
pub trait ElementQuery {
    /// Handle identifying one element.
    type Element: Clone + std::fmt::Debug;

    /// First element matching `selector` in document order.
    fn query_one(&self, selector: &str) -> Option<Self::Element>;

    /// Every element matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Axis-aligned bounding box in screen space, or `None` if the handle no
    /// longer refers to an element.
    fn rect(&self, element: &Self::Element) -> Option<Rect>;

    /// Direct children in document order.
    fn children(&self, element: &Self::Element) -> Vec<Self::Element>;
}

/// Unresolved reference to an element or a point on screen.
///
/// Deserializes untagged: `[x, y]` is a point, a string is a selector, anything
/// else is handed to `E`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Target<E> {
    Point([f64; 2]),
    Selector(String),
    Element(E),
}

impl<E> Target<E> {
    pub fn selector(s: impl Into<String>) -> Self {
        Self::Selector(s.into())
    }

    pub fn point(p: Point) -> Self {
        Self::Point([p.x, p.y])
    }

    /// Short label for logs and error messages.
    pub fn describe(&self) -> String
    where
        E: std::fmt::Debug,
    {
        match self {
            Self::Point([x, y]) => format!("point({x}, {y})"),
            Self::Selector(s) => s.clone(),
            Self::Element(e) => format!("{e:?}"),
        }
    }
}

impl<E> From<&str> for Target<E> {
    fn from(s: &str) -> Self {
        Self::Selector(s.to_string())
    }
}

impl<E> From<Point> for Target<E> {
    fn from(p: Point) -> Self {
        Self::point(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/target.rs"]
mod tests;
