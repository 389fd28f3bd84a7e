use crate::{
    dom::{ElementQuery, Target},
    foundation::core::{Movement, Point, Rect, Vec2},
    foundation::error::{QuestError, QuestResult},
};

/// A resolved start or end reference: a rectangle in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub rect: Rect,
}

impl Anchor {
    pub fn center(&self) -> Point {
        self.rect.center()
    }
}

/// Bounding box of `element`; a stale or unknown handle is a missing target.
pub fn element_rect<Q: ElementQuery + ?Sized>(dom: &Q, element: &Q::Element) -> QuestResult<Rect> {
    dom.rect(element)
        .ok_or_else(|| QuestError::target_not_found(format!("{element:?}")))
}

/// Resolve `target` against the current layout.
///
/// Selectors take the first match. A selector that matches nothing, or an
/// element handle the layout does not know, is an error rather than a zero-size
/// anchor at the origin.
pub fn resolve_anchor<Q: ElementQuery + ?Sized>(
    dom: &Q,
    target: &Target<Q::Element>,
) -> QuestResult<Anchor> {
    let rect = match target {
        Target::Point([x, y]) => Rect::from_origin_size((*x, *y), (0.0, 0.0)),
        Target::Selector(s) => {
            let el = dom
                .query_one(s)
                .ok_or_else(|| QuestError::target_not_found(s.as_str()))?;
            element_rect(dom, &el)?
        }
        Target::Element(el) => dom
            .rect(el)
            .ok_or_else(|| QuestError::target_not_found(target.describe()))?,
    };
    Ok(Anchor { rect })
}

/// Vector from `element`'s bounding-box center to `anchor`'s center.
pub fn resolve_displacement<Q: ElementQuery + ?Sized>(
    dom: &Q,
    anchor: &Anchor,
    element: &Q::Element,
) -> QuestResult<Vec2> {
    Ok(anchor.center() - element_rect(dom, element)?.center())
}

/// Per-axis travel for `element` from `start` to `end`.
pub fn movement_between<Q: ElementQuery + ?Sized>(
    dom: &Q,
    start: &Anchor,
    end: &Anchor,
    element: &Q::Element,
) -> QuestResult<(Movement, Movement)> {
    let from = resolve_displacement(dom, start, element)?;
    let to = resolve_displacement(dom, end, element)?;
    Ok((Movement::new(from.x, to.x), Movement::new(from.y, to.y)))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/resolver.rs"]
mod tests;
