use crate::{
    dom::{ElementQuery, Target},
    foundation::error::{QuestError, QuestResult},
    geometry::resolver::element_rect,
};

/// One member of the travelling party.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Participant<E> {
    pub element: E,
    /// Position in the assembled party; drives the stagger offset.
    pub index: usize,
}

/// Elements referenced by `target`. With `singleton`, a selector yields at most
/// its first match. Element handles must refer to a laid-out element.
pub fn resolve_targets<Q: ElementQuery + ?Sized>(
    dom: &Q,
    target: &Target<Q::Element>,
    singleton: bool,
) -> QuestResult<Vec<Q::Element>> {
    match target {
        Target::Selector(s) if singleton => Ok(dom.query_one(s).into_iter().collect()),
        Target::Selector(s) => Ok(dom.query_all(s)),
        Target::Element(e) => {
            element_rect(dom, e)?;
            Ok(vec![e.clone()])
        }
        Target::Point(_) => Err(QuestError::validation(format!(
            "{} cannot be a party member",
            target.describe()
        ))),
    }
}

/// Flatten `members` and the direct children of every `parties` container into
/// one indexed list.
///
/// Members come first in input order, then each container's children in
/// document order. Selectors that match nothing contribute nothing; an empty
/// result is valid.
pub fn assemble_party<Q: ElementQuery + ?Sized>(
    dom: &Q,
    members: &[Target<Q::Element>],
    parties: &[Target<Q::Element>],
    singleton: bool,
) -> QuestResult<Vec<Participant<Q::Element>>> {
    let mut elements = Vec::new();
    for member in members {
        elements.extend(resolve_targets(dom, member, singleton)?);
    }
    for party in parties {
        for container in resolve_targets(dom, party, singleton)? {
            elements.extend(dom.children(&container));
        }
    }

    Ok(elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| Participant { element, index })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/party/assembler.rs"]
mod tests;
