use super::*;
use crate::dom::snapshot::{DomSnapshot, Node, NodeId};

struct Fixture {
    dom: DomSnapshot,
    solo: NodeId,
    extra: NodeId,
    band: Vec<NodeId>,
    crew: Vec<NodeId>,
}

fn fixture() -> Fixture {
    let mut dom = DomSnapshot::new();
    let solo = dom.push(None, Node::new("i").with_class("member")).unwrap();
    let band_box = dom.push(None, Node::new("ul").with_class("party")).unwrap();
    let mut band = Vec::new();
    for _ in 0..3 {
        band.push(dom.push(Some(band_box), Node::new("li")).unwrap());
    }
    // Grandchild: must not be pulled in.
    dom.push(Some(band[0]), Node::new("b")).unwrap();
    let crew_box = dom.push(None, Node::new("ol").with_class("party")).unwrap();
    let crew = vec![
        dom.push(Some(crew_box), Node::new("li")).unwrap(),
        dom.push(Some(crew_box), Node::new("li")).unwrap(),
    ];
    let extra = dom.push(None, Node::new("i").with_class("member")).unwrap();
    Fixture {
        dom,
        solo,
        extra,
        band,
        crew,
    }
}

fn elements(party: &[Participant<NodeId>]) -> Vec<NodeId> {
    party.iter().map(|p| p.element).collect()
}

#[test]
fn members_then_direct_children_in_order() {
    let f = fixture();
    let party = assemble_party(
        &f.dom,
        &[Target::selector(".member")],
        &[Target::selector(".party")],
        false,
    )
    .unwrap();

    let mut expected = vec![f.solo, f.extra];
    expected.extend(&f.band);
    expected.extend(&f.crew);
    assert_eq!(elements(&party), expected);
    assert_eq!(party.len(), 2 + 3 + 2);
    for (i, p) in party.iter().enumerate() {
        assert_eq!(p.index, i);
    }
}

#[test]
fn singleton_takes_first_match_only() {
    let f = fixture();
    let party = assemble_party(
        &f.dom,
        &[Target::selector(".member")],
        &[Target::selector(".party")],
        true,
    )
    .unwrap();
    let mut expected = vec![f.solo];
    expected.extend(&f.band);
    assert_eq!(elements(&party), expected);
}

#[test]
fn explicit_elements_keep_input_order() {
    let f = fixture();
    let party = assemble_party(
        &f.dom,
        &[Target::Element(f.extra), Target::Element(f.solo)],
        &[],
        false,
    )
    .unwrap();
    assert_eq!(elements(&party), vec![f.extra, f.solo]);
}

#[test]
fn empty_inputs_and_misses_give_empty_party() {
    let f = fixture();
    assert!(assemble_party(&f.dom, &[], &[], false).unwrap().is_empty());
    let party = assemble_party(
        &f.dom,
        &[Target::selector("#ghost")],
        &[Target::selector(".nothing")],
        false,
    )
    .unwrap();
    assert!(party.is_empty());
}

#[test]
fn points_cannot_join() {
    let f = fixture();
    let err = assemble_party(&f.dom, &[Target::Point([1.0, 2.0])], &[], false).unwrap_err();
    assert!(matches!(err, QuestError::Validation(_)));
}

#[test]
fn assembly_is_reproducible() {
    let f = fixture();
    let run = || {
        assemble_party(
            &f.dom,
            &[Target::selector("i")],
            &[Target::selector("ul, ol")],
            false,
        )
        .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn unknown_element_handles_are_rejected() {
    let f = fixture();
    let ghost = NodeId(f.dom.len());
    let members = [Target::Element(f.solo), Target::Element(ghost)];
    let err = assemble_party(&f.dom, &members, &[], false).unwrap_err();
    assert!(matches!(err, QuestError::TargetNotFound(_)));
    assert!(resolve_targets(&f.dom, &Target::Element(ghost), false).is_err());
}
