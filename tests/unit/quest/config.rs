use super::*;
use crate::dom::snapshot::NodeId;

#[test]
fn json_defaults_are_applied() {
    let c = QuestConfig::<NodeId>::from_json(r##"{ "start": "#a", "end": "#b" }"##).unwrap();
    assert_eq!(c.start, Target::selector("#a"));
    assert!(c.members.is_empty());
    assert!(c.parties.is_empty());
    assert_eq!(c.duration, 2000.0);
    assert_eq!(c.pace, 1.0);
    assert_eq!(c.path, PathMode::Cubic);
    assert_eq!(c.split, Some(Axis::X));
    assert!(!c.singleton);
    assert!(c.colors.is_empty());
}

#[test]
fn json_accepts_single_targets_aliases_and_null_split() {
    let c = QuestConfig::<NodeId>::from_json(
        r##"{
            "start": [0, 0],
            "end": "#b",
            "members": ".item",
            "parties": [".party", 3],
            "pattern": "linear",
            "split": null,
            "colors": ["#000", "#555"]
        }"##,
    )
    .unwrap();
    assert_eq!(c.start, Target::Point([0.0, 0.0]));
    assert_eq!(c.members, vec![Target::selector(".item")]);
    assert_eq!(
        c.parties,
        vec![Target::selector(".party"), Target::Element(NodeId(3))]
    );
    assert_eq!(c.path, PathMode::Linear);
    assert_eq!(c.split, None);
    assert_eq!(c.colors, vec!["#000", "#555"]);
}

#[test]
fn unknown_path_falls_back_to_cubic() {
    let c = QuestConfig::<NodeId>::from_json(r##"{ "start": "#a", "end": "#b", "path": "wavy" }"##)
        .unwrap();
    assert_eq!(c.path, PathMode::Cubic);
}

#[test]
fn json_errors_are_reported() {
    let err = QuestConfig::<NodeId>::from_json(r##"{ "end": "#b" }"##).unwrap_err();
    assert!(matches!(err, QuestError::Serde(_)));

    let err =
        QuestConfig::<NodeId>::from_json(r##"{ "start": "#a", "end": "#b", "duration": -1 }"##)
            .unwrap_err();
    assert!(matches!(err, QuestError::Validation(_)));
}

#[test]
fn builder_collects_targets() {
    let c = QuestConfig::<NodeId>::builder("#a", "#b")
        .member("#one")
        .member(Target::Element(NodeId(9)))
        .party(".crew")
        .duration(1000.0)
        .pace(2.5)
        .path(PathMode::Linear)
        .split(Some(Axis::Y))
        .singleton(true)
        .colors(["red", "blue"])
        .build()
        .unwrap();
    assert_eq!(c.members.len(), 2);
    assert_eq!(c.parties, vec![Target::selector(".crew")]);
    assert_eq!(c.duration, 1000.0);
    assert_eq!(c.pace, 2.5);
    assert_eq!(c.split, Some(Axis::Y));
    assert!(c.singleton);
    assert_eq!(c.colors, vec!["red", "blue"]);
}

#[test]
fn builder_validates() {
    assert!(
        QuestConfig::<NodeId>::builder("#a", "#b")
            .pace(f64::NAN)
            .build()
            .is_err()
    );
}
