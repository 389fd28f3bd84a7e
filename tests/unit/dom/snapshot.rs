use super::*;

fn fixture() -> (DomSnapshot, NodeId, NodeId, NodeId, NodeId) {
    let mut dom = DomSnapshot::new();
    let list = dom
        .push(None, Node::new("ul").with_id("list").with_class("party"))
        .unwrap();
    let a = dom
        .push(Some(list), Node::new("li").with_class("item"))
        .unwrap();
    let b = dom
        .push(Some(list), Node::new("li").with_class("item").with_class("hot"))
        .unwrap();
    let nested = dom.push(Some(a), Node::new("span").with_class("item")).unwrap();
    (dom, list, a, b, nested)
}

#[test]
fn query_all_is_document_order() {
    let (dom, _list, a, b, nested) = fixture();
    // `nested` was pushed last but sits inside `a`, before `b`.
    assert_eq!(dom.query_all(".item"), vec![a, nested, b]);
    assert_eq!(dom.query_one(".item"), Some(a));
}

#[test]
fn compound_and_list_selectors() {
    let (dom, list, a, b, nested) = fixture();
    assert_eq!(dom.query_all("li.item.hot"), vec![b]);
    assert_eq!(dom.query_all("UL#list"), vec![list]);
    assert_eq!(dom.query_all("span, #list"), vec![list, nested]);
    assert_eq!(dom.query_all("*").len(), 4);
    assert_eq!(dom.query_one("li"), Some(a));
}

#[test]
fn unsupported_or_empty_selectors_match_nothing() {
    let (dom, ..) = fixture();
    assert!(dom.query_all("ul li").is_empty());
    assert!(dom.query_all("li, [data-x]").is_empty());
    assert!(dom.query_all("").is_empty());
    assert!(dom.query_all("#").is_empty());
    assert_eq!(dom.query_one("#missing"), None);
}

#[test]
fn children_are_direct_only() {
    let (dom, list, a, b, nested) = fixture();
    assert_eq!(dom.children(&list), vec![a, b]);
    assert_eq!(dom.children(&a), vec![nested]);
    assert!(dom.children(&NodeId(99)).is_empty());
}

#[test]
fn push_rejects_unknown_parent() {
    let mut dom = DomSnapshot::new();
    assert!(dom.push(Some(NodeId(3)), Node::new("div")).is_err());
}

#[test]
fn from_json_builds_nested_tree() {
    let dom = DomSnapshot::from_json(
        r##"{
            "nodes": [
                { "id": "a", "rect": { "x0": 0, "y0": 0, "x1": 20, "y1": 20 } },
                { "tag": "ul", "class": ["party"], "children": [
                    { "tag": "li" },
                    { "tag": "li", "children": [ { "tag": "b" } ] }
                ] }
            ]
        }"##,
    )
    .unwrap();
    assert_eq!(dom.len(), 5);
    let a = dom.query_one("#a").unwrap();
    assert_eq!(dom.rect(&a), Some(Rect::new(0.0, 0.0, 20.0, 20.0)));
    assert_eq!(dom.rect(&NodeId(dom.len())), None);
    let party = dom.query_one(".party").unwrap();
    assert_eq!(dom.children(&party).len(), 2);
    assert_eq!(dom.query_all("li").len(), 2);
}

#[test]
fn from_json_reports_serde_errors() {
    let err = DomSnapshot::from_json("{ not json").unwrap_err();
    assert!(matches!(err, QuestError::Serde(_)));
}
