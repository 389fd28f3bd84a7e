use crate::{
    dom::ElementQuery,
    foundation::core::Rect,
    foundation::error::{QuestError, QuestResult},
};

/// Handle into a [`DomSnapshot`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub usize);

/// One element of a snapshot.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default, rename = "class", skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default)]
    pub rect: Rect,
}

fn default_tag() -> String {
    "div".to_string()
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn at(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }
}

#[derive(Clone, Debug)]
struct Slot {
    node: Node,
    children: Vec<NodeId>,
}

/// In-memory element tree with fixed layout, for headless planning.
///
/// Supports a selector subset: `*`, `tag`, `#id`, `.class` and compounds such as
/// `li.item` or `div#box.a.b`, optionally comma-separated. Descendant and
/// attribute selectors match nothing.
#[derive(Clone, Debug, Default)]
pub struct DomSnapshot {
    slots: Vec<Slot>,
    roots: Vec<NodeId>,
}

impl DomSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` as the last child of `parent` (or as a new root).
    pub fn push(&mut self, parent: Option<NodeId>, node: Node) -> QuestResult<NodeId> {
        let id = NodeId(self.slots.len());
        match parent {
            Some(p) => {
                let slot = self
                    .slots
                    .get_mut(p.0)
                    .ok_or_else(|| QuestError::validation(format!("unknown parent {p:?}")))?;
                slot.children.push(id);
            }
            None => self.roots.push(id),
        }
        self.slots.push(Slot {
            node,
            children: Vec::new(),
        });
        Ok(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).map(|s| &s.node)
    }

    /// Move an element, as a layout change between two planning passes would.
    pub fn set_rect(&mut self, id: NodeId, rect: Rect) -> QuestResult<()> {
        let slot = self
            .slots
            .get_mut(id.0)
            .ok_or_else(|| QuestError::validation(format!("unknown node {id:?}")))?;
        slot.node.rect = rect;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Parse a nested JSON tree: `{ "nodes": [ { "id", "tag", "class", "rect",
    /// "children": [...] } ] }`.
    pub fn from_json(s: &str) -> QuestResult<Self> {
        let wire: SnapshotWire =
            serde_json::from_str(s).map_err(|e| QuestError::serde(e.to_string()))?;
        let mut dom = Self::new();
        for tree in wire.nodes {
            dom.push_tree(None, tree)?;
        }
        Ok(dom)
    }

    fn push_tree(&mut self, parent: Option<NodeId>, tree: TreeWire) -> QuestResult<NodeId> {
        let id = self.push(parent, tree.node)?;
        for child in tree.children {
            self.push_tree(Some(id), child)?;
        }
        Ok(id)
    }

    fn document_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.slots.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.slots[id.0].children.iter().rev().copied());
        }
        out
    }
}

#[derive(serde::Deserialize)]
struct SnapshotWire {
    #[serde(default)]
    nodes: Vec<TreeWire>,
}

#[derive(serde::Deserialize)]
struct TreeWire {
    #[serde(flatten)]
    node: Node,
    #[serde(default)]
    children: Vec<TreeWire>,
}

#[derive(Debug, Default, PartialEq)]
struct Compound {
    any: bool,
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() || s.contains(|c: char| c.is_whitespace() || "[]>+~:".contains(c)) {
            return None;
        }
        if s == "*" {
            return Some(Self {
                any: true,
                ..Self::default()
            });
        }

        let mut out = Self::default();
        let head_end = s.find(['#', '.']).unwrap_or(s.len());
        if head_end > 0 {
            out.tag = Some(s[..head_end].to_ascii_lowercase());
        }
        let mut rest = &s[head_end..];
        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() {
                return None;
            }
            match marker {
                '#' => out.id = Some(name.to_string()),
                _ => out.classes.push(name.to_string()),
            }
            rest = &body[end..];
        }
        Some(out)
    }

    fn matches(&self, node: &Node) -> bool {
        if self.any {
            return true;
        }
        if let Some(tag) = &self.tag
            && !node.tag.eq_ignore_ascii_case(tag)
        {
            return false;
        }
        if let Some(id) = &self.id
            && node.id.as_deref() != Some(id.as_str())
        {
            return false;
        }
        self.classes.iter().all(|c| node.classes.contains(c))
    }
}

fn parse_selector(selector: &str) -> Vec<Compound> {
    let parts: Vec<Option<Compound>> = selector.split(',').map(Compound::parse).collect();
    // An invalid part invalidates the whole list.
    parts.into_iter().collect::<Option<Vec<_>>>().unwrap_or_default()
}

impl ElementQuery for DomSnapshot {
    type Element = NodeId;

    fn query_one(&self, selector: &str) -> Option<NodeId> {
        let compounds = parse_selector(selector);
        self.document_order()
            .into_iter()
            .find(|id| compounds.iter().any(|c| c.matches(&self.slots[id.0].node)))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let compounds = parse_selector(selector);
        if compounds.is_empty() {
            return Vec::new();
        }
        self.document_order()
            .into_iter()
            .filter(|id| compounds.iter().any(|c| c.matches(&self.slots[id.0].node)))
            .collect()
    }

    fn rect(&self, element: &NodeId) -> Option<Rect> {
        self.slots.get(element.0).map(|s| s.node.rect)
    }

    fn children(&self, element: &NodeId) -> Vec<NodeId> {
        self.slots
            .get(element.0)
            .map(|s| s.children.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/snapshot.rs"]
mod tests;
