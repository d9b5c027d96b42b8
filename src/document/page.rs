use std::collections::{BTreeMap, HashMap};

use crate::{
    animation::visual::VisualState,
    document::host::Document,
    foundation::{
        core::{ElementId, Rect, Viewport},
        error::{MotionError, MotionResult},
    },
};

/// Boundary form of a page: the viewport it was laid out for plus its element tree.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PageSpec {
    pub viewport: Viewport,
    pub elements: Vec<PageElement>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PageElement {
    pub id: ElementId,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    pub bounds: Rect,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub children: Vec<PageElement>,
}

impl PageElement {
    pub fn new(id: u64, bounds: Rect) -> Self {
        Self {
            id: ElementId(id),
            attrs: BTreeMap::new(),
            bounds,
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn child(mut self, child: PageElement) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Clone, Debug)]
struct Node {
    id: ElementId,
    attrs: BTreeMap<String, String>,
    bounds: Rect,
    text: String,
    visual: Option<VisualState>,
    children: Vec<usize>,
    subtree_end: usize, // exclusive, in pre-order
    removed: bool,
}

/// In-memory document: a pre-order flattened element tree that records what the engine writes.
#[derive(Clone, Debug, Default)]
pub struct Page {
    nodes: Vec<Node>,
    index: HashMap<ElementId, usize>,
    mutations: u64,
}

impl Page {
    pub fn new(elements: Vec<PageElement>) -> MotionResult<Self> {
        let mut page = Self::default();
        for el in elements {
            page.push_subtree(el)?;
        }
        Ok(page)
    }

    pub fn from_json_str(s: &str) -> MotionResult<(Self, Viewport)> {
        let spec: PageSpec = serde_json::from_str(s).map_err(|e| MotionError::serde(e.to_string()))?;
        let page = Self::new(spec.elements)?;
        Ok((page, spec.viewport))
    }

    fn push_subtree(&mut self, el: PageElement) -> MotionResult<usize> {
        if self.index.contains_key(&el.id) {
            return Err(MotionError::validation(format!(
                "duplicate element id {}",
                el.id
            )));
        }
        if el.bounds.y1 < el.bounds.y0 || el.bounds.x1 < el.bounds.x0 {
            return Err(MotionError::validation(format!(
                "element {} has inverted bounds",
                el.id
            )));
        }

        let idx = self.nodes.len();
        self.index.insert(el.id, idx);
        self.nodes.push(Node {
            id: el.id,
            attrs: el.attrs,
            bounds: el.bounds,
            text: el.text,
            visual: None,
            children: Vec::new(),
            subtree_end: idx + 1,
            removed: false,
        });

        let mut children = Vec::with_capacity(el.children.len());
        for child in el.children {
            children.push(self.push_subtree(child)?);
        }
        let end = self.nodes.len();
        let node = &mut self.nodes[idx];
        node.children = children;
        node.subtree_end = end;
        Ok(idx)
    }

    fn live(&self, el: ElementId) -> Option<&Node> {
        self.index
            .get(&el)
            .map(|&i| &self.nodes[i])
            .filter(|n| !n.removed)
    }

    fn live_mut(&mut self, el: ElementId) -> Option<&mut Node> {
        let i = *self.index.get(&el)?;
        let node = &mut self.nodes[i];
        if node.removed { None } else { Some(node) }
    }

    /// Detaches `el` and its subtree. Returns `false` if it was not present.
    pub fn remove(&mut self, el: ElementId) -> bool {
        let Some(&i) = self.index.get(&el) else {
            return false;
        };
        if self.nodes[i].removed {
            return false;
        }
        let end = self.nodes[i].subtree_end;
        for node in &mut self.nodes[i..end] {
            node.removed = true;
        }
        true
    }

    /// Moves an element, as a late-loading image above it would.
    pub fn set_bounds(&mut self, el: ElementId, bounds: Rect) -> bool {
        match self.live_mut(el) {
            Some(node) => {
                node.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Shifts every element whose top is at or below `from_y` by `dy`.
    pub fn shift_below(&mut self, from_y: f64, dy: f64) {
        for node in self.nodes.iter_mut().filter(|n| n.bounds.y0 >= from_y) {
            node.bounds = node.bounds + crate::foundation::core::Vec2::new(0.0, dy);
        }
    }

    pub fn visual(&self, el: ElementId) -> Option<VisualState> {
        self.live(el).and_then(|n| n.visual)
    }

    pub fn text(&self, el: ElementId) -> Option<&str> {
        self.live(el).map(|n| n.text.as_str())
    }

    /// Number of visual or text writes received so far.
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.nodes.iter().filter(|n| !n.removed).map(|n| n.id)
    }
}

impl Document for Page {
    fn descendants(&self, root: Option<ElementId>) -> Vec<ElementId> {
        let range = match root {
            None => 0..self.nodes.len(),
            Some(r) => match self.index.get(&r) {
                Some(&i) if !self.nodes[i].removed => (i + 1)..self.nodes[i].subtree_end,
                _ => return Vec::new(),
            },
        };
        self.nodes[range]
            .iter()
            .filter(|n| !n.removed)
            .map(|n| n.id)
            .collect()
    }

    fn children(&self, el: ElementId) -> Vec<ElementId> {
        let Some(node) = self.live(el) else {
            return Vec::new();
        };
        node.children
            .iter()
            .map(|&i| &self.nodes[i])
            .filter(|n| !n.removed)
            .map(|n| n.id)
            .collect()
    }

    fn attribute(&self, el: ElementId, name: &str) -> Option<String> {
        self.live(el).and_then(|n| n.attrs.get(name).cloned())
    }

    fn bounds(&self, el: ElementId) -> Option<Rect> {
        self.live(el).map(|n| n.bounds)
    }

    fn apply_visual(&mut self, el: ElementId, state: VisualState) {
        if let Some(node) = self.live_mut(el) {
            node.visual = Some(state);
            self.mutations += 1;
        }
    }

    fn set_text(&mut self, el: ElementId, text: &str) {
        if let Some(node) = self.live_mut(el) {
            node.text.clear();
            node.text.push_str(text);
            self.mutations += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/page.rs"]
mod tests;
