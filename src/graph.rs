use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fill colour of a node in its resting state
pub const DEFAULT_NODE_COLOR: &str = "#90caf9";

/// Fill colour of the highlighted node
pub const ACTIVE_NODE_COLOR: &str = "#ffab40";

pub const DEFAULT_NODE_RADIUS: u32 = 8;
pub const ACTIVE_NODE_RADIUS: u32 = 12;

/// A word as handed to the graph, with its optional grouping root
///
/// `meaning` is accepted so the page can pass its word list through unchanged;
/// only `word` and `root` shape the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootedWord {
    pub word: String,
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(default)]
    pub root: Option<String>,
}

impl RootedWord {
    pub fn new(word: impl Into<String>, root: Option<&str>) -> Self {
        RootedWord {
            word: word.into(),
            meaning: None,
            root: root.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub root: Option<String>,
}

/// An undirected edge; `source` is the word that appeared first in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// Force-simulation parameters handed to the page's physics library
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceSettings {
    pub link_distance: f64,
    pub charge_strength: f64,
    pub center_x: f64,
    pub center_y: f64,
    /// Alpha target while a node is being dragged
    pub drag_alpha_target: f64,
}

impl Default for ForceSettings {
    fn default() -> Self {
        Self {
            link_distance: 60.0,
            charge_strength: -150.0,
            center_x: 0.0,
            center_y: 0.0,
            drag_alpha_target: 0.3,
        }
    }
}

/// Build nodes and links from a word list
///
/// Every word becomes a node, in input order. Words that share the same
/// non-empty root are linked pairwise, so each root group forms a clique
/// (k*(k-1)/2 links for a group of k). Groups are emitted in the order their
/// root first appears.
///
/// # Examples
/// ```
/// use flashcards::graph::{RootedWord, build_graph};
///
/// let words = vec![
///     RootedWord::new("run", Some("run")),
///     RootedWord::new("ran", Some("run")),
///     RootedWord::new("cat", Some("cat")),
/// ];
/// let graph = build_graph(&words);
/// assert_eq!(graph.nodes.len(), 3);
/// assert_eq!(graph.links.len(), 1);
/// ```
pub fn build_graph(words: &[RootedWord]) -> GraphData {
    let nodes = words
        .iter()
        .map(|w| GraphNode {
            id: w.word.clone(),
            root: w.root.clone(),
        })
        .collect();

    let mut group_order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&str>> = HashMap::new();
    for w in words {
        let Some(root) = w.root.as_deref().filter(|r| !r.trim().is_empty()) else {
            continue;
        };
        groups
            .entry(root)
            .or_insert_with(|| {
                group_order.push(root);
                Vec::new()
            })
            .push(&w.word);
    }

    let mut links = Vec::new();
    for root in group_order {
        let members = &groups[root];
        for (i, source) in members.iter().enumerate() {
            for target in &members[i + 1..] {
                links.push(GraphLink {
                    source: source.to_string(),
                    target: target.to_string(),
                });
            }
        }
    }

    GraphData { nodes, links }
}

/// How a node should be drawn right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeStyle {
    pub fill: &'static str,
    pub radius: u32,
}

/// A node held in place at fixed coordinates while being dragged
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pin {
    pub x: f64,
    pub y: f64,
}

/// What the simulation should do in response to a drag step
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEffect {
    /// New alpha target, if the simulation needs reheating or cooling
    pub alpha_target: Option<f64>,
    /// Fixed position for the node, `None` to release it
    pub pin: Option<Pin>,
}

/// Highlight and drag state layered over a built graph
#[derive(Debug, Clone, Default)]
pub struct GraphState {
    data: GraphData,
    settings: ForceSettings,
    highlighted: Option<String>,
    pins: HashMap<String, Pin>,
    active_drags: usize,
}

impl GraphState {
    pub fn new(words: &[RootedWord]) -> Self {
        GraphState {
            data: build_graph(words),
            ..Self::default()
        }
    }

    pub fn data(&self) -> &GraphData {
        &self.data
    }

    pub fn settings(&self) -> ForceSettings {
        self.settings
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    fn has_node(&self, id: &str) -> bool {
        self.data.nodes.iter().any(|n| n.id == id)
    }

    /// Highlight `word`, clearing any previous highlight first
    ///
    /// A word that is not in the graph leaves nothing highlighted.
    pub fn highlight(&mut self, word: &str) {
        self.clear_highlight();
        if self.has_node(word) {
            self.highlighted = Some(word.to_string());
        }
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    pub fn node_style(&self, id: &str) -> NodeStyle {
        if self.highlighted.as_deref() == Some(id) {
            NodeStyle {
                fill: ACTIVE_NODE_COLOR,
                radius: ACTIVE_NODE_RADIUS,
            }
        } else {
            NodeStyle {
                fill: DEFAULT_NODE_COLOR,
                radius: DEFAULT_NODE_RADIUS,
            }
        }
    }

    pub fn pin(&self, id: &str) -> Option<Pin> {
        self.pins.get(id).copied()
    }

    /// Pin `id` where it currently sits; the first concurrent drag reheats
    pub fn drag_start(&mut self, id: &str, x: f64, y: f64) -> DragEffect {
        let reheat = self.active_drags == 0;
        self.active_drags += 1;
        let pin = Pin { x, y };
        self.pins.insert(id.to_string(), pin);
        DragEffect {
            alpha_target: reheat.then_some(self.settings.drag_alpha_target),
            pin: Some(pin),
        }
    }

    /// Move the pin of `id` to the pointer
    pub fn drag(&mut self, id: &str, x: f64, y: f64) -> DragEffect {
        let pin = Pin { x, y };
        self.pins.insert(id.to_string(), pin);
        DragEffect {
            alpha_target: None,
            pin: Some(pin),
        }
    }

    /// Release `id` back to the simulation; the last drag cools it down
    pub fn drag_end(&mut self, id: &str) -> DragEffect {
        self.pins.remove(id);
        self.active_drags = self.active_drags.saturating_sub(1);
        DragEffect {
            alpha_target: (self.active_drags == 0).then_some(0.0),
            pin: None,
        }
    }
}
