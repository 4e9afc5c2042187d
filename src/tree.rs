//! Exploration trees: a record of the order and hierarchy in which the
//! breadth-first search visited cells while hunting one target word.
//!
//! Nodes live in an arena (`Vec`) and children are indices, mirroring how
//! the grid stores its cells. Two renderings are provided for diagnostics:
//! an ASCII tree and a Graphviz DOT digraph.

use std::fmt::Write as _;

use crate::grid::Pos;

/// Index of a node in the tree's arena. The root is always node 0.
pub type TreeNodeId = usize;

const DOT_LEVEL_COLORS: [&str; 5] = [
    "lightblue",
    "lightgreen",
    "lightyellow",
    "lightpink",
    "lightgray",
];

/// One node of an exploration tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    label: char,
    word: String,
    depth: usize,
    pos: Pos,
    children: Vec<TreeNodeId>,
}

impl TreeNode {
    /// The letter of the grid cell this node visited.
    pub fn label(&self) -> char {
        self.label
    }

    /// The word accumulated along the path to this node.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Depth at which the node was created (root is 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn children(&self) -> &[TreeNodeId] {
        &self.children
    }
}

/// Arena-backed tree built by the tree-returning breadth-first search.
#[derive(Debug, Clone)]
pub struct ExplorationTree {
    nodes: Vec<TreeNode>,
}

impl ExplorationTree {
    /// Create a tree holding just the root node.
    pub(crate) fn new(label: char, word: String, pos: Pos) -> Self {
        Self {
            nodes: vec![TreeNode {
                label,
                word,
                depth: 0,
                pos,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> TreeNodeId {
        0
    }

    /// Append a child under `parent` and return its id.
    pub(crate) fn add_child(
        &mut self,
        parent: TreeNodeId,
        label: char,
        word: String,
        depth: usize,
        pos: Pos,
    ) -> TreeNodeId {
        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            label,
            word,
            depth,
            pos,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn node(&self, id: TreeNodeId) -> &TreeNode {
        &self.nodes[id]
    }

    /// All node ids in creation (breadth) order.
    pub fn ids(&self) -> std::ops::Range<TreeNodeId> {
        0..self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node_caption(&self, id: TreeNodeId) -> String {
        let node = &self.nodes[id];
        if id == self.root() {
            format!("Start: {} {}", node.label, node.pos)
        } else {
            format!("{} {}", node.label, node.pos)
        }
    }

    /// Render the tree with `├──`/`└──` branch prefixes.
    pub fn render_ascii(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.node_caption(self.root()));
        out.push('\n');
        self.render_children(self.root(), "", &mut out);
        out
    }

    fn render_children(&self, id: TreeNodeId, prefix: &str, out: &mut String) {
        let children = &self.nodes[id].children;
        for (i, &child) in children.iter().enumerate() {
            let last = i == children.len() - 1;
            let branch = if last { "└── " } else { "├── " };
            out.push_str(prefix);
            out.push_str(branch);
            out.push_str(&self.node_caption(child));
            out.push('\n');
            let deeper = if last { "    " } else { "│   " };
            self.render_children(child, &format!("{prefix}{deeper}"), out);
        }
    }

    /// Render the tree as a Graphviz DOT digraph, nodes colored by depth.
    pub fn to_dot(&self) -> String {
        let mut dot = String::new();
        dot.push_str("digraph SearchTree {\n");
        dot.push_str("    rankdir=TB;\n");
        dot.push_str("    node [shape=circle, style=filled];\n");

        for id in self.ids() {
            let node = &self.nodes[id];
            let color = DOT_LEVEL_COLORS[node.depth % DOT_LEVEL_COLORS.len()];
            let _ = writeln!(
                dot,
                "    n{id} [label=\"{}\", fillcolor=\"{color}\"];",
                self.node_caption(id)
            );
        }
        for id in self.ids() {
            for &child in self.nodes[id].children() {
                let _ = writeln!(dot, "    n{id} -> n{child};");
            }
        }

        dot.push_str("}\n");
        dot
    }
}
