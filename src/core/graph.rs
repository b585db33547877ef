use petgraph::{graph::NodeIndex, Directed, Graph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Coarse file category derived from the extension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Copy)]
pub enum FileCategory {
    /// `c`, `cpp`
    Source,
    /// `h`, `hpp`
    Header,
    /// `py`
    Python,
    /// `json`
    Config,
    Other,
}

impl FileCategory {
    /// `extension` is expected lowercased, as produced by the scanner.
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            "cpp" | "c" => FileCategory::Source,
            "hpp" | "h" => FileCategory::Header,
            "py" => FileCategory::Python,
            "json" => FileCategory::Config,
            _ => FileCategory::Other,
        }
    }

    /// Group number consumed by the report's colour mapping.
    pub fn group(self) -> u8 {
        match self {
            FileCategory::Source => 1,
            FileCategory::Header => 2,
            FileCategory::Python => 3,
            FileCategory::Config => 4,
            FileCategory::Other => 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Copy)]
pub enum LinkKind {
    /// Language-level import (`import a.b`, `from a import b`).
    Import,
    /// Textual include (`#include "a/b.h"`).
    Include,
}

impl LinkKind {
    pub fn weight(self) -> u8 {
        match self {
            LinkKind::Import => 1,
            LinkKind::Include => 2,
        }
    }
}

/// One discovered file. Serialized field order is the one the report script reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub group: u8,
    pub size: u64,
    pub lines: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub source: String,
    pub target: String,
    pub value: u8,
}

/// Aggregate counters accumulated during the scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub cpp: usize,
    pub hpp: usize,
    pub py: usize,
    pub other: usize,
    pub total_lines: usize,
    pub file_count: usize,
}

pub type DependencyGraph = Graph<Node, Link, Directed>;

impl Node {
    pub fn new(id: String, name: String, category: FileCategory, size: u64, lines: usize) -> Self {
        Self {
            id,
            name,
            group: category.group(),
            size,
            lines,
        }
    }
}

impl Link {
    pub fn new(source: String, target: String, kind: LinkKind) -> Self {
        Self {
            source,
            target,
            value: kind.weight(),
        }
    }
}

impl Stats {
    pub fn record(&mut self, category: FileCategory, lines: usize) {
        self.file_count += 1;
        match category {
            FileCategory::Source => self.cpp += 1,
            FileCategory::Header => self.hpp += 1,
            FileCategory::Python => self.py += 1,
            FileCategory::Config | FileCategory::Other => self.other += 1,
        }
        self.total_lines += lines;
    }

    /// Sum of the per-category counters; always equals `file_count`.
    pub fn categorized(&self) -> usize {
        self.cpp + self.hpp + self.py + self.other
    }
}

/// Finished analysis: the file graph plus its aggregate counters.
#[derive(Debug, Clone)]
pub struct CodebaseMap {
    pub root: PathBuf,
    pub graph: DependencyGraph,
    pub stats: Stats,
}

impl CodebaseMap {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Nodes in discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.raw_nodes().iter().map(|node| &node.weight)
    }

    /// Links in resolution order, duplicates included.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.graph.raw_edges().iter().map(|edge| &edge.weight)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }
}

pub struct GraphBuilder {
    graph: DependencyGraph,
    node_map: HashMap<String, NodeIndex>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
        }
    }

    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        let id = node.id.clone();
        let index = self.graph.add_node(node);
        self.node_map.insert(id, index);
        index
    }

    /// Parallel links are kept; returns `None` when either endpoint is unknown.
    pub fn add_link(&mut self, link: Link) -> Option<petgraph::graph::EdgeIndex> {
        let source_idx = self.node_map.get(&link.source)?;
        let target_idx = self.node_map.get(&link.target)?;
        Some(self.graph.add_edge(*source_idx, *target_idx, link))
    }

    pub fn build(self, root: PathBuf, stats: Stats) -> CodebaseMap {
        CodebaseMap {
            root,
            graph: self.graph,
            stats,
        }
    }

    pub fn get_node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
