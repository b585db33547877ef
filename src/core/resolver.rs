use super::graph::{Link, LinkKind, Node};

/// Substring-containment matcher from import targets to known files.
///
/// A target links to every node whose id contains it anywhere, not only at
/// path-segment boundaries, so `util` matches both `util.py` and
/// `net/utility.h`. Matches are neither deduplicated nor filtered for
/// self-references.
#[derive(Debug, Clone, Default)]
pub struct ImportResolver {
    /// Node ids in discovery order.
    known_ids: Vec<String>,
}

impl ImportResolver {
    pub fn new() -> Self {
        Self {
            known_ids: Vec::new(),
        }
    }

    pub fn build_index(&mut self, nodes: &[Node]) {
        self.known_ids.clear();
        self.known_ids.reserve(nodes.len());
        self.known_ids.extend(nodes.iter().map(|node| node.id.clone()));
    }

    pub fn known_count(&self) -> usize {
        self.known_ids.len()
    }

    /// One link per (target, matching node) pair, target order first.
    pub fn resolve(&self, source_id: &str, targets: &[String], kind: LinkKind) -> Vec<Link> {
        let mut links = Vec::new();
        for target in targets {
            for id in &self.known_ids {
                if id.contains(target.as_str()) {
                    links.push(Link::new(source_id.to_string(), id.clone(), kind));
                }
            }
        }
        links
    }
}
