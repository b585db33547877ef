use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use super::config::ScanConfig;
use super::graph::{CodebaseMap, GraphBuilder, Node};
use super::{text, FileScanner, ImportResolver};
use crate::parsers::ParserFactory;

pub struct CodebaseAnalyzer {
    file_scanner: FileScanner,
    parser_factory: ParserFactory,
    import_resolver: ImportResolver,
}

impl CodebaseAnalyzer {
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self {
            file_scanner: FileScanner::with_config(config),
            parser_factory: ParserFactory::new(),
            import_resolver: ImportResolver::new(),
        }
    }

    /// Scans `root_path`, then links every parsable file against all
    /// discovered files.
    pub fn analyze(&mut self, root_path: &Path) -> Result<CodebaseMap> {
        let scan = self.file_scanner.scan_directory(root_path)?;

        let mut graph_builder = GraphBuilder::new();
        let nodes: Vec<Node> = scan.files.iter().map(|file| file.node.clone()).collect();
        for node in &nodes {
            graph_builder.add_node(node.clone());
        }

        self.import_resolver.build_index(&nodes);

        let mut added = 0usize;
        for file in &scan.files {
            let Some(parser) = self.parser_factory.get_parser(&file.node.id) else {
                continue;
            };
            let Some(source) = text::read_permissive(&file.path) else {
                continue;
            };

            let targets = parser.extract_targets(&source);
            debug!(
                file = %file.node.id,
                parser = parser.language_name(),
                targets = targets.len(),
                "extracted import targets"
            );

            let links = self
                .import_resolver
                .resolve(&file.node.id, &targets, parser.link_kind());
            for link in links {
                if graph_builder.add_link(link).is_some() {
                    added += 1;
                }
            }
        }

        info!(
            nodes = self.import_resolver.known_count(),
            links = added,
            "dependency graph built"
        );

        Ok(graph_builder.build(scan.root, scan.stats))
    }
}

impl Default for CodebaseAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
