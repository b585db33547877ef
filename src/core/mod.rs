pub mod analyzer;
pub mod config;
pub mod graph;
pub mod resolver;
pub mod scanner;
pub mod text;

pub use analyzer::CodebaseAnalyzer;
pub use config::{ScanConfig, DEFAULT_OUTPUT};
pub use graph::{
    CodebaseMap, DependencyGraph, FileCategory, GraphBuilder, Link, LinkKind, Node, Stats,
};
pub use resolver::ImportResolver;
pub use scanner::{FileInfo, FileScanner, ScanOutcome};
