//! # OMAP
//!
//! Codebase cartography: walks a source tree, counts files and lines per
//! category, links files through a best-effort reading of their
//! `import`/`#include` statements, and renders everything as one
//! self-contained HTML page.
//!
//! ## Pipeline
//!
//! - [`core::FileScanner`] builds one node per file plus aggregate stats
//! - [`parsers`] pull import targets out of Python and C/C++ sources
//! - [`core::ImportResolver`] links targets to files by substring match
//! - [`formatters::HtmlReportFormatter`] writes the force-directed map
//!
//! Dependency resolution is heuristic: no AST, no search paths, and a
//! short target like `util` links to every file whose path contains it.

pub mod core;
pub mod formatters;
pub mod parsers;
