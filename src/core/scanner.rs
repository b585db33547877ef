use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

use super::config::ScanConfig;
use super::graph::{FileCategory, Node, Stats};
use super::text;

/// Extension used when a file name has no `.` at all.
pub const NO_EXTENSION: &str = "no_ext";

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    pub extension: String,
    pub node: Node,
}

/// Everything the walk produced, in discovery order.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub root: PathBuf,
    pub files: Vec<FileInfo>,
    pub stats: Stats,
}

pub struct FileScanner {
    config: ScanConfig,
}

impl FileScanner {
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Walks `root_path` and builds one node per file. Within a directory,
    /// its own files come before its subdirectories, each sorted by name.
    ///
    /// Walk and metadata errors abort the scan; unreadable content only
    /// zeroes the line count of that file.
    pub fn scan_directory(&self, root_path: &Path) -> Result<ScanOutcome> {
        let root = fs::canonicalize(root_path)
            .with_context(|| format!("failed to resolve root {}", root_path.display()))?;

        let walker = WalkDir::new(&root)
            .follow_links(self.config.follow_links)
            .sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            })
            .into_iter()
            .filter_entry(|entry| {
                !(entry.depth() > 0
                    && entry.file_type().is_dir()
                    && self.config.is_excluded(&relative_id(entry.path(), &root)))
            });

        let mut files = Vec::new();
        let mut stats = Stats::default();

        for entry in walker {
            let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let extension = file_extension(&name);
            let category = FileCategory::from_extension(&extension);
            let size = fs::metadata(path)
                .with_context(|| format!("failed to stat {}", path.display()))?
                .len();
            let lines = text::count_lines(path);

            stats.record(category, lines);
            let node = Node::new(relative_id(path, &root), name, category, size, lines);
            files.push(FileInfo {
                path: path.to_path_buf(),
                extension,
                node,
            });
        }

        info!(
            files = stats.file_count,
            lines = stats.total_lines,
            "scanned {}",
            root.display()
        );

        Ok(ScanOutcome { root, files, stats })
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercased text after the last `.`, or [`NO_EXTENSION`].
pub fn file_extension(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => NO_EXTENSION.to_string(),
    }
}

/// Root-relative path with `/` separators; the root itself maps to `""`.
pub fn relative_id(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
