/// Report file written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "CODEBASE_MAP.html";

/// Directory markers skipped by default: VCS metadata, Python caches,
/// build output and the diagnostics dump directory.
pub const DEFAULT_EXCLUDES: &[&str] = &[".git", "__pycache__", ".pytest_cache", "build", "diag"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// A directory whose root-relative path contains any of these is pruned.
    pub exclude_markers: Vec<String>,
    pub follow_links: bool,
}

impl ScanConfig {
    pub fn new() -> Self {
        Self {
            exclude_markers: DEFAULT_EXCLUDES.iter().map(|m| m.to_string()).collect(),
            follow_links: false,
        }
    }

    pub fn with_exclude(mut self, marker: impl Into<String>) -> Self {
        self.exclude_markers.push(marker.into());
        self
    }

    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// `relative_dir` uses `/` separators.
    pub fn is_excluded(&self, relative_dir: &str) -> bool {
        self.exclude_markers
            .iter()
            .any(|marker| relative_dir.contains(marker.as_str()))
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_match_as_substrings() {
        let config = ScanConfig::default();
        assert!(config.is_excluded(".git"));
        assert!(config.is_excluded("src/__pycache__"));
        assert!(config.is_excluded("cmake-build-debug"));
        assert!(!config.is_excluded("src/core"));
        assert!(!config.is_excluded(""));
    }

    #[test]
    fn extra_markers_are_appended() {
        let config = ScanConfig::default().with_exclude("vendor");
        assert!(config.is_excluded("third_party/vendor/x"));
        assert_eq!(config.exclude_markers.len(), DEFAULT_EXCLUDES.len() + 1);
    }
}
