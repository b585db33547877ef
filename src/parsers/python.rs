use regex::Regex;
use std::sync::LazyLock;

use super::ImportParser;
use crate::core::LinkKind;

/// Dotted word sequence after `from` or `import`. No word boundary is
/// required, so `reimport x` also matches.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:from|import)\s+([\w\.]+)").unwrap_or_else(|_| panic!("Invalid Regex"))
});

pub struct PythonParser;

impl PythonParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportParser for PythonParser {
    fn extract_targets(&self, source: &str) -> Vec<String> {
        IMPORT_RE
            .captures_iter(source)
            .filter_map(|caps| caps.get(1))
            .map(|module| module.as_str().replace('.', "/"))
            .collect()
    }

    fn link_kind(&self) -> LinkKind {
        LinkKind::Import
    }

    fn language_name(&self) -> &str {
        "python"
    }
}
