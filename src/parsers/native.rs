use regex::Regex;
use std::sync::LazyLock;

use super::ImportParser;
use crate::core::LinkKind;

static INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"#include\s+["<]([\w\./\\]+)[">]"#).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// `#include` extraction for `.cpp` sources and `.hpp` headers.
pub struct NativeParser;

impl NativeParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NativeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportParser for NativeParser {
    fn extract_targets(&self, source: &str) -> Vec<String> {
        INCLUDE_RE
            .captures_iter(source)
            .filter_map(|caps| caps.get(1))
            .map(|target| target.as_str().replace('\\', "/"))
            .collect()
    }

    fn link_kind(&self) -> LinkKind {
        LinkKind::Include
    }

    fn language_name(&self) -> &str {
        "native"
    }
}
