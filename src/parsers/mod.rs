pub mod native;
pub mod python;

use crate::core::LinkKind;

/// Extracts import-like targets from file content.
///
/// Returned tokens are already normalized to `/`-separated path fragments,
/// ready for substring matching against node ids.
pub trait ImportParser {
    fn extract_targets(&self, source: &str) -> Vec<String>;
    fn link_kind(&self) -> LinkKind;
    fn language_name(&self) -> &str;
}

pub struct ParserFactory;

impl ParserFactory {
    pub fn new() -> Self {
        Self
    }

    /// Selects on the case-sensitive suffix of `file_name`: `.py` for
    /// Python, `.cpp` and `.hpp` for includes. `.c`, `.h` and upper-case
    /// suffixes are counted by the scanner but never parsed.
    pub fn get_parser(&self, file_name: &str) -> Option<Box<dyn ImportParser + Send + Sync>> {
        if file_name.ends_with(".py") {
            Some(Box::new(python::PythonParser::new()))
        } else if file_name.ends_with(".cpp") || file_name.ends_with(".hpp") {
            Some(Box::new(native::NativeParser::new()))
        } else {
            None
        }
    }
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}
