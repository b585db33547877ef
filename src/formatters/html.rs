//! Self-contained HTML map.
//!
//! The page embeds node and link data as inline JSON for a D3
//! force-directed layout, plus the category counters for a Chart.js
//! doughnut. Nothing is escaped for the surrounding markup: a file name
//! containing `</script>` will break the page.

use anyhow::{Context, Result};
use chrono::Local;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::{CodebaseMap, Link, Node};

const TEMPLATE: &str = include_str!("template.html");

/// Format of the `GENERATED:` stamp in the page header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct HtmlReportFormatter {
    template: &'static str,
}

impl HtmlReportFormatter {
    pub fn new() -> Self {
        Self { template: TEMPLATE }
    }

    /// Renders with the current local time and writes the page to `output_path`.
    pub fn format_to_file(&self, map: &CodebaseMap, output_path: &Path) -> Result<()> {
        let generated_at = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let html = self.render(map, &generated_at)?;
        fs::write(output_path, html)
            .with_context(|| format!("failed to write {}", output_path.display()))?;
        Ok(())
    }

    /// Apart from `generated_at`, output depends only on `map`.
    pub fn render(&self, map: &CodebaseMap, generated_at: &str) -> Result<String> {
        let nodes: Vec<&Node> = map.nodes().collect();
        let links: Vec<&Link> = map.links().collect();
        let stats = &map.stats;

        let mut values = HashMap::new();
        values.insert("generated_at", generated_at.to_string());
        values.insert("file_count", stats.file_count.to_string());
        values.insert("total_lines", stats.total_lines.to_string());
        values.insert("link_count", links.len().to_string());
        values.insert("nodes", serde_json::to_string(&nodes)?);
        values.insert("links", serde_json::to_string(&links)?);
        values.insert(
            "category_counts",
            serde_json::to_string(&[stats.cpp, stats.hpp, stats.py, stats.other])?,
        );

        Ok(substitute(self.template, &values))
    }
}

impl Default for HtmlReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Replaces `{{name}}` placeholders in one left-to-right pass. Inserted
/// values are never rescanned; unknown names are kept verbatim.
fn substitute(template: &str, values: &HashMap<&str, String>) -> String {
    let extra: usize = values.values().map(String::len).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        match after_open.find("}}") {
            Some(end) => {
                let name = &after_open[..end];
                match values.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(name);
                        out.push_str("}}");
                    }
                }
                rest = &after_open[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
