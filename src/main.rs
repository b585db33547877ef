use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use omap::core::{CodebaseAnalyzer, DEFAULT_OUTPUT};
use omap::formatters::HtmlReportFormatter;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "omap",
    version,
    about = "Codebase cartography - file census and dependency map as a single HTML page"
)]
struct Cli {
    /// Root directory to scan
    #[arg(value_name = "ROOT", default_value = ".")]
    root: PathBuf,

    /// Output HTML file
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("omap=warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli { root, output } = cli;
    let start_time = Instant::now();

    let root = fs::canonicalize(&root)
        .with_context(|| format!("failed to resolve root {}", root.display()))?;
    println!("[*] Analyzing codebase structure at {}...", root.display());

    let mut analyzer = CodebaseAnalyzer::new();
    let map = analyzer.analyze(&root)?;

    println!(
        "Mapped {} files under {}, {} lines, {} links in {:.2}s",
        map.stats.file_count,
        map.root().display(),
        map.stats.total_lines,
        map.link_count(),
        start_time.elapsed().as_secs_f64()
    );

    HtmlReportFormatter::new().format_to_file(&map, &output)?;

    println!("[+] OMAP Success: Map exported to {}", output.display());
    Ok(())
}
