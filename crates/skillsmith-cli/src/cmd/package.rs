use crate::output;
use anyhow::Context;
use skillsmith_core::archive;
use skillsmith_core::config::Config;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn run(path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    println!("Packaging skill: {}\n", path.display());

    // Repo-level config lives next to the skill folder.
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let config = Config::load(parent).context("failed to load skillsmith.yaml")?;

    let output_dir: Option<PathBuf> = output
        .map(Path::to_path_buf)
        .or_else(|| config.output_dir.as_ref().map(|d| parent.join(d)));
    debug!(?output_dir, "resolved archive output directory");

    let summary = archive::package_skill(path, output_dir.as_deref(), &config.exclude)
        .with_context(|| format!("failed to package {}", path.display()))?;

    for entry in &summary.entries {
        println!("  Added: {entry}");
    }
    println!("\n{} Created: {}", output::check_mark(true), summary.path.display());
    println!("  Size: {:.1} KB", summary.size_bytes as f64 / 1024.0);

    Ok(())
}
