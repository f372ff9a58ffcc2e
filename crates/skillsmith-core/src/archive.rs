//! Skill folder packaging.
//!
//! Copies a skill folder's distributable contents into a timestamped,
//! deflate-compressed zip archive. Entry paths are rooted at the skill
//! folder name so the archive unpacks to a single folder.

use crate::error::{Result, SkillError};
use crate::io;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Names and `*`-suffix patterns excluded from every archive. Matching is a
/// flat per-segment name/suffix comparison, not a glob engine, and applies
/// transitively: a directory match excludes everything beneath it.
pub const EXCLUDE_PATTERNS: &[&str] = &[
    ".git",
    ".gitignore",
    ".DS_Store",
    "__pycache__",
    "*.pyc",
    ".env",
    "node_modules",
    "README.md",
];

/// What `package_skill` produced.
#[derive(Debug)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    /// Archive entry names in the order they were added.
    pub entries: Vec<String>,
    pub size_bytes: u64,
}

/// True when `name` matches one of the exclusion patterns.
fn is_excluded(name: &str, extra: &[String]) -> bool {
    let matches_pattern = |pattern: &str| {
        if let Some(suffix) = pattern.strip_prefix('*') {
            name.ends_with(suffix)
        } else {
            name == pattern
        }
    };
    EXCLUDE_PATTERNS.iter().any(|p| matches_pattern(p))
        || extra.iter().any(|p| matches_pattern(p))
}

/// Package `skill_dir` into `<name>-<YYYYMMDD>.zip`.
///
/// The archive is written to `output_dir` (created if absent) or, when
/// `None`, to the skill folder's parent. `extra_excludes` extends the fixed
/// exclusion set. Requires a SKILL.md directly inside the folder.
pub fn package_skill(
    skill_dir: &Path,
    output_dir: Option<&Path>,
    extra_excludes: &[String],
) -> Result<ArchiveSummary> {
    if !skill_dir.is_dir() {
        return Err(SkillError::NotADirectory(skill_dir.display().to_string()));
    }
    let skill_dir = skill_dir.canonicalize()?;
    if !skill_dir.join("SKILL.md").exists() {
        return Err(SkillError::SkillMdNotFound(skill_dir.display().to_string()));
    }

    let skill_name = skill_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "skill".to_string());

    let parent = skill_dir.parent().unwrap_or(Path::new(".")).to_path_buf();
    let output_dir = match output_dir {
        Some(dir) => {
            io::ensure_dir(dir)?;
            dir.canonicalize()?
        }
        None => parent,
    };

    let date = chrono::Local::now().format("%Y%m%d");
    let zip_path = output_dir.join(format!("{skill_name}-{date}.zip"));

    let file = File::create(&zip_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = Vec::new();
    add_dir(
        &mut writer,
        &skill_dir,
        &skill_name,
        extra_excludes,
        options,
        &mut entries,
    )?;
    writer.finish()?;

    let size_bytes = std::fs::metadata(&zip_path)?.len();
    Ok(ArchiveSummary {
        path: zip_path,
        entries,
        size_bytes,
    })
}

/// Recursively add the contents of `dir` under the entry prefix `prefix`.
/// Entries within a directory are added in name order so archives are
/// deterministic.
fn add_dir(
    writer: &mut ZipWriter<File>,
    dir: &Path,
    prefix: &str,
    extra_excludes: &[String],
    options: SimpleFileOptions,
    entries: &mut Vec<String>,
) -> Result<()> {
    let mut children: Vec<PathBuf> = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    children.sort();

    for child in children {
        let name = child
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if is_excluded(&name, extra_excludes) {
            continue;
        }
        let entry_name = format!("{prefix}/{name}");
        if child.is_dir() {
            add_dir(writer, &child, &entry_name, extra_excludes, options, entries)?;
        } else {
            writer.start_file(entry_name.clone(), options)?;
            writer.write_all(&std::fs::read(&child)?)?;
            entries.push(entry_name);
        }
    }
    Ok(())
}
