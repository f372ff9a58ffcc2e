//! Validation battery for skill folders.
//!
//! Runs a fixed ordered sequence of structural and content checks against a
//! skill folder (or a SKILL.md file directly) and collects the results into
//! a [`Report`]. Checks are independent: a failing check does not stop the
//! battery, with two exceptions that short-circuit because nothing after
//! them can meaningfully run: a missing SKILL.md and missing frontmatter
//! delimiters.

use crate::error::Result;
use crate::frontmatter;
use crate::naming;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Maximum allowed length of the description value, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 1024;
/// Bodies shorter than this draw a "very short" warning.
pub const MIN_BODY_CHARS: usize = 100;
/// Bodies longer than this draw a "move detail to references/" warning.
pub const MAX_BODY_WORDS: usize = 5000;

/// Substrings that mark a description as carrying a trigger phrase.
pub const TRIGGER_PHRASES: &[&str] = &["use when", "trigger", "ask for", "user says", "user asks"];

/// Wrong-case filenames checked when SKILL.md itself is absent.
const CASE_VARIANTS: &[&str] = &["skill.md", "SKILL.MD", "Skill.md"];

static NAME_PRESENT_RE: OnceLock<Regex> = OnceLock::new();
static DESC_PRESENT_RE: OnceLock<Regex> = OnceLock::new();

fn name_present_re() -> &'static Regex {
    NAME_PRESENT_RE.get_or_init(|| Regex::new(r"(?m)^name:[ \t]*\S").unwrap())
}

fn desc_present_re() -> &'static Regex {
    DESC_PRESENT_RE.get_or_init(|| Regex::new(r"(?m)^description:[ \t]*\S").unwrap())
}

/// Outcome of one validation run.
///
/// `errors` block success; `warnings` are advisory only. `passed` carries
/// human-readable notes for checks that succeeded, in evaluation order.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub passed: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl Report {
    pub fn is_pass(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a skill folder or a SKILL.md file.
///
/// `path` may point at the folder (SKILL.md is looked up inside it) or at
/// the metadata file itself (the folder is its parent).
pub fn validate(path: &Path) -> Result<Report> {
    let mut report = Report::default();

    let (skill_md, skill_folder): (PathBuf, PathBuf) = if path.is_file() {
        let folder = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        (path.to_path_buf(), folder)
    } else {
        (path.join("SKILL.md"), path.to_path_buf())
    };

    // Check 1: SKILL.md exists with exact naming. Short-circuits.
    if !skill_md.exists() {
        let variant = CASE_VARIANTS
            .iter()
            .find(|v| skill_folder.join(v).exists());
        match variant {
            Some(v) => report.errors.push(format!(
                "Found '{v}' but must be exactly 'SKILL.md' (case-sensitive)"
            )),
            None => report.errors.push("SKILL.md not found".to_string()),
        }
        return Ok(report);
    }
    report
        .passed
        .push("SKILL.md exists with correct naming".to_string());

    // Check 2: folder naming (kebab-case)
    let folder_name = skill_folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut folder_ok = true;
    if folder_name != folder_name.to_lowercase() {
        report.errors.push(format!(
            "Folder name '{folder_name}' contains uppercase - use kebab-case"
        ));
        folder_ok = false;
    }
    if folder_name.contains(' ') {
        report.errors.push(format!(
            "Folder name '{folder_name}' contains spaces - use kebab-case"
        ));
        folder_ok = false;
    }
    if folder_name.contains('_') {
        report.warnings.push(format!(
            "Folder name '{folder_name}' uses underscores - prefer kebab-case"
        ));
    }
    if folder_ok {
        report
            .passed
            .push("Folder naming follows kebab-case".to_string());
    }

    // Check 3: no repo-level README inside the skill
    if skill_folder.join("README.md").exists() {
        report.warnings.push(
            "README.md found inside skill folder - move to repo root for distribution".to_string(),
        );
    }

    let content = std::fs::read_to_string(&skill_md)?;

    // Check 4: frontmatter delimiters. Short-circuits.
    let Some(fm) = frontmatter::extract(&content) else {
        if frontmatter::looks_like_bare_frontmatter(&content) {
            report
                .errors
                .push("Missing YAML delimiters (---) around frontmatter".to_string());
        } else {
            report.errors.push("No YAML frontmatter found".to_string());
        }
        return Ok(report);
    };
    report
        .passed
        .push("YAML frontmatter has correct delimiters".to_string());

    check_required_fields(fm.block, &mut report);

    // Check 8: no XML tags anywhere in the frontmatter
    if fm.block.contains('<') || fm.block.contains('>') {
        report
            .errors
            .push("XML angle brackets (<>) found in frontmatter - forbidden for security".to_string());
    } else {
        report.passed.push("No XML tags in frontmatter".to_string());
    }

    // Check 9: quote balance
    if fm.block.matches('\'').count() % 2 != 0 {
        report
            .errors
            .push("Possible unclosed single quote in frontmatter".to_string());
    }
    if fm.block.matches('"').count() % 2 != 0 {
        report
            .errors
            .push("Possible unclosed double quote in frontmatter".to_string());
    }

    check_body(fm.body, &mut report);

    Ok(report)
}

/// Checks 5-7: required fields, name format, description content.
fn check_required_fields(block: &str, report: &mut Report) {
    if !name_present_re().is_match(block) {
        report
            .errors
            .push("Missing required field: name".to_string());
    } else {
        report.passed.push("'name' field present".to_string());

        if let Some(name) = frontmatter::inline_value(block, "name") {
            if name != name.to_lowercase() {
                report
                    .errors
                    .push(format!("name '{name}' contains uppercase - use kebab-case"));
            }
            if name.contains(' ') {
                report
                    .errors
                    .push(format!("name '{name}' contains spaces - use kebab-case"));
            }
            if naming::reserved_substring(name).is_some() {
                report
                    .errors
                    .push("name cannot contain 'claude' or 'anthropic' (reserved)".to_string());
            }
        }
    }

    if !desc_present_re().is_match(block) {
        report
            .errors
            .push("Missing required field: description".to_string());
    } else {
        report.passed.push("'description' field present".to_string());

        if let Some(description) = frontmatter::scalar_value(block, "description") {
            let chars = description.chars().count();
            if chars > MAX_DESCRIPTION_CHARS {
                report.errors.push(format!(
                    "description exceeds {MAX_DESCRIPTION_CHARS} chars ({chars} chars)"
                ));
            }

            let lower = description.to_lowercase();
            if !TRIGGER_PHRASES.iter().any(|p| lower.contains(p)) {
                report.warnings.push(
                    "description may be missing trigger phrases (e.g., 'Use when user says...')"
                        .to_string(),
                );
            }
        }
    }
}

/// Check 10: body content after the closing delimiter.
fn check_body(body: &str, report: &mut Report) {
    let body = body.trim();
    if body.is_empty() {
        report
            .warnings
            .push("SKILL.md body is empty - add instructions".to_string());
    } else if body.len() < MIN_BODY_CHARS {
        report
            .warnings
            .push("SKILL.md body is very short - consider adding more detail".to_string());
    } else {
        let word_count = body.split_whitespace().count();
        if word_count > MAX_BODY_WORDS {
            report.warnings.push(format!(
                "SKILL.md body is {word_count} words - consider moving detail to references/"
            ));
        }
        report
            .passed
            .push(format!("SKILL.md body has content ({word_count} words)"));
    }
}
