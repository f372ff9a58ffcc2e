use crate::output;
use colored::Colorize;
use skillsmith_core::validate;
use std::path::Path;

/// Run the validation battery and print the report. Returns the pass/fail
/// verdict; the caller decides the exit code.
pub fn run(path: &Path, json: bool) -> anyhow::Result<bool> {
    if !path.exists() {
        anyhow::bail!("path does not exist: {}", path.display());
    }

    let report = validate::validate(path)?;

    if json {
        output::print_json(&report)?;
        return Ok(report.is_pass());
    }

    println!("\nValidating skill: {}\n", path.display());
    println!("{}", "-".repeat(50));

    for note in &report.passed {
        println!("{} {note}", output::check_mark(true));
    }
    for warning in &report.warnings {
        println!("{} {warning}", output::warn_mark());
    }
    for error in &report.errors {
        println!("{} {error}", output::check_mark(false));
    }

    println!("{}", "-".repeat(50));

    if report.is_pass() {
        println!("\n{}\n", "✓ Skill validation passed!".green());
    } else {
        let banner = format!(
            "✗ Skill validation failed with {} error(s)",
            report.errors.len()
        );
        println!("\n{}\n", banner.red());
    }

    Ok(report.is_pass())
}
