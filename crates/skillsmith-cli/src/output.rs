use colored::Colorize;
use serde::Serialize;

pub fn check_mark(passed: bool) -> String {
    if passed {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

pub fn warn_mark() -> String {
    "⚠".yellow().to_string()
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
