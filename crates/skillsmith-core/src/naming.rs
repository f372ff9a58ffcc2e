//! Skill name rules.
//!
//! Names are kebab-case tokens: lowercase, no spaces, hyphen-separated.
//! Underscores are tolerated with a warning. Two substrings are reserved
//! for the platform and rejected outright.

use crate::error::{Result, SkillError};

/// Substrings that may not appear anywhere in a skill name (case-insensitive).
pub const RESERVED_SUBSTRINGS: &[&str] = &["claude", "anthropic"];

/// Convert a kebab-case name to Title Case, one word per hyphen segment.
pub fn to_title(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Return the reserved substring contained in `name`, if any.
pub fn reserved_substring(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    RESERVED_SUBSTRINGS
        .iter()
        .find(|r| lower.contains(**r))
        .copied()
}

/// Check a candidate skill name, in order: lowercase, no spaces, no reserved
/// substrings. Each violation is fatal with a suggested correction where one
/// exists. Underscores pass but produce a warning suggesting the hyphenated
/// alternative.
pub fn check_name(name: &str) -> Result<Vec<String>> {
    if name != name.to_lowercase() {
        return Err(SkillError::NameNotLowercase {
            name: name.to_string(),
            suggestion: name.to_lowercase(),
        });
    }

    if name.contains(' ') {
        return Err(SkillError::NameHasSpaces {
            name: name.to_string(),
            suggestion: name.replace(' ', "-"),
        });
    }

    let mut warnings = Vec::new();
    if name.contains('_') {
        warnings.push(format!(
            "Prefer kebab-case over underscores. Consider: {}",
            name.replace('_', "-")
        ));
    }

    if let Some(reserved) = reserved_substring(name) {
        return Err(SkillError::NameReserved(reserved));
    }

    Ok(warnings)
}
