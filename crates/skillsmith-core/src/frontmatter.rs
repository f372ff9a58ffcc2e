//! Frontmatter extraction and the key-value line grammar.
//!
//! The metadata block at the top of SKILL.md is line-oriented YAML: one
//! top-level `key: value` pair per line, with `key: |` / `key: >` block
//! scalars continuing on indented lines. Values are extracted with a small
//! grammar rather than a regex so embedded colons inside block scalars
//! cannot cut a value short.

/// A SKILL.md split into its frontmatter block and body.
///
/// `block` is the raw text between the `---` delimiters; `body` is
/// everything after the closing delimiter, untrimmed.
#[derive(Debug, Clone, Copy)]
pub struct Frontmatter<'a> {
    pub block: &'a str,
    pub body: &'a str,
}

/// Split `content` at the first pair of `---` delimiter lines.
///
/// The opening delimiter must be the very first line. Returns `None` when
/// either delimiter is missing.
pub fn extract(content: &str) -> Option<Frontmatter<'_>> {
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix('\n')
        .or_else(|| rest.strip_prefix("\r\n"))?;
    let end = rest.find("\n---")?;
    Some(Frontmatter {
        block: &rest[..end],
        body: &rest[end + "\n---".len()..],
    })
}

/// True when the content begins with a recognized top-level key, i.e. it
/// looks like frontmatter that forgot its delimiters.
pub fn looks_like_bare_frontmatter(content: &str) -> bool {
    content.starts_with("name:") || content.starts_with("description:")
}

/// The trimmed remainder of the first `key:` line, single-line form only.
pub fn inline_value<'a>(block: &'a str, key: &str) -> Option<&'a str> {
    block
        .lines()
        .find_map(|line| split_key_line(line, key))
        .filter(|v| !v.is_empty())
}

/// Extract the full value of `key`, supporting inline scalars and `|` / `>`
/// block scalars. Continuation lines are collected until the next
/// non-indented line (the next top-level key, a comment, or the block end).
/// The result is trimmed.
pub fn scalar_value(block: &str, key: &str) -> Option<String> {
    let mut lines = block.lines();
    let first = loop {
        let line = lines.next()?;
        if let Some(rest) = split_key_line(line, key) {
            break rest;
        }
    };

    // Drop a block-scalar marker; the value then lives on the indented lines.
    let inline = first.trim_start_matches(['|', '>']).trim();

    let mut parts: Vec<&str> = Vec::new();
    if !inline.is_empty() {
        parts.push(inline);
    }
    for line in lines {
        let indented = line.starts_with(' ') || line.starts_with('\t');
        if !line.trim().is_empty() && !indented {
            break;
        }
        parts.push(line);
    }

    let value = parts.join("\n").trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// If `line` is a top-level `key:` line for exactly `key`, return the
/// trimmed remainder after the colon.
fn split_key_line<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(key)?;
    let rest = rest.strip_prefix(':')?;
    Some(rest.trim())
}
