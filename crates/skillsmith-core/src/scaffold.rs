//! Skill folder scaffolding.
//!
//! Creates a new skill folder under a parent directory, renders one of
//! three SKILL.md templates, and seeds the optional `scripts/` and
//! `references/` subdirectories. There is no rollback: a failure after the
//! folder is created leaves it partially populated.

use crate::error::{Result, SkillError};
use crate::io;
use crate::naming;
use std::path::{Path, PathBuf};

/// Which SKILL.md template to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Template {
    /// SKILL.md only, shortest template.
    Minimal,
    /// Full template with instructions, examples, and error handling.
    Standard,
    /// Template for a skill orchestrating a named MCP integration server.
    Integration { server: String },
}

/// What `create_skill` produced.
#[derive(Debug)]
pub struct CreatedSkill {
    pub path: PathBuf,
    /// Non-fatal naming warnings (underscores in the name).
    pub warnings: Vec<String>,
}

/// Create `parent/name` with a rendered SKILL.md and template-dependent
/// subfolders. The name must pass [`naming::check_name`] and the target
/// folder must not already exist.
pub fn create_skill(parent: &Path, name: &str, template: &Template) -> Result<CreatedSkill> {
    let warnings = naming::check_name(name)?;

    let path = parent.join(name);
    if path.exists() {
        return Err(SkillError::SkillExists(name.to_string()));
    }
    io::ensure_dir(&path)?;

    let title = naming::to_title(name);
    let content = render(template, name, &title);
    io::atomic_write(&path.join("SKILL.md"), content.as_bytes())?;

    match template {
        Template::Minimal => {}
        Template::Standard => {
            seed_dir(&path.join("scripts"))?;
            seed_dir(&path.join("references"))?;
        }
        Template::Integration { server } => {
            seed_dir(&path.join("scripts"))?;
            io::ensure_dir(&path.join("references"))?;
            io::atomic_write(
                &path.join("references/api-guide.md"),
                format!("# {server} API Reference\n\nAdd API documentation here.\n").as_bytes(),
            )?;
        }
    }

    Ok(CreatedSkill { path, warnings })
}

/// Create a placeholder directory with a `.gitkeep` so it survives commits.
fn seed_dir(dir: &Path) -> Result<()> {
    io::ensure_dir(dir)?;
    io::write_if_missing(&dir.join(".gitkeep"), b"")?;
    Ok(())
}

fn render(template: &Template, name: &str, title: &str) -> String {
    let body = match template {
        Template::Minimal => MINIMAL_TEMPLATE.to_string(),
        Template::Standard => STANDARD_TEMPLATE.to_string(),
        Template::Integration { server } => INTEGRATION_TEMPLATE.replace("{server}", server),
    };
    body.replace("{name}", name).replace("{title}", title)
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

const MINIMAL_TEMPLATE: &str = r#"---
name: {name}
description: Brief description. Use when user says "X" or asks about Y.
---

# {title}

## Instructions

1. First step
2. Second step
3. Final step

## Example

User: "Do X"
- Action taken
- Result achieved
"#;

const STANDARD_TEMPLATE: &str = r#"---
name: {name}
description: |
  [WHAT] Brief description of what this skill does.
  [WHEN] Use when user says "X", "Y", or asks about Z.
  [CAPABILITIES] Key features: A, B, C.
# metadata:
#   author: Your Name
#   version: 1.0.0
---

# {title}

Brief overview of what this skill accomplishes.

---

## Instructions

### Step 1: [First Major Action]

Clear explanation of what happens in this step.

**Expected output:** Description of success state.

### Step 2: [Second Major Action]

Continue with next step...

### Step 3: [Final Action]

Complete the workflow...

---

## Examples

### Example 1: [Common Scenario]

**User says:** "Help me do X with Y"

**Actions:**
1. First action taken
2. Second action taken
3. Final action

**Result:** Clear description of outcome.

---

## Error Handling

### Error: [Common Error Message]

**Cause:** Why this happens

**Solution:**
1. First fix step
2. Second fix step
"#;

const INTEGRATION_TEMPLATE: &str = r#"---
name: {name}
description: |
  [SERVICE] integration for [DOMAIN] workflows.
  Use when user mentions "[trigger1]", "[trigger2]", or asks to "[action]".
  Requires {server} MCP server connected.
metadata:
  author: Your Name
  version: 1.0.0
  mcp-server: {server}
---

# {title}

Orchestrates {server} MCP tools for common workflows.

---

## Prerequisites

- {server} MCP server connected (Settings / Extensions)
- Valid API credentials configured

---

## Workflows

### Workflow 1: [Primary Workflow Name]

**Trigger:** User says "X" or "Y"

#### Phase 1: [Setup Phase]

```
Call MCP tool: `tool_name`
Parameters:
  - param1: user_input
  - param2: default_value
```

**Validate:** Check response contains expected_field

#### Phase 2: [Execution Phase]

```
Call MCP tool: `another_tool`
Parameters:
  - id: id_from_phase_1
```

**Result:** Summarize outcome

---

## Error Handling

### MCP Connection Failed

**Symptoms:** "Connection refused" or timeout

**Resolution:**
1. Check Settings / Extensions / {server}
2. Verify status shows "Connected"
3. If disconnected, click Reconnect

---

## References

- MCP Server Docs: [link]
- See `references/api-guide.md` for detailed documentation
"#;
