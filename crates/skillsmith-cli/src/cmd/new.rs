use crate::output;
use anyhow::Context;
use skillsmith_core::scaffold::{self, Template};
use std::path::Path;

pub fn run(dir: &Path, name: &str, mcp_server: Option<&str>, minimal: bool) -> anyhow::Result<()> {
    let template = if minimal {
        Template::Minimal
    } else if let Some(server) = mcp_server {
        Template::Integration {
            server: server.to_string(),
        }
    } else {
        Template::Standard
    };

    let created = scaffold::create_skill(dir, name, &template)
        .with_context(|| format!("failed to create skill '{name}'"))?;

    for warning in &created.warnings {
        println!("{} {warning}", output::warn_mark());
    }

    println!("{} Created skill: {name}/", output::check_mark(true));
    println!("  └── SKILL.md");
    if !minimal {
        println!("  └── scripts/");
        println!("  └── references/");
    }

    println!("\nNext steps:");
    println!("  1. Edit {name}/SKILL.md with your instructions");
    println!("  2. Validate: skillsmith validate {name}");
    println!("  3. Package: skillsmith package {name}");

    Ok(())
}
