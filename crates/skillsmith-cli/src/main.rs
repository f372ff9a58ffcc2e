mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skillsmith",
    about = "Scaffold, package, and validate skill folders",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON (validate only)
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new skill folder from a template
    New {
        /// Skill name in kebab-case
        name: String,

        /// MCP server name; renders the integration template
        #[arg(long = "mcp", value_name = "SERVER", conflicts_with = "minimal")]
        mcp_server: Option<String>,

        /// Create the minimal skill structure (SKILL.md only)
        #[arg(long)]
        minimal: bool,

        /// Parent directory to create the skill in
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },

    /// Package a skill folder into a distributable zip archive
    Package {
        /// Path to the skill folder
        path: PathBuf,

        /// Output directory for the archive
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Validate a skill folder or SKILL.md file
    Validate {
        /// Path to the skill folder or SKILL.md
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::New {
            name,
            mcp_server,
            minimal,
            dir,
        } => cmd::new::run(&dir, &name, mcp_server.as_deref(), minimal),
        Commands::Package { path, output } => cmd::package::run(&path, output.as_deref()),
        Commands::Validate { path } => match cmd::validate::run(&path, cli.json) {
            Ok(true) => Ok(()),
            Ok(false) => std::process::exit(1),
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
