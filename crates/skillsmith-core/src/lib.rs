pub mod archive;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod io;
pub mod naming;
pub mod scaffold;
pub mod validate;

pub use error::{Result, SkillError};
