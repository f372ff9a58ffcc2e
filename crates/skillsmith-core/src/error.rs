use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("skill name '{name}' must be lowercase; try: {suggestion}")]
    NameNotLowercase { name: String, suggestion: String },

    #[error("skill name '{name}' cannot contain spaces; try: {suggestion}")]
    NameHasSpaces { name: String, suggestion: String },

    #[error("skill name cannot contain '{0}' (reserved)")]
    NameReserved(&'static str),

    #[error("folder '{0}' already exists")]
    SkillExists(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("SKILL.md not found in {0}")]
    SkillMdNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, SkillError>;
