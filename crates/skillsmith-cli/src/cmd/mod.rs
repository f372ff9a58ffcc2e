pub mod new;
pub mod package;
pub mod validate;
