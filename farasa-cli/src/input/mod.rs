//! Input handling module

pub mod path_kind;
pub mod prompt;

pub use path_kind::InputKind;
pub use prompt::Prompt;
