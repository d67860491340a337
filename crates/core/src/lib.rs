//! Design-system theme → TypeScript typings.
//!
//! The engine is a pure function from a theme (any JSON object graph) and a
//! [`TypingsOptions`] to the text of a typings file. Loading the theme and
//! pretty-printing the result sit behind [`load_theme_object`] and the
//! [`Formatter`] trait so the core never touches anything else.

pub mod compose;
pub mod config;
pub mod extract;
pub mod format;
pub mod load;
pub mod print;
pub mod template;
pub mod value;

pub use compose::{
    GenerateError, ThemeTypings, create_theme_typings_interface, extract_theme_typings,
    generate_from_path,
};
pub use config::{
    ConfigError, KeyExpansion, KeyFilter, Template, TokenCategoryConfig, TypingsOptions,
    default_categories,
};
pub use format::{CommandFormatter, FormatError, Formatter, NoopFormatter};
pub use load::{LoadError, load_theme_object};
