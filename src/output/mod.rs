//! Tree formatting and display
//!
//! The walkers produce color-agnostic data; this module decides what it looks like:
//! - `streaming` - ASCII tree lines, optionally colored
//! - `json` - pretty JSON of a buffered tree
//! - `utils` - escape stripping for comparing colored and plain text

mod config;
mod json;
mod streaming;
mod utils;

pub use config::OutputConfig;
pub use json::{print_json, write_json};
pub use streaming::{StreamingFormatter, write_tree_line};
pub use utils::strip_ansi;
