//! CLI command handlers. Each command is in its own file for clarity.

mod check;
mod completions;
mod parse;
mod probe;
mod rebuild;

pub use check::run_check;
pub use completions::run_completions;
pub use parse::run_parse;
pub use probe::run_probe;
pub use rebuild::run_rebuild;
