//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `entry <EXT>` | Render the line for one format |
//! | `formats [--video]` | Render every format line |
//! | `check` | Report plugins missing from the registry |
//! | `page <DOCNAME> [FILE]` | Substitute placeholders in a doc page |
//! | `images` | Render the standard images list |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - reStructuredText, ready to paste into docs
//! - `json` - Machine-parseable JSON
//!
//! The default can be changed with `default_format` in the global config.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! format-docs --verbose check
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod render_cmd;
mod page_cmd;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
