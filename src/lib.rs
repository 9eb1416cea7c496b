//! format-docs - Documentation helper for imaging library format listings
//!
//! Renders one reStructuredText line per supported file format, naming the
//! plugins that can read or write it in priority order, and substitutes those
//! listings into a few known documentation pages before they are built.

pub mod domain;
pub mod render;
pub mod storage;
pub mod cli;

pub use domain::{ExampleImage, FormatDescriptor, PluginProvider, PluginRegistry};
pub use render::{render_entry, RenderError};
