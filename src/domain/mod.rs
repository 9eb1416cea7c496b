//! Domain models for format-docs
//!
//! Read-only registries describing plugins, file formats and example images.
//! Nothing here performs I/O.

mod plugin;
mod format;
mod image;

pub use plugin::{PluginProvider, PluginRegistry};
pub use format::{is_freeimage, FormatDescriptor, FREEIMAGE_SUFFIX, FREEIMAGE_URL};
pub use image::ExampleImage;
