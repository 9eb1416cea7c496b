//! # Storage Layer
//!
//! Loads the registries and user configuration from disk.
//!
//! ## File Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Registry | TOML or YAML | `--registry`, `$FORMAT_DOCS_REGISTRY`, or `docs/format-docs.toml` |
//! | Example plugin | Python source | `example_plugin` key, relative to the registry file |
//! | Global config | TOML | `~/.config/format-docs/config.toml` |
//!
//! ## Registry Layout
//!
//! ```toml
//! image_base_url = "https://github.com/imageio/imageio-binaries/raw/master/images/"
//! example_plugin = "../imageio/plugins/example.py"
//!
//! [plugins.pillow]
//! module_name = "imageio.plugins.pillow"
//!
//! [[formats]]
//! extension = ".png"
//! name = "Portable Network Graphics"
//! priority = ["pillow", "PNG-FI"]
//!
//! [[images]]
//! name = "chelsea.png"
//! description = "Image of Stefan's cat"
//! ```
//!
//! ## Key Types
//!
//! - [`DocsRegistry`] - All registries, as read from the file
//! - [`LoadedRegistry`] - A registry plus the files it points at
//! - [`Config`] - Global configuration and registry discovery

mod config;
mod registry;

pub use config::{Config, ConfigError, GlobalConfig, OutputFormat, REGISTRY_ENV, REGISTRY_FILE_NAME};
pub use registry::{DocsRegistry, LoadedRegistry, DEFAULT_IMAGE_BASE_URL};
