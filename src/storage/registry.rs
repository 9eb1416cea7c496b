//! Registry files
//!
//! A registry file holds every plugin, format and example image the docs
//! know about. TOML is the default; `.yaml`/`.yml` files are read with
//! serde_yaml.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::config::ConfigError;
use crate::domain::{ExampleImage, FormatDescriptor, PluginRegistry};
use crate::render::{check_formats, PageContext, RenderError};

/// Where the standard images are hosted
pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://github.com/imageio/imageio-binaries/raw/master/images/";

/// Contents of a registry file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsRegistry {
    /// Known plugins, keyed by identifier
    pub plugins: PluginRegistry,

    /// All supported file formats
    pub formats: Vec<FormatDescriptor>,

    /// Formats listed on the video page
    pub video_formats: Vec<FormatDescriptor>,

    /// Standard example images
    pub images: Vec<ExampleImage>,

    /// Prefix for image download links
    pub image_base_url: String,

    /// Example plugin shown on the plugin development page
    pub example_plugin: Option<PathBuf>,
}

impl Default for DocsRegistry {
    fn default() -> Self {
        Self {
            plugins: PluginRegistry::default(),
            formats: Vec::new(),
            video_formats: Vec::new(),
            images: Vec::new(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            example_plugin: None,
        }
    }
}

impl DocsRegistry {
    /// Parses a registry, choosing the format by file extension
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        if is_yaml {
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }

    /// Looks up a format by extension in the main list, then the video list
    pub fn find_format(&self, extension: &str) -> Result<&FormatDescriptor, RenderError> {
        self.formats
            .iter()
            .chain(&self.video_formats)
            .find(|f| f.matches_extension(extension))
            .ok_or_else(|| RenderError::UnknownFormat(extension.to_string()))
    }

    /// Every unregistered plugin reference across both format lists
    pub fn check(&self) -> Vec<RenderError> {
        check_formats(self.formats.iter().chain(&self.video_formats), &self.plugins)
    }
}

/// A registry read from disk, with its example plugin source resolved
#[derive(Debug, Clone)]
pub struct LoadedRegistry {
    pub registry: DocsRegistry,
    pub path: PathBuf,
    pub example_plugin_source: Option<String>,
}

impl LoadedRegistry {
    /// Reads and parses a registry file.
    ///
    /// A relative `example_plugin` path is resolved against the registry
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry: {}", path.display()))?;

        let registry = DocsRegistry::parse(&content, path)
            .with_context(|| format!("Failed to parse registry: {}", path.display()))?;

        let example_plugin_source = match &registry.example_plugin {
            Some(example) => {
                let example_path = match path.parent() {
                    Some(dir) if example.is_relative() => dir.join(example),
                    _ => example.clone(),
                };
                let source = fs::read_to_string(&example_path).with_context(|| {
                    format!("Failed to read example plugin: {}", example_path.display())
                })?;
                Some(source)
            }
            None => None,
        };

        Ok(Self {
            registry,
            path: path.to_path_buf(),
            example_plugin_source,
        })
    }

    /// Borrows everything page rendering needs
    pub fn page_context(&self) -> PageContext<'_> {
        PageContext {
            plugins: &self.registry.plugins,
            formats: &self.registry.formats,
            video_formats: &self.registry.video_formats,
            images: &self.registry.images,
            image_base_url: &self.registry.image_base_url,
            example_plugin: self.example_plugin_source.as_deref(),
        }
    }
}
