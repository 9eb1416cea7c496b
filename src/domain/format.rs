//! File format descriptors
//!
//! Each descriptor names one file extension and the plugins able to handle
//! it, in the order they are preferred.

use serde::{Deserialize, Serialize};

/// Identifiers ending in this suffix belong to the FreeImage plugin family,
/// which lives in a separate package and is not in the registry.
pub const FREEIMAGE_SUFFIX: &str = "-FI";

/// Where FreeImage-family plugins are documented
pub const FREEIMAGE_URL: &str = "https://github.com/imageio/imageio-freeimage";

/// A file extension and the plugins that support it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    /// Extension including the leading dot (e.g. `.png`)
    pub extension: String,

    /// Human-readable format name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Longer description of the format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Reference page for the format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,

    /// Plugin identifiers, most preferred first
    #[serde(default)]
    pub priority: Vec<String>,

    /// Whether the format can hold volumetric data
    #[serde(default)]
    pub volume_support: bool,
}

impl FormatDescriptor {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            name: None,
            description: None,
            external_link: None,
            priority: Vec::new(),
            volume_support: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = Some(link.into());
        self
    }

    pub fn with_priority<I, S>(mut self, priority: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority = priority.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if `query` names this extension, with or without the dot.
    /// Comparison is case-insensitive.
    pub fn matches_extension(&self, query: &str) -> bool {
        let own = self.extension.trim_start_matches('.');
        let query = query.trim().trim_start_matches('.');
        !query.is_empty() && own.eq_ignore_ascii_case(query)
    }
}

/// Returns true for identifiers of the FreeImage plugin family
pub fn is_freeimage(identifier: &str) -> bool {
    identifier.ends_with(FREEIMAGE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let format = FormatDescriptor::new(".png")
            .with_name("Portable Network Graphics")
            .with_priority(["pillow", "PNG-PIL", "PNG-FI"]);

        assert_eq!(format.extension, ".png");
        assert_eq!(format.name.as_deref(), Some("Portable Network Graphics"));
        assert_eq!(format.priority, vec!["pillow", "PNG-PIL", "PNG-FI"]);
        assert!(format.external_link.is_none());
    }

    #[test]
    fn extension_matching() {
        let format = FormatDescriptor::new(".TIF");
        assert!(format.matches_extension(".tif"));
        assert!(format.matches_extension("tif"));
        assert!(!format.matches_extension("tiff"));
        assert!(!format.matches_extension(""));
        assert!(!format.matches_extension("."));
    }

    #[test]
    fn freeimage_suffix() {
        assert!(is_freeimage("JP2-FI"));
        assert!(!is_freeimage("pillow"));
        assert!(!is_freeimage("FI-JP2"));
    }

    #[test]
    fn parse_from_toml() {
        let toml = r#"
extension = ".mp4"
name = "MPEG-4 Part 14"
external_link = "https://en.wikipedia.org/wiki/MPEG-4_Part_14"
priority = ["pyav", "FFMPEG"]
"#;

        let format: FormatDescriptor = toml::from_str(toml).unwrap();
        assert_eq!(format.priority, vec!["pyav", "FFMPEG"]);
        assert!(!format.volume_support);
        assert!(format.description.is_none());
    }
}
