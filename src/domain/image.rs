//! Example images shipped alongside the library

use serde::{Deserialize, Serialize};

/// A standard example image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleImage {
    /// File name, e.g. `astronaut.png`
    pub name: String,

    /// What the image shows
    #[serde(default)]
    pub description: String,
}

impl ExampleImage {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Sort key: extension first, then stem.
    ///
    /// Splits at the last dot; names without a dot sort by the whole name
    /// with an empty stem.
    pub fn sort_key(&self) -> (&str, &str) {
        match self.name.rsplit_once('.') {
            Some((stem, ext)) => (ext, stem),
            None => (self.name.as_str(), ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_splits_at_last_dot() {
        let image = ExampleImage::new("newtonscradle.gif", "");
        assert_eq!(image.sort_key(), ("gif", "newtonscradle"));

        let image = ExampleImage::new("stent.npz.zip", "");
        assert_eq!(image.sort_key(), ("zip", "stent.npz"));

        let image = ExampleImage::new("README", "");
        assert_eq!(image.sort_key(), ("README", ""));
    }
}
