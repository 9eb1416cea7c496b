//! Plugin providers
//!
//! A provider is anything that can read or write a file format. For the
//! docs we only need its name and the module that documents it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A registered plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginProvider {
    /// Plugin identifier, as used in format priority lists
    #[serde(default)]
    pub name: String,

    /// Module reference for the plugin's API docs (e.g. `imageio.plugins.pillow`)
    pub module_name: String,

    /// Class implementing the plugin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Third-party package the plugin wraps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,

    /// Name to install the backend with, if it differs from the package
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_name: Option<String>,

    /// Whether this is a legacy (v2 format-based) plugin
    #[serde(default)]
    pub legacy: bool,
}

impl PluginProvider {
    pub fn new(name: impl Into<String>, module_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module_name: module_name.into(),
            class_name: None,
            package_name: None,
            install_name: None,
            legacy: false,
        }
    }
}

/// Lookup table of plugins keyed by identifier
///
/// Deserializes from a map of `name -> provider`; the map key always wins
/// over a `name` field inside the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, PluginProvider>", into = "BTreeMap<String, PluginProvider>")]
pub struct PluginRegistry {
    plugins: BTreeMap<String, PluginProvider>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a provider, replacing any existing one with the same name
    pub fn insert(&mut self, provider: PluginProvider) {
        self.plugins.insert(provider.name.clone(), provider);
    }

    pub fn get(&self, name: &str) -> Option<&PluginProvider> {
        self.plugins.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Providers sorted by name
    pub fn iter(&self) -> impl Iterator<Item = &PluginProvider> {
        self.plugins.values()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl From<BTreeMap<String, PluginProvider>> for PluginRegistry {
    fn from(map: BTreeMap<String, PluginProvider>) -> Self {
        let plugins = map
            .into_iter()
            .map(|(name, mut provider)| {
                provider.name = name.clone();
                (name, provider)
            })
            .collect();
        Self { plugins }
    }
}

impl From<PluginRegistry> for BTreeMap<String, PluginProvider> {
    fn from(registry: PluginRegistry) -> Self {
        registry.plugins
    }
}

impl FromIterator<PluginProvider> for PluginRegistry {
    fn from_iter<I: IntoIterator<Item = PluginProvider>>(iter: I) -> Self {
        let mut registry = Self::new();
        for provider in iter {
            registry.insert(provider);
        }
        registry
    }
}
