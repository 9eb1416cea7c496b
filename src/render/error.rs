//! Rendering errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A priority list names a plugin nobody registered
    #[error("The format `{plugin}` does not have a registered plugin (listed for {extension})")]
    UnregisteredPlugin { plugin: String, extension: String },

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("No example plugin source configured for '{0}'")]
    MissingExamplePlugin(String),
}
