//! # Rendering
//!
//! Turns the registries into reStructuredText fragments for the docs.
//!
//! ## Format entries
//!
//! Each supported extension becomes one bullet naming its plugins in
//! priority order:
//!
//! ```text
//! - **.png** (Portable Network Graphics): :mod:`pillow <imageio.plugins.pillow>`, `PNG-FI <...>`_
//! ```
//!
//! Every plugin in a priority list must be registered, or belong to the
//! FreeImage family (identifiers ending in `-FI`). Anything else is a broken
//! registry and rendering that format fails.
//!
//! ## Pages
//!
//! | Document | Placeholders |
//! |----------|--------------|
//! | `formats/index` | `{{ formats }}`, `{{ plugins }}` |
//! | `formats/video_formats` | `{{ formats }}`, `{{ plugins }}` |
//! | `*standardimages` | `{{ images }}`, `{{ base_url }}` |
//! | `development/plugins` | `{{ example_plugin }}` |
//!
//! ## Key Types
//!
//! - [`render_entry`] - Renders a single format line
//! - [`PageContext`] - Everything a page may substitute
//! - [`RenderError`] - Registry inconsistencies found while rendering

mod entry;
mod error;
mod images;
mod page;

pub use entry::{check_formats, render_entries, render_entry, render_plugin_list};
pub use error::RenderError;
pub use images::{render_images, sorted_images};
pub use page::{render_page, substitute, PageContext, PageKind};
