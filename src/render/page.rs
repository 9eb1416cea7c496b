//! Placeholder substitution for known documentation pages
//!
//! Page sources contain `{{ name }}` tokens. Only the documents listed in
//! [`PageKind`] are touched; everything else passes through unchanged.

use std::borrow::Cow;

use crate::domain::{ExampleImage, FormatDescriptor, PluginRegistry};

use super::entry::{render_entries, render_plugin_list};
use super::error::RenderError;
use super::images::render_images;

/// Everything a page may pull in
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub plugins: &'a PluginRegistry,
    pub formats: &'a [FormatDescriptor],
    pub video_formats: &'a [FormatDescriptor],
    pub images: &'a [ExampleImage],
    pub image_base_url: &'a str,
    /// Source of the example plugin, if configured
    pub example_plugin: Option<&'a str>,
}

/// Documents that receive substitutions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// `formats/index`
    FormatIndex,
    /// `formats/video_formats`
    VideoFormats,
    /// Any document ending in `standardimages`
    StandardImages,
    /// `development/plugins`
    PluginDevelopment,
}

impl PageKind {
    /// Classifies a document name, `None` for pages left alone
    pub fn from_docname(docname: &str) -> Option<Self> {
        match docname {
            "formats/index" => Some(PageKind::FormatIndex),
            "formats/video_formats" => Some(PageKind::VideoFormats),
            "development/plugins" => Some(PageKind::PluginDevelopment),
            _ if docname.ends_with("standardimages") => Some(PageKind::StandardImages),
            _ => None,
        }
    }
}

/// Renders a page source for `docname`.
///
/// Unknown documents are returned borrowed. Unknown placeholders inside a
/// known document are kept verbatim.
pub fn render_page<'s>(
    docname: &str,
    source: &'s str,
    ctx: &PageContext<'_>,
) -> Result<Cow<'s, str>, RenderError> {
    let Some(kind) = PageKind::from_docname(docname) else {
        return Ok(Cow::Borrowed(source));
    };

    let rendered = match kind {
        PageKind::FormatIndex | PageKind::VideoFormats => {
            let formats = if kind == PageKind::FormatIndex {
                ctx.formats
            } else {
                ctx.video_formats
            };
            substitute(source, |key| match key {
                "formats" => Some(render_entries(formats, ctx.plugins)),
                "plugins" => Some(Ok(render_plugin_list(ctx.plugins))),
                _ => None,
            })?
        }
        PageKind::StandardImages => substitute(source, |key| match key {
            "images" => Some(Ok(render_images(ctx.images, ctx.image_base_url))),
            "base_url" => Some(Ok(ctx.image_base_url.to_string())),
            _ => None,
        })?,
        PageKind::PluginDevelopment => substitute(source, |key| match key {
            "example_plugin" => Some(
                ctx.example_plugin
                    .map(example_plugin_block)
                    .ok_or_else(|| RenderError::MissingExamplePlugin(docname.to_string())),
            ),
            _ => None,
        })?,
    };

    Ok(Cow::Owned(rendered))
}

/// Example plugin source with trailing whitespace stripped from each line
fn example_plugin_block(source: &str) -> String {
    source
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replaces each `{{ key }}` for which `lookup` returns a value.
///
/// When a placeholder is the first thing on its line, every following line
/// of a multi-line value gets the same indentation, so values can sit inside
/// directives like `.. code-block::`. Blank lines stay empty.
pub fn substitute<F>(source: &str, mut lookup: F) -> Result<String, RenderError>
where
    F: FnMut(&str) -> Option<Result<String, RenderError>>,
{
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        let end = start + 2 + len + 2;
        let key = rest[start + 2..end - 2].trim();

        out.push_str(&rest[..start]);
        match lookup(key) {
            Some(value) => {
                let value = value?;
                let indent = line_indent(&out).to_string();
                push_indented(&mut out, &value, &indent);
            }
            None => out.push_str(&rest[start..end]),
        }
        rest = &rest[end..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Leading whitespace of the current (last) line, if nothing else precedes
fn line_indent(out: &str) -> &str {
    let line_start = out.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let current = &out[line_start..];
    if current.chars().all(char::is_whitespace) {
        current
    } else {
        ""
    }
}

fn push_indented(out: &mut String, value: &str, indent: &str) {
    for (i, line) in value.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(indent);
            }
        }
        out.push_str(line);
    }
}
