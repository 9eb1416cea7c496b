//! Format and image listing commands

use anyhow::Result;

use super::output::Output;
use crate::render::{render_entry, render_images, sorted_images};
use crate::storage::LoadedRegistry;

pub fn entry(output: &Output, loaded: &LoadedRegistry, extension: &str) -> Result<()> {
    let registry = &loaded.registry;
    let format = registry.find_format(extension)?;
    output.verbose_ctx(
        "entry",
        &format!("{} priority: {:?}", format.extension, format.priority),
    );

    let line = render_entry(format, &registry.plugins)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "extension": format.extension,
            "name": format.name,
            "priority": format.priority,
            "line": line,
        }));
    } else {
        output.text(&line);
    }

    Ok(())
}

pub fn formats(output: &Output, loaded: &LoadedRegistry, video: bool) -> Result<()> {
    let registry = &loaded.registry;
    let formats = if video {
        &registry.video_formats
    } else {
        &registry.formats
    };
    output.verbose_ctx("formats", &format!("Rendering {} formats", formats.len()));

    let mut entries = Vec::with_capacity(formats.len());
    for format in formats {
        entries.push((format, render_entry(format, &registry.plugins)?));
    }

    if output.is_json() {
        let items: Vec<_> = entries
            .iter()
            .map(|(format, line)| {
                serde_json::json!({
                    "extension": format.extension,
                    "name": format.name,
                    "priority": format.priority,
                    "line": line,
                })
            })
            .collect();
        output.data(&items);
    } else {
        for (_, line) in &entries {
            output.text(line);
        }
    }

    Ok(())
}

pub fn check(output: &Output, loaded: &LoadedRegistry) -> Result<()> {
    let registry = &loaded.registry;
    let errors = registry.check();
    output.verbose_ctx(
        "check",
        &format!(
            "Checked {} formats against {} plugins",
            registry.formats.len() + registry.video_formats.len(),
            registry.plugins.len()
        ),
    );

    if output.is_json() {
        let problems: Vec<_> = errors.iter().map(|e| e.to_string()).collect();
        output.data(&serde_json::json!({
            "valid": errors.is_empty(),
            "errors": problems,
        }));
    } else if errors.is_empty() {
        output.success(&format!(
            "Registry OK: {}",
            loaded.path.display()
        ));
    } else {
        for error in &errors {
            output.error(&error.to_string());
        }
    }

    if !errors.is_empty() {
        anyhow::bail!("{} unregistered plugin reference(s)", errors.len());
    }

    Ok(())
}

pub fn images(output: &Output, loaded: &LoadedRegistry) {
    let registry = &loaded.registry;

    if output.is_json() {
        let items: Vec<_> = sorted_images(&registry.images)
            .into_iter()
            .map(|image| {
                serde_json::json!({
                    "name": image.name,
                    "description": image.description,
                    "url": format!("{}{}", registry.image_base_url, image.name),
                })
            })
            .collect();
        output.data(&items);
    } else if !registry.images.is_empty() {
        output.text(&render_images(&registry.images, &registry.image_base_url));
    }
}
