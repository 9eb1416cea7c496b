//! Format entry rendering

use crate::domain::{is_freeimage, FormatDescriptor, PluginRegistry, FREEIMAGE_URL};

use super::error::RenderError;

/// Separator between plugin references
const PLUGIN_SEPARATOR: &str = ", ";

/// Renders one format as a bullet line.
///
/// Plugins keep their priority order (duplicates included). The first
/// identifier that is neither registered nor FreeImage-suffixed aborts the
/// render with [`RenderError::UnregisteredPlugin`].
pub fn render_entry(
    format: &FormatDescriptor,
    registry: &PluginRegistry,
) -> Result<String, RenderError> {
    let plugins = format
        .priority
        .iter()
        .map(|name| plugin_reference(name, format, registry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!("{}{}", label(format), plugins.join(PLUGIN_SEPARATOR)))
}

fn plugin_reference(
    name: &str,
    format: &FormatDescriptor,
    registry: &PluginRegistry,
) -> Result<String, RenderError> {
    if let Some(provider) = registry.get(name) {
        Ok(format!(":mod:`{} <{}>`", name, provider.module_name))
    } else if is_freeimage(name) {
        Ok(format!("`{} <{}>`_", name, FREEIMAGE_URL))
    } else {
        Err(RenderError::UnregisteredPlugin {
            plugin: name.to_string(),
            extension: format.extension.clone(),
        })
    }
}

fn label(format: &FormatDescriptor) -> String {
    match (&format.external_link, &format.name) {
        (Some(link), Some(name)) => {
            format!("- **{}** (`{} <{}>`_): ", format.extension, name, link)
        }
        // No display name to hang the link on, so link the extension itself
        (Some(link), None) => {
            format!("- **{}** (`{} <{}>`_): ", format.extension, format.extension, link)
        }
        (None, Some(name)) => format!("- **{}** ({}): ", format.extension, name),
        (None, None) => format!("- **{}**: ", format.extension),
    }
}

/// Renders every format, one line each. Stops at the first broken entry.
pub fn render_entries<'a, I>(formats: I, registry: &PluginRegistry) -> Result<String, RenderError>
where
    I: IntoIterator<Item = &'a FormatDescriptor>,
{
    let lines = formats
        .into_iter()
        .map(|format| render_entry(format, registry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lines.join("\n"))
}

/// Collects every unregistered plugin reference instead of stopping at the first
pub fn check_formats<'a, I>(formats: I, registry: &PluginRegistry) -> Vec<RenderError>
where
    I: IntoIterator<Item = &'a FormatDescriptor>,
{
    formats
        .into_iter()
        .flat_map(move |format| {
            format
                .priority
                .iter()
                .filter_map(move |name| plugin_reference(name, format, registry).err())
        })
        .collect()
}

/// Bullet list of all registered plugins, sorted by name
pub fn render_plugin_list(registry: &PluginRegistry) -> String {
    registry
        .iter()
        .map(|provider| format!("- :mod:`{} <{}>`", provider.name, provider.module_name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PluginProvider;
    use proptest::prelude::*;

    fn registry() -> PluginRegistry {
        [
            PluginProvider::new("pillow", "imageio.plugins.pillow"),
            PluginProvider::new("tifffile", "imageio.plugins.tifffile_v3"),
            PluginProvider::new("PNG-PIL", "imageio.plugins.pillow_legacy"),
            PluginProvider::new("pyav", "imageio.plugins.pyav"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn png_with_name() {
        let registry: PluginRegistry =
            [PluginProvider::new("pillow", "imageio.plugins.pillow")].into_iter().collect();
        let format = FormatDescriptor::new(".png")
            .with_name("Portable Network Graphics")
            .with_priority(["pillow"]);

        assert_eq!(
            render_entry(&format, &registry).unwrap(),
            "- **.png** (Portable Network Graphics): :mod:`pillow <imageio.plugins.pillow>`"
        );
    }

    #[test]
    fn freeimage_plugin_without_registry() {
        let format = FormatDescriptor::new(".jp2").with_priority(["JP2-FI"]);

        let line = render_entry(&format, &PluginRegistry::new()).unwrap();
        assert_eq!(
            line,
            "- **.jp2**: `JP2-FI <https://github.com/imageio/imageio-freeimage>`_"
        );
    }

    #[test]
    fn unregistered_plugin_fails() {
        let format = FormatDescriptor::new(".xyz").with_priority(["pillow", "ghost"]);

        let err = render_entry(&format, &registry()).unwrap_err();
        assert_eq!(
            err,
            RenderError::UnregisteredPlugin {
                plugin: "ghost".to_string(),
                extension: ".xyz".to_string(),
            }
        );
        assert!(err.to_string().contains("`ghost`"));
    }

    #[test]
    fn registered_name_wins_over_suffix() {
        let registry: PluginRegistry =
            [PluginProvider::new("TIFF-FI", "imageio.plugins.freeimage")].into_iter().collect();
        let format = FormatDescriptor::new(".tif").with_priority(["TIFF-FI"]);

        assert_eq!(
            render_entry(&format, &registry).unwrap(),
            "- **.tif**: :mod:`TIFF-FI <imageio.plugins.freeimage>`"
        );
    }

    #[test]
    fn external_link_label() {
        let format = FormatDescriptor::new(".mp4")
            .with_name("MPEG-4 Part 14")
            .with_link("https://en.wikipedia.org/wiki/MPEG-4_Part_14")
            .with_priority(["pyav"]);

        assert_eq!(
            render_entry(&format, &registry()).unwrap(),
            "- **.mp4** (`MPEG-4 Part 14 <https://en.wikipedia.org/wiki/MPEG-4_Part_14>`_): \
             :mod:`pyav <imageio.plugins.pyav>`"
        );
    }

    #[test]
    fn external_link_without_name() {
        let format = FormatDescriptor::new(".npz")
            .with_link("https://numpy.org/doc/stable/reference/generated/numpy.savez.html")
            .with_priority(["JPEG-FI"]);

        let line = render_entry(&format, &registry()).unwrap();
        assert!(line.starts_with(
            "- **.npz** (`.npz <https://numpy.org/doc/stable/reference/generated/numpy.savez.html>`_): "
        ));
    }

    #[test]
    fn empty_priority() {
        let format = FormatDescriptor::new(".raw").with_name("Raw");
        assert_eq!(render_entry(&format, &registry()).unwrap(), "- **.raw** (Raw): ");
    }

    #[test]
    fn mixed_priority_keeps_order_and_duplicates() {
        let format = FormatDescriptor::new(".png")
            .with_priority(["pillow", "PNG-FI", "PNG-PIL", "pillow"]);

        let line = render_entry(&format, &registry()).unwrap();
        assert_eq!(
            line,
            "- **.png**: :mod:`pillow <imageio.plugins.pillow>`, \
             `PNG-FI <https://github.com/imageio/imageio-freeimage>`_, \
             :mod:`PNG-PIL <imageio.plugins.pillow_legacy>`, \
             :mod:`pillow <imageio.plugins.pillow>`"
        );
    }

    #[test]
    fn entries_one_per_line() {
        let formats = vec![
            FormatDescriptor::new(".png").with_priority(["pillow"]),
            FormatDescriptor::new(".tif").with_priority(["tifffile", "TIFF-FI"]),
        ];

        let out = render_entries(&formats, &registry()).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.lines().next().unwrap().starts_with("- **.png**"));
    }

    #[test]
    fn entries_fail_on_first_bad_format() {
        let formats = vec![
            FormatDescriptor::new(".png").with_priority(["pillow"]),
            FormatDescriptor::new(".a").with_priority(["ghost"]),
            FormatDescriptor::new(".b").with_priority(["phantom"]),
        ];

        let err = render_entries(&formats, &registry()).unwrap_err();
        assert!(matches!(err, RenderError::UnregisteredPlugin { ref plugin, .. } if plugin == "ghost"));
    }

    #[test]
    fn check_reports_all_violations() {
        let formats = vec![
            FormatDescriptor::new(".png").with_priority(["pillow", "PNG-FI"]),
            FormatDescriptor::new(".a").with_priority(["ghost", "pillow", "phantom"]),
            FormatDescriptor::new(".b").with_priority(["spook"]),
        ];

        let errors = check_formats(&formats, &registry());
        let plugins: Vec<_> = errors
            .iter()
            .map(|e| match e {
                RenderError::UnregisteredPlugin { plugin, .. } => plugin.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(plugins, vec!["ghost", "phantom", "spook"]);
    }

    #[test]
    fn plugin_list_sorted() {
        let out = render_plugin_list(&registry());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "- :mod:`PNG-PIL <imageio.plugins.pillow_legacy>`");
        assert_eq!(lines[3], "- :mod:`tifffile <imageio.plugins.tifffile_v3>`");
    }

    fn identifier() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("pillow".to_string()),
            Just("tifffile".to_string()),
            Just("pyav".to_string()),
            "[A-Z]{2,5}-FI",
        ]
    }

    proptest! {
        #[test]
        fn references_follow_priority(priority in prop::collection::vec(identifier(), 0..8)) {
            let format = FormatDescriptor::new(".ext").with_priority(priority.clone());
            let registry = registry();

            let line = render_entry(&format, &registry).unwrap();
            prop_assert!(line.contains(".ext"));

            // Each reference appears after the previous one
            let mut cursor = 0;
            for name in &priority {
                let reference = plugin_reference(name, &format, &registry).unwrap();
                let found = line[cursor..].find(&reference);
                prop_assert!(found.is_some(), "missing {} in {}", reference, line);
                cursor += found.unwrap() + reference.len();
            }
        }

        #[test]
        fn rendering_is_idempotent(
            priority in prop::collection::vec(identifier(), 0..8),
            name in proptest::option::of("[A-Za-z ]{1,20}"),
        ) {
            let mut format = FormatDescriptor::new(".ext").with_priority(priority);
            format.name = name;
            let registry = registry();

            prop_assert_eq!(
                render_entry(&format, &registry),
                render_entry(&format, &registry)
            );
        }

        #[test]
        fn unknown_plain_identifier_always_fails(name in "[a-z]{3,10}") {
            prop_assume!(!registry().contains(&name));
            let format = FormatDescriptor::new(".ext").with_priority(["pillow".to_string(), name.clone()]);

            let result = render_entry(&format, &registry());
            prop_assert_eq!(
                result,
                Err(RenderError::UnregisteredPlugin { plugin: name, extension: ".ext".to_string() })
            );
        }
    }
}
