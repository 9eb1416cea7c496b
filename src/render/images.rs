//! Standard example image listing

use crate::domain::ExampleImage;

/// Images ordered by extension, then by stem
pub fn sorted_images(images: &[ExampleImage]) -> Vec<&ExampleImage> {
    let mut sorted: Vec<_> = images.iter().collect();
    sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    sorted
}

/// One bullet per image, linking into `base_url`
pub fn render_images(images: &[ExampleImage], base_url: &str) -> String {
    sorted_images(images)
        .into_iter()
        .map(|image| {
            let line = format!("- `{} <{}{}>`_", image.name, base_url, image.name);
            if image.description.is_empty() {
                line
            } else {
                format!("{}: {}", line, image.description)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
