//! Page substitution command

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::render::{render_page, PageKind};
use crate::storage::LoadedRegistry;

pub fn run(
    output: &Output,
    loaded: &LoadedRegistry,
    docname: &str,
    file: Option<&Path>,
) -> Result<()> {
    let source = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read page: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read page from stdin")?;
            buf
        }
    };

    let kind = PageKind::from_docname(docname);
    match kind {
        Some(kind) => output.verbose_ctx("page", &format!("{} is a {:?} page", docname, kind)),
        None => output.verbose_ctx("page", &format!("{} has no substitutions", docname)),
    }

    let ctx = loaded.page_context();
    let rendered = render_page(docname, &source, &ctx)
        .with_context(|| format!("Failed to render page '{}'", docname))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "docname": docname,
            "substituted": kind.is_some(),
            "source": rendered,
        }));
    } else {
        // Source already carries its own trailing newline
        print!("{}", rendered);
    }

    Ok(())
}
