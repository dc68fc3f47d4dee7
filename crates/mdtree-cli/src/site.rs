//! Static site generation: asset copying and page rendering.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use mdtree::{extract_title, Converter};

/// Template placeholder replaced by the page title
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Template placeholder replaced by the rendered page body
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Replace `to` with a fresh copy of the tree under `from`
pub fn copy_static(from: &Path, to: &Path) -> Result<()> {
    if to.exists() {
        fs::remove_dir_all(to)
            .with_context(|| format!("Failed to remove {}", to.display()))?;
    }
    fs::create_dir_all(to).with_context(|| format!("Failed to create {}", to.display()))?;

    copy_tree(from, to)
}

fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    let entries =
        fs::read_dir(from).with_context(|| format!("Failed to read {}", from.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read {}", from.display()))?;
        let src = entry.path();
        let dst = to.join(entry.file_name());

        if src.is_file() {
            info!(src = %src.display(), dst = %dst.display(), "copying");
            fs::copy(&src, &dst)
                .with_context(|| format!("Failed to copy {} to {}", src.display(), dst.display()))?;
        } else {
            fs::create_dir(&dst)
                .with_context(|| format!("Failed to create {}", dst.display()))?;
            copy_tree(&src, &dst)?;
        }
    }

    Ok(())
}

/// Substitute the title and content placeholders in a template
pub fn render_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Render the Markdown page at `from` through `template` into `dest`.
///
/// Fails if `dest` already exists.
pub fn generate_page(
    converter: &Converter,
    from: &Path,
    template: &Path,
    dest: &Path,
) -> Result<()> {
    info!(
        from = %from.display(),
        dest = %dest.display(),
        template = %template.display(),
        "generating page"
    );

    let markdown =
        fs::read_to_string(from).with_context(|| format!("Failed to read {}", from.display()))?;
    let template_contents = fs::read_to_string(template)
        .with_context(|| format!("Failed to read {}", template.display()))?;

    let html = converter
        .to_html(&markdown)
        .with_context(|| format!("Failed to convert {}", from.display()))?;
    let title = extract_title(&markdown)
        .with_context(|| format!("Failed to find a title in {}", from.display()))?;

    let page = render_template(&template_contents, &title, &html);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .with_context(|| format!("Failed to create {}", dest.display()))?;
    file.write_all(page.as_bytes())
        .with_context(|| format!("Failed to write {}", dest.display()))?;

    Ok(())
}
