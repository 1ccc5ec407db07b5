use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use teamcal_core::export::ExportFormat;
use teamcal_core::store::Store;

pub fn run(store: &mut Store, format: ExportFormat, dir: &Path) -> Result<()> {
    let path = write(store, format, dir)?;
    println!("  {}", path.display().dimmed());
    Ok(())
}

/// Export the filtered events to `calendar.<ext>` inside `dir`.
pub fn write(store: &mut Store, format: ExportFormat, dir: &Path) -> Result<PathBuf> {
    let export = store.export(format)?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let path = dir.join(&export.file_name);
    std::fs::write(&path, &export.content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    store.announce_export(format);
    Ok(path)
}
