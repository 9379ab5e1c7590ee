//! Recursive archive walk collecting SVG entries.

use anyhow::{Context, Result, bail};

use crate::entry::IconFile;
use crate::paths::{parent_dir, rel_join};

use super::parser::Archive;
use super::structures::EntryRecord;

/// Maximum archive nesting depth.
///
/// The source archives nest two or three levels deep; the limit exists so
/// a self-referential or maliciously deep archive fails instead of
/// recursing without bound.
pub const MAX_NESTING: usize = 16;

/// Recursively collect every SVG entry of a zip archive.
///
/// Entries named `*.svg` become [`IconFile`]s at `join(base, name)`;
/// entries named `*.zip` are decoded and walked with the nested zip's
/// directory appended to `base`. Anything whose name contains `__MACOSX`
/// (a macOS archiver artifact) is skipped at every level.
///
/// Direct entries precede nested results; within each group the order is
/// whatever the archive's Central Directory enumerates, which callers
/// must not rely on.
///
/// # Errors
///
/// Returns an error if any level is not a valid zip, an entry fails to
/// decode, or nesting exceeds [`MAX_NESTING`].
pub fn walk(base: &str, archive_bytes: &[u8]) -> Result<Vec<IconFile>> {
    walk_level(base, archive_bytes, 0)
}

fn walk_level(base: &str, archive_bytes: &[u8], depth: usize) -> Result<Vec<IconFile>> {
    if depth > MAX_NESTING {
        bail!("Archive nesting exceeds {} levels", MAX_NESTING);
    }

    let archive = Archive::parse(archive_bytes)
        .with_context(|| format!("Failed to open archive at {base:?}"))?;

    let mut icons = Vec::new();

    for entry in archive.entries().iter().filter(|e| selected(e, ".svg")) {
        icons.push(IconFile {
            path: rel_join(base, &entry.name),
            contents: archive.read(entry)?,
        });
    }

    for entry in archive.entries().iter().filter(|e| selected(e, ".zip")) {
        let nested = archive.read(entry)?;
        let nested_base = rel_join(base, parent_dir(&entry.name));
        icons.extend(walk_level(&nested_base, &nested, depth + 1)?);
    }

    Ok(icons)
}

fn selected(entry: &EntryRecord, extension: &str) -> bool {
    !entry.is_directory && entry.name.ends_with(extension) && !entry.name.contains("__MACOSX")
}
