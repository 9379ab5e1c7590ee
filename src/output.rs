//! Output tree writer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use tokio::task::JoinSet;
use tracing::debug;

use crate::entry::IconFile;

/// Replace `root` with the given icon tree.
///
/// Recursively deletes `root` if it exists (so stale files from earlier
/// runs never survive), recreates it, then writes every icon under
/// `root/<icon.path>` concurrently. Parent directories are created with
/// idempotent `create_dir_all`, so sibling writes racing on a shared
/// parent are harmless. The whole call fails if any single write fails.
pub async fn write_tree(icons: &[IconFile], root: &Path) -> Result<()> {
    match fs::remove_dir_all(root).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to clear {}", root.display()));
        }
    }
    fs::create_dir_all(root)
        .await
        .with_context(|| format!("Failed to create {}", root.display()))?;

    let mut writes = JoinSet::new();
    for icon in icons {
        let dest = root.join(&icon.path);
        let contents = icon.contents.clone();
        writes.spawn(async move { write_one(dest, contents).await });
    }

    while let Some(result) = writes.join_next().await {
        result.context("Write task panicked")??;
    }

    debug!(icons = icons.len(), root = %root.display(), "output tree written");
    Ok(())
}

async fn write_one(dest: PathBuf, contents: Vec<u8>) -> Result<()> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(&dest, &contents)
        .await
        .with_context(|| format!("Failed to write {}", dest.display()))
}
