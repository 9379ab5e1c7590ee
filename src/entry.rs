//! The pipeline's data model: one extracted icon file.

/// A single icon extracted from the archive: its relative output path
/// (`/`-joined) and raw bytes. Immutable once produced by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFile {
    pub path: String,
    pub contents: Vec<u8>,
}

/// Strip the archive's single top-level wrapper directory from every path.
///
/// Drops everything up to and including the first `/`. A path with no
/// separator becomes the empty string; that edge is accepted as-is rather
/// than validated, since the source archives always carry a wrapper
/// directory.
pub fn strip_root(icons: Vec<IconFile>) -> Vec<IconFile> {
    icons
        .into_iter()
        .map(|icon| IconFile {
            path: icon
                .path
                .split_once('/')
                .map(|(_, rest)| rest.to_string())
                .unwrap_or_default(),
            contents: icon.contents,
        })
        .collect()
}
