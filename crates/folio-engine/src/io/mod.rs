use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Post;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Posts directory not found: {0}")]
    NotFound(PathBuf),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse post file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// File extension of post documents.
pub const POST_EXTENSION: &str = "toml";

/// Check that a directory can hold posts before loading from it
pub fn validate_posts_dir(posts_root: &Path) -> Result<(), IoError> {
    if !posts_root.exists() {
        return Err(IoError::NotFound(posts_root.to_path_buf()));
    }
    if !posts_root.is_dir() {
        return Err(IoError::NotADirectory(posts_root.to_path_buf()));
    }
    Ok(())
}

/// Parse a single post from TOML text; `path` is only used for error reporting
pub fn parse_post(text: &str, path: &Path) -> Result<Post, IoError> {
    toml::from_str(text).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse one post file
pub fn read_post(path: &Path) -> Result<Post, IoError> {
    let text = fs::read_to_string(path)?;
    parse_post(&text, path)
}

/// Scan for post files directly inside the posts directory, sorted by file name
pub fn scan_post_files(posts_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_posts_dir(posts_root)?;

    let mut files = Vec::new();
    for entry in fs::read_dir(posts_root)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == POST_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every post in the directory.
///
/// File-name order is display order, so prefixes such as `01-`, `02-` control
/// where a post appears. The first malformed file aborts loading.
pub fn load_posts(posts_root: &Path) -> Result<Vec<Post>, IoError> {
    let posts = scan_post_files(posts_root)?
        .iter()
        .map(|path| read_post(path))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("loaded {} posts from {}", posts.len(), posts_root.display());
    Ok(posts)
}
