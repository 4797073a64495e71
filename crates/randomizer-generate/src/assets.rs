use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::GenerationError;

/// Reads line-oriented word-list assets from a directory.
#[derive(Debug, Clone)]
pub struct AssetsLoader {
    root: PathBuf,
}

impl AssetsLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Loader over the word lists shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(bundled_root())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Trimmed, non-empty lines of `relative`, in file order.
    pub fn load_lines(&self, relative: &str) -> Result<Vec<String>, GenerationError> {
        Self::read_lines(&self.root.join(relative))
    }

    fn read_lines(path: &Path) -> Result<Vec<String>, GenerationError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                if err.kind() == std::io::ErrorKind::NotFound {
                    return Err(GenerationError::MissingAsset {
                        path: path.to_path_buf(),
                    });
                }
                return Err(GenerationError::Asset(format!(
                    "failed to read asset {}: {}",
                    path.display(),
                    err
                )));
            }
        };

        Ok(contents
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect())
    }
}

pub fn bundled_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}
