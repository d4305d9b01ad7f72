use std::path::PathBuf;

use crate::shared::config::optional;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalMediaStorageConfig {
    /// Directory holding `images/`, `documents/` and `code/`
    pub root: PathBuf,
}

impl Default for LocalMediaStorageConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(Self::DEFAULT_ROOT),
        }
    }
}

impl LocalMediaStorageConfig {
    pub const DEFAULT_ROOT: &'static str = "public/uploads";

    /// Env var: `UPLOADS_DIR`
    pub fn from_env() -> Self {
        optional("UPLOADS_DIR")
            .map(|root| Self {
                root: PathBuf::from(root),
            })
            .unwrap_or_default()
    }
}
