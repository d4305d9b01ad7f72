use std::path::PathBuf;

use crate::shared::config::optional;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStoreConfig {
    pub data_file: PathBuf,
}

impl DocumentStoreConfig {
    pub const DEFAULT_DATA_FILE: &'static str = "data/portfolio.json";

    /// `PORTFOLIO_DATA_FILE`, falling back to `data/portfolio.json`.
    pub fn from_env() -> Self {
        let data_file =
            optional("PORTFOLIO_DATA_FILE").unwrap_or_else(|| Self::DEFAULT_DATA_FILE.to_string());

        Self {
            data_file: PathBuf::from(data_file),
        }
    }
}
