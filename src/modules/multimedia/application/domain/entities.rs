use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use utoipa::ToSchema;

/// Public prefix of every stored upload.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Images,
    Documents,
    Code,
}

impl MediaCategory {
    pub const ALL: [MediaCategory; 3] = [
        MediaCategory::Images,
        MediaCategory::Documents,
        MediaCategory::Code,
    ];

    /// Directory (and URL segment) the category is stored under.
    pub fn dir_name(&self) -> &'static str {
        match self {
            MediaCategory::Images => "images",
            MediaCategory::Documents => "documents",
            MediaCategory::Code => "code",
        }
    }

    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.dir_name() == name)
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaReferenceError {
    #[error("Not an upload reference: {0}")]
    Malformed(String),

    #[error("Unknown upload category: {0}")]
    UnknownCategory(String),

    #[error("Invalid file name in reference: {0}")]
    InvalidFileName(String),
}

/// A stored file, addressed as `/uploads/{category}/{file_name}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaReference {
    category: MediaCategory,
    file_name: String,
}

impl MediaReference {
    pub fn new(category: MediaCategory, file_name: impl Into<String>) -> Self {
        Self {
            category,
            file_name: file_name.into(),
        }
    }

    /// Parse a reference previously handed out by an upload. Anything that
    /// could step outside the category directory is refused.
    pub fn parse(url: &str) -> Result<Self, MediaReferenceError> {
        let malformed = || MediaReferenceError::Malformed(url.to_string());

        let rest = url
            .strip_prefix(UPLOADS_URL_PREFIX)
            .and_then(|r| r.strip_prefix('/'))
            .ok_or_else(malformed)?;
        let (category, file_name) = rest.split_once('/').ok_or_else(malformed)?;

        let category = MediaCategory::from_dir_name(category)
            .ok_or_else(|| MediaReferenceError::UnknownCategory(category.to_string()))?;

        if !is_plain_file_name(file_name) {
            return Err(MediaReferenceError::InvalidFileName(file_name.to_string()));
        }

        Ok(Self::new(category, file_name))
    }

    pub fn category(&self) -> MediaCategory {
        self.category
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn url(&self) -> String {
        format!(
            "{}/{}/{}",
            UPLOADS_URL_PREFIX,
            self.category.dir_name(),
            self.file_name
        )
    }
}

/// A single path component with no separators, dots-only names or control characters.
pub fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.chars().any(|c| c.is_control())
        && Path::new(name).file_name().and_then(|s| s.to_str()) == Some(name)
}

/// A file held by media storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredMedia {
    #[schema(example = "1714557600000-diagram.png")]
    pub name: String,

    #[schema(example = "/uploads/images/1714557600000-diagram.png")]
    pub url: String,

    pub size_bytes: u64,

    pub category: MediaCategory,
}

/// Size shown next to an attachment, e.g. `"2.50 MB"`.
pub fn human_readable_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}
