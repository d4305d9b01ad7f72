use chrono::{DateTime, Utc};
use tracing::warn;

use crate::multimedia::application::domain::entities::{is_plain_file_name, MediaCategory};
use crate::shared::config::{parse_or, ConfigError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Unsupported upload kind: {0}")]
    UnsupportedKind(String),

    #[error("Unsupported file type {mime_type} for {category}")]
    UnsupportedType {
        mime_type: String,
        category: MediaCategory,
    },

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    PayloadTooLarge { max_bytes: u64, actual_bytes: u64 },

    #[error("Invalid file name")]
    InvalidFileName,

    #[error("File is empty")]
    EmptyPayload,
}

/// Where an accepted upload goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedUpload {
    pub category: MediaCategory,
    pub file_name: String,
}

impl AcceptedUpload {
    /// `{unix_millis}-{file_name}`, the name the file is stored under.
    pub fn stored_file_name(&self, at: DateTime<Utc>) -> String {
        format!("{:013}-{}", at.timestamp_millis(), self.file_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            max_file_name_len: Self::DEFAULT_MAX_FILE_NAME_LEN,
        }
    }
}

impl UploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
    /// Longest name most file systems accept for one path segment.
    pub const MAX_STORED_NAME_LEN: usize = 255;
    /// Thirteen-digit millisecond timestamp plus the `-` separator.
    pub const STORED_NAME_PREFIX_LEN: usize = 14;
    pub const DEFAULT_MAX_FILE_NAME_LEN: usize =
        Self::MAX_STORED_NAME_LEN - Self::STORED_NAME_PREFIX_LEN;

    pub const IMAGE_MIME_TYPES: &'static [&'static str] = &[
        "image/jpeg",
        "image/jpg",
        "image/png",
        "image/gif",
        "image/webp",
    ];
    pub const DOCUMENT_MIME_TYPES: &'static [&'static str] = &[
        "application/pdf",
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "text/plain",
    ];
    pub const CODE_MIME_TYPES: &'static [&'static str] = &[
        "text/javascript",
        "text/typescript",
        "text/css",
        "text/html",
        "application/json",
        "text/xml",
        "text/markdown",
    ];

    /// Env var: `MEDIA_MAX_FILE_SIZE_BYTES` (default 10 MiB)
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_file_size_bytes = parse_or(
            "MEDIA_MAX_FILE_SIZE_BYTES",
            Self::DEFAULT_MAX_FILE_SIZE_BYTES,
        )?;

        if max_file_size_bytes == 0 {
            warn!("MEDIA_MAX_FILE_SIZE_BYTES is 0, falling back to default");
            return Ok(Self::default());
        }

        Ok(Self {
            max_file_size_bytes,
            ..Self::default()
        })
    }

    /// `image`, `document` and `code` as sent by the admin client; the
    /// plural directory names are accepted as well.
    pub fn category_for(&self, declared_kind: &str) -> Result<MediaCategory, UploadError> {
        match declared_kind.trim().to_ascii_lowercase().as_str() {
            "image" | "images" => Ok(MediaCategory::Images),
            "document" | "documents" => Ok(MediaCategory::Documents),
            "code" => Ok(MediaCategory::Code),
            other => Err(UploadError::UnsupportedKind(other.to_string())),
        }
    }

    /// Images accept image types only. Documents and code share one list.
    pub fn allows(&self, category: MediaCategory, mime_type: &str) -> bool {
        match category {
            MediaCategory::Images => Self::IMAGE_MIME_TYPES.contains(&mime_type),
            MediaCategory::Documents | MediaCategory::Code => {
                Self::DOCUMENT_MIME_TYPES.contains(&mime_type)
                    || Self::CODE_MIME_TYPES.contains(&mime_type)
            }
        }
    }

    pub fn check_size(&self, actual_bytes: u64) -> Result<(), UploadError> {
        if actual_bytes > self.max_file_size_bytes {
            return Err(UploadError::PayloadTooLarge {
                max_bytes: self.max_file_size_bytes,
                actual_bytes,
            });
        }
        Ok(())
    }

    /// Full check of one upload. Size is checked before type so an oversize
    /// file reports the size problem first.
    pub fn validate(
        &self,
        declared_kind: &str,
        mime_type: &str,
        file_name: &str,
        size_bytes: u64,
    ) -> Result<AcceptedUpload, UploadError> {
        let category = self.category_for(declared_kind)?;

        if size_bytes == 0 {
            return Err(UploadError::EmptyPayload);
        }
        self.check_size(size_bytes)?;

        let mime_type = mime_type.trim().to_ascii_lowercase();
        if !self.allows(category, &mime_type) {
            return Err(UploadError::UnsupportedType {
                mime_type,
                category,
            });
        }

        let file_name = file_name.trim();
        let max_len = self.max_file_name_len.min(Self::DEFAULT_MAX_FILE_NAME_LEN);
        if file_name.len() > max_len || !is_plain_file_name(file_name) {
            return Err(UploadError::InvalidFileName);
        }

        Ok(AcceptedUpload {
            category,
            file_name: file_name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> UploadPolicy {
        UploadPolicy::default()
    }

    #[test]
    fn accepts_png_image() {
        let accepted = policy()
            .validate("image", "image/png", "diagram.png", 2048)
            .unwrap();
        assert_eq!(accepted.category, MediaCategory::Images);
        assert_eq!(accepted.file_name, "diagram.png");
    }

    #[test]
    fn rejects_file_over_ten_mebibytes() {
        let err = policy()
            .validate("image", "image/png", "huge.png", 10 * 1024 * 1024 + 1)
            .unwrap_err();
        assert_eq!(
            err,
            UploadError::PayloadTooLarge {
                max_bytes: 10 * 1024 * 1024,
                actual_bytes: 10 * 1024 * 1024 + 1
            }
        );
    }

    #[test]
    fn accepts_exactly_the_limit() {
        assert!(policy()
            .validate("document", "application/pdf", "cv.pdf", 10 * 1024 * 1024)
            .is_ok());
    }

    #[test]
    fn rejects_pdf_declared_as_image() {
        let err = policy()
            .validate("image", "application/pdf", "cv.pdf", 100)
            .unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedType { .. }));
    }

    #[test]
    fn documents_and_code_share_allow_list() {
        let p = policy();
        assert!(p.allows(MediaCategory::Documents, "text/markdown"));
        assert!(p.allows(MediaCategory::Code, "application/pdf"));
        assert!(!p.allows(MediaCategory::Code, "image/png"));
        assert!(!p.allows(MediaCategory::Documents, "application/zip"));
    }

    #[test]
    fn rejects_unknown_kind() {
        assert_eq!(
            policy().validate("video", "video/mp4", "a.mp4", 10),
            Err(UploadError::UnsupportedKind("video".to_string()))
        );
    }

    #[test]
    fn rejects_path_like_and_empty_names() {
        let p = policy();
        assert_eq!(
            p.validate("image", "image/png", "../a.png", 10),
            Err(UploadError::InvalidFileName)
        );
        assert_eq!(
            p.validate("image", "image/png", "", 10),
            Err(UploadError::InvalidFileName)
        );
        let long = format!("{}.png", "a".repeat(300));
        assert_eq!(
            p.validate("image", "image/png", &long, 10),
            Err(UploadError::InvalidFileName)
        );
    }

    #[test]
    fn name_limit_leaves_room_for_timestamp_prefix() {
        let p = policy();
        let fits = format!("{}.png", "a".repeat(237));
        let too_long = format!("{}.png", "a".repeat(238));
        assert_eq!(fits.len(), 241);
        assert_eq!(too_long.len(), 242);

        let accepted = p.validate("image", "image/png", &fits, 10).unwrap();
        assert_eq!(
            accepted.stored_file_name(Utc::now()).len(),
            UploadPolicy::MAX_STORED_NAME_LEN
        );
        assert_eq!(
            p.validate("image", "image/png", &too_long, 10),
            Err(UploadError::InvalidFileName)
        );
    }

    #[test]
    fn configured_name_limit_cannot_exceed_stored_name_room() {
        let p = UploadPolicy {
            max_file_name_len: 255,
            ..UploadPolicy::default()
        };
        let name = format!("{}.png", "a".repeat(246));
        assert_eq!(
            p.validate("image", "image/png", &name, 10),
            Err(UploadError::InvalidFileName)
        );
    }

    #[test]
    fn rejects_empty_payload() {
        assert_eq!(
            policy().validate("image", "image/png", "a.png", 0),
            Err(UploadError::EmptyPayload)
        );
    }
}
