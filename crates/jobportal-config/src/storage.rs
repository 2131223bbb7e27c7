//! Object storage (S3-compatible) configuration and upload limits.
//!
//! # Environment Variables
//!
//! - `STORAGE_ENDPOINT`: host and port of the object store (default: `localhost:9000`)
//! - `STORAGE_ACCESS_KEY` / `STORAGE_SECRET_KEY`: credentials (default: `minioadmin`)
//! - `STORAGE_BUCKET`: bucket for uploaded files (default: `jobportal-files`)
//! - `STORAGE_USE_SSL`: connect over TLS (default: `false`)
//! - `MAX_RESUME_SIZE_MB`: resume upload limit (default: `5`)
//! - `MAX_IMAGE_SIZE_MB`: image upload limit (default: `2`)
//! - `ALLOWED_IMAGE_TYPES`: comma-separated extensions (default: `jpg,jpeg,png,webp`)
//! - `ALLOWED_DOCUMENT_TYPES`: comma-separated extensions (default: `pdf,doc,docx`)

use serde::Serialize;

use crate::resolve::{Resolver, split_list};

const DEFAULT_IMAGE_TYPES: &str = "jpg,jpeg,png,webp";
const DEFAULT_DOCUMENT_TYPES: &str = "pdf,doc,docx";

const BYTES_PER_MB: u64 = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StorageConfig {
    pub endpoint: String,
    #[serde(skip_serializing)]
    pub access_key: String,
    #[serde(skip_serializing)]
    pub secret_key: String,
    pub bucket: String,
    pub use_tls: bool,
    pub max_resume_size_mb: i64,
    pub max_image_size_mb: i64,
    pub allowed_image_types: Vec<String>,
    pub allowed_document_types: Vec<String>,
}

impl StorageConfig {
    pub(crate) fn resolve(env: &Resolver<'_>) -> Self {
        Self {
            endpoint: env.string("STORAGE_ENDPOINT", "localhost:9000"),
            access_key: env.string("STORAGE_ACCESS_KEY", "minioadmin"),
            secret_key: env.string("STORAGE_SECRET_KEY", "minioadmin"),
            bucket: env.string("STORAGE_BUCKET", "jobportal-files"),
            use_tls: env.boolean("STORAGE_USE_SSL", false),
            max_resume_size_mb: env.integer("MAX_RESUME_SIZE_MB", 5),
            max_image_size_mb: env.integer("MAX_IMAGE_SIZE_MB", 2),
            allowed_image_types: env.list("ALLOWED_IMAGE_TYPES", DEFAULT_IMAGE_TYPES),
            allowed_document_types: env.list("ALLOWED_DOCUMENT_TYPES", DEFAULT_DOCUMENT_TYPES),
        }
    }

    /// Resume upload limit in bytes. A negative setting allows nothing.
    pub fn max_resume_size_bytes(&self) -> u64 {
        megabytes_to_bytes(self.max_resume_size_mb)
    }

    /// Image upload limit in bytes. A negative setting allows nothing.
    pub fn max_image_size_bytes(&self) -> u64 {
        megabytes_to_bytes(self.max_image_size_mb)
    }

    /// Checks a file extension against `allowed_image_types`.
    ///
    /// Matching ignores case and a leading `.`, so `".PNG"` matches `png`.
    pub fn allows_image_type(&self, extension: &str) -> bool {
        contains_extension(&self.allowed_image_types, extension)
    }

    /// Checks a file extension against `allowed_document_types`.
    pub fn allows_document_type(&self, extension: &str) -> bool {
        contains_extension(&self.allowed_document_types, extension)
    }
}

fn megabytes_to_bytes(mb: i64) -> u64 {
    u64::try_from(mb).unwrap_or(0).saturating_mul(BYTES_PER_MB)
}

fn contains_extension(allowed: &[String], extension: &str) -> bool {
    let extension = extension.trim().trim_start_matches('.');
    allowed.iter().any(|a| a.eq_ignore_ascii_case(extension))
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            endpoint: "localhost:9000".into(),
            access_key: "minioadmin".into(),
            secret_key: "minioadmin".into(),
            bucket: "jobportal-files".into(),
            use_tls: false,
            max_resume_size_mb: 5,
            max_image_size_mb: 2,
            allowed_image_types: split_list(DEFAULT_IMAGE_TYPES),
            allowed_document_types: split_list(DEFAULT_DOCUMENT_TYPES),
        }
    }
}
