use std::path::Path;

use anyhow::{Context, Result};
use image::DynamicImage;

use crate::core::models::{ImageFormat, ScanError};
use crate::global_constants::LOG_TAG_UPLOAD;

#[derive(Clone)]
pub struct ImageUpload {
    pub file_name: String,
    raw_bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("byte_count", &self.raw_bytes.len())
            .finish()
    }
}

impl ImageUpload {
    pub fn build_from_bytes(file_name: impl Into<String>, raw_bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();

        log::debug!(
            "{} received upload {:?} ({} bytes)",
            LOG_TAG_UPLOAD,
            file_name,
            raw_bytes.len()
        );

        Self {
            file_name,
            raw_bytes,
        }
    }

    pub fn read_from_path(path: &Path) -> Result<Self> {
        let raw_bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read image file {}", path.display()))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::build_from_bytes(file_name, raw_bytes))
    }

    pub fn extension(&self) -> Option<&str> {
        let (stem, extension) = self.file_name.rsplit_once('.')?;

        if stem.is_empty() || extension.is_empty() {
            return None;
        }

        Some(extension)
    }

    pub fn validate_format(&self) -> Result<ImageFormat, ScanError> {
        let extension = self.extension().unwrap_or_default();

        ImageFormat::from_extension(extension).ok_or_else(|| {
            log::warn!(
                "{} rejected {:?}: extension {:?} is not allowed",
                LOG_TAG_UPLOAD,
                self.file_name,
                extension
            );
            ScanError::UnsupportedFileType(extension.to_string())
        })
    }

    pub fn decode(&self) -> Result<DynamicImage, ScanError> {
        let decoded_image = image::load_from_memory(&self.raw_bytes)
            .map_err(|error| ScanError::Decode(error.to_string()))?;

        log::debug!(
            "{} decoded {:?} as {}x{} {:?}",
            LOG_TAG_UPLOAD,
            self.file_name,
            decoded_image.width(),
            decoded_image.height(),
            decoded_image.color()
        );

        Ok(decoded_image)
    }
}
