use anyhow::Result;
use image::DynamicImage;

use crate::core::models::OcrResult;

/// Recognizes a single uniform block of text. Implementations hold no
/// per-call state, so one instance may serve concurrent scans.
pub trait OcrService: Send + Sync {
    fn extract_text_from_image(&self, image: &DynamicImage) -> Result<OcrResult>;
}
