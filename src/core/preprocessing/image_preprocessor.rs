use anyhow::Result;
use image::{imageops, DynamicImage, GrayImage};

use crate::core::models::{PreprocessedImage, ScanSettings};
use crate::core::preprocessing::morphology::close;
use crate::core::preprocessing::otsu_threshold::{binarize_at_level, otsu_threshold_level};
use crate::global_constants::{DEFAULT_BLUR_SIGMA, DEFAULT_CLOSING_KERNEL_SIZE, LOG_TAG_PREPROCESS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePreprocessor {
    blur_sigma: f32,
    closing_kernel_size: u32,
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new(DEFAULT_BLUR_SIGMA, DEFAULT_CLOSING_KERNEL_SIZE)
    }
}

impl ImagePreprocessor {
    pub fn new(blur_sigma: f32, closing_kernel_size: u32) -> Self {
        Self {
            blur_sigma,
            closing_kernel_size,
        }
    }

    pub fn from_settings(settings: &ScanSettings) -> Self {
        Self::new(settings.blur_sigma, settings.closing_kernel_size)
    }

    /// Never fails: when binarization is impossible the caller gets the
    /// original image back, tagged with the reason.
    pub fn preprocess(&self, image: &DynamicImage) -> PreprocessedImage {
        log::info!(
            "{} Preprocessing {}x{} image",
            LOG_TAG_PREPROCESS,
            image.width(),
            image.height()
        );

        match self.binarize_for_ocr(image) {
            Ok(binary_image) => PreprocessedImage::Binarized(DynamicImage::ImageLuma8(binary_image)),
            Err(error) => {
                log::warn!(
                    "{} Preprocessing failed, falling back to original image: {:#}",
                    LOG_TAG_PREPROCESS,
                    error
                );
                PreprocessedImage::Unprocessed {
                    original: image.clone(),
                    reason: format!("{:#}", error),
                }
            }
        }
    }

    fn binarize_for_ocr(&self, image: &DynamicImage) -> Result<GrayImage> {
        self.ensure_processable(image)?;

        let grayscale = image.to_luma8();
        let smoothed = self.suppress_sensor_noise(grayscale);

        let threshold_level = otsu_threshold_level(&smoothed);
        log::debug!("{} Otsu threshold level: {}", LOG_TAG_PREPROCESS, threshold_level);

        let binary_image = binarize_at_level(&smoothed, threshold_level);

        Ok(close(&binary_image, self.closing_kernel_size))
    }

    fn ensure_processable(&self, image: &DynamicImage) -> Result<()> {
        let (width, height) = (image.width(), image.height());

        if width == 0 || height == 0 {
            anyhow::bail!("image has no pixels ({}x{})", width, height);
        }

        if self.closing_kernel_size == 0 {
            anyhow::bail!("closing kernel size must be at least 1");
        }

        if width < self.closing_kernel_size || height < self.closing_kernel_size {
            anyhow::bail!(
                "image {}x{} is smaller than the {}x{} closing kernel",
                width,
                height,
                self.closing_kernel_size,
                self.closing_kernel_size
            );
        }

        if !self.blur_sigma.is_finite() || self.blur_sigma < 0.0 {
            anyhow::bail!("invalid blur sigma {}", self.blur_sigma);
        }

        Ok(())
    }

    fn suppress_sensor_noise(&self, grayscale: GrayImage) -> GrayImage {
        if self.blur_sigma == 0.0 {
            return grayscale;
        }

        imageops::blur(&grayscale, self.blur_sigma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    fn build_dark_text_on_light_card() -> DynamicImage {
        let card = RgbImage::from_fn(64, 32, |x, y| {
            let inside_glyph = (10..54).contains(&x) && (12..20).contains(&y);
            if inside_glyph {
                Rgb([20, 25, 30])
            } else {
                Rgb([235, 230, 220])
            }
        });
        DynamicImage::ImageRgb8(card)
    }

    #[test]
    fn test_preprocess_produces_binary_image_with_same_dimensions() {
        let preprocessor = ImagePreprocessor::default();
        let card = build_dark_text_on_light_card();

        let outcome = preprocessor.preprocess(&card);

        assert!(!outcome.is_degraded());
        let binary = outcome.image().to_luma8();
        assert_eq!(binary.dimensions(), (64, 32));
        assert!(binary.pixels().all(|pixel| pixel[0] == 0 || pixel[0] == 255));
    }

    #[test]
    fn test_preprocess_keeps_text_dark_and_background_light() {
        let preprocessor = ImagePreprocessor::default();

        let outcome = preprocessor.preprocess(&build_dark_text_on_light_card());

        let binary = outcome.image().to_luma8();
        assert_eq!(binary.get_pixel(30, 16)[0], 0);
        assert_eq!(binary.get_pixel(2, 2)[0], 255);
        assert_eq!(binary.get_pixel(60, 28)[0], 255);
    }

    #[test]
    fn test_preprocess_does_not_mutate_input() {
        let preprocessor = ImagePreprocessor::default();
        let card = build_dark_text_on_light_card();
        let snapshot = card.clone();

        let _ = preprocessor.preprocess(&card);

        assert_eq!(card, snapshot);
    }

    #[test]
    fn test_preprocess_falls_back_on_empty_image() {
        let preprocessor = ImagePreprocessor::default();
        let empty = DynamicImage::new_rgb8(0, 0);

        let outcome = preprocessor.preprocess(&empty);

        assert!(outcome.is_degraded());
        assert!(outcome.degradation_reason().unwrap().contains("no pixels"));
    }

    #[test]
    fn test_preprocess_falls_back_to_original_when_smaller_than_kernel() {
        let preprocessor = ImagePreprocessor::new(1.1, 3);
        let tiny = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 5, Rgb([10, 200, 30])));

        let outcome = preprocessor.preprocess(&tiny);

        assert!(outcome.is_degraded());
        assert_eq!(outcome.image(), &tiny);
    }

    #[test]
    fn test_preprocess_falls_back_on_invalid_sigma() {
        let preprocessor = ImagePreprocessor::new(f32::NAN, 2);

        let outcome = preprocessor.preprocess(&build_dark_text_on_light_card());

        assert!(outcome.is_degraded());
    }

    #[test]
    fn test_preprocess_without_blur_still_binarizes() {
        let preprocessor = ImagePreprocessor::new(0.0, 2);
        let gray = DynamicImage::ImageLuma8(GrayImage::from_fn(8, 8, |x, _| {
            if x < 4 {
                Luma([10])
            } else {
                Luma([240])
            }
        }));

        let outcome = preprocessor.preprocess(&gray);

        let binary = outcome.image().to_luma8();
        assert_eq!(binary.get_pixel(0, 0)[0], 0);
        assert_eq!(binary.get_pixel(7, 7)[0], 255);
    }

    #[test]
    fn test_preprocess_is_deterministic() {
        let preprocessor = ImagePreprocessor::default();
        let card = build_dark_text_on_light_card();

        let first = preprocessor.preprocess(&card);
        let second = preprocessor.preprocess(&card);

        assert_eq!(first.image(), second.image());
    }

    #[test]
    fn test_from_settings_copies_preprocessing_values() {
        let settings = ScanSettings {
            blur_sigma: 0.5,
            closing_kernel_size: 3,
            ..ScanSettings::default()
        };

        let preprocessor = ImagePreprocessor::from_settings(&settings);

        assert_eq!(preprocessor, ImagePreprocessor::new(0.5, 3));
    }
}
