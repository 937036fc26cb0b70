use std::io::Write;

use anyhow::{Context, Result};
use image::DynamicImage;
use rusty_tesseract::{Args, Image as TesseractImage};

use crate::core::interfaces::adapters::OcrService;
use crate::core::models::{OcrResult, ScanSettings};
use crate::global_constants::LOG_TAG_OCR;

pub struct TesseractOcrService {
    args: Args,
}

impl TesseractOcrService {
    pub fn build(settings: &ScanSettings) -> Result<Self> {
        log::info!(
            "{} Initializing Tesseract OCR service (lang={}, psm={})",
            LOG_TAG_OCR,
            settings.tesseract_language,
            settings.page_segmentation_mode
        );

        Ok(Self {
            args: Self::build_tesseract_args(settings),
        })
    }

    fn build_tesseract_args(settings: &ScanSettings) -> Args {
        Args {
            lang: settings.tesseract_language.clone(),
            dpi: settings.dpi,
            psm: Some(settings.page_segmentation_mode),
            oem: Some(settings.ocr_engine_mode),
            ..Args::default()
        }
    }

    fn convert_to_tesseract_compatible_format(image: &DynamicImage) -> Result<Vec<u8>> {
        log::debug!("{} Converting image to PNG", LOG_TAG_OCR);
        let mut buffer = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
            .context("Failed to convert image to PNG format")?;
        Ok(buffer)
    }
}

impl OcrService for TesseractOcrService {
    fn extract_text_from_image(&self, image: &DynamicImage) -> Result<OcrResult> {
        log::info!("{} Starting text extraction", LOG_TAG_OCR);
        log::debug!(
            "{} Image dimensions: {}x{}",
            LOG_TAG_OCR,
            image.width(),
            image.height()
        );

        let png_bytes = Self::convert_to_tesseract_compatible_format(image)
            .context("Failed to prepare image for OCR")?;

        // removed on drop, so concurrent scans never share a file
        let mut staged_file = tempfile::Builder::new()
            .prefix("id-name-scan-")
            .suffix(".png")
            .tempfile()
            .context("Failed to create temporary image file")?;
        staged_file
            .write_all(&png_bytes)
            .context("Failed to write temporary image file")?;
        staged_file.flush()?;

        let tesseract_image = TesseractImage::from_path(staged_file.path())
            .context("Failed to create Tesseract image")?;

        let extracted_text = rusty_tesseract::image_to_string(&tesseract_image, &self.args)
            .context("Failed to extract text from image")?;

        log::info!(
            "{} Text extraction complete. Extracted {} characters",
            LOG_TAG_OCR,
            extracted_text.len()
        );
        log::debug!("{} Extracted text: {}", LOG_TAG_OCR, extracted_text);

        Ok(OcrResult::from_text(extracted_text))
    }
}
