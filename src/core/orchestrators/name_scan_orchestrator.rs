use std::sync::Arc;

use image::DynamicImage;

use crate::core::extraction::NameFieldExtractor;
use crate::core::interfaces::adapters::OcrService;
use crate::core::models::{ImageUpload, NameExtraction, ScanError, ScanResponse, ScanSettings};
use crate::core::preprocessing::ImagePreprocessor;
use crate::global_constants::{LOG_TAG_SCANNER, NOTE_PREPROCESSING_SKIPPED};

/// Runs one ID card photo through preprocessing, OCR and name extraction.
/// Holds no per-scan state; share it behind an `Arc` across request handlers.
pub struct NameScanOrchestrator {
    ocr_service: Arc<dyn OcrService>,
    preprocessor: ImagePreprocessor,
    name_extractor: NameFieldExtractor,
}

impl NameScanOrchestrator {
    pub fn new(ocr_service: Arc<dyn OcrService>, preprocessor: ImagePreprocessor) -> Self {
        Self {
            ocr_service,
            preprocessor,
            name_extractor: NameFieldExtractor::default(),
        }
    }

    pub fn from_settings(ocr_service: Arc<dyn OcrService>, settings: &ScanSettings) -> Self {
        Self::new(ocr_service, ImagePreprocessor::from_settings(settings))
    }

    pub fn scan_upload(&self, upload: &ImageUpload) -> ScanResponse {
        log::info!("{} Scanning upload {:?}", LOG_TAG_SCANNER, upload.file_name);

        self.try_scan_upload(upload)
            .unwrap_or_else(|error| self.report_failure(error))
    }

    pub fn scan_image(&self, image: &DynamicImage) -> ScanResponse {
        self.try_scan_image(image)
            .unwrap_or_else(|error| self.report_failure(error))
    }

    pub fn scan_text(&self, ocr_text: &str) -> ScanResponse {
        self.respond_to_extraction(ocr_text, Vec::new())
    }

    fn try_scan_upload(&self, upload: &ImageUpload) -> Result<ScanResponse, ScanError> {
        let declared_format = upload.validate_format()?;
        let decoded_image = upload.decode()?;

        log::debug!(
            "{} {:?} declared as {:?}",
            LOG_TAG_SCANNER,
            upload.file_name,
            declared_format.as_codec_format()
        );

        self.try_scan_image(&decoded_image)
    }

    fn try_scan_image(&self, image: &DynamicImage) -> Result<ScanResponse, ScanError> {
        let mut notes = Vec::new();

        let preprocessed = self.preprocessor.preprocess(image);
        if let Some(reason) = preprocessed.degradation_reason() {
            notes.push(format!("{}: {}", NOTE_PREPROCESSING_SKIPPED, reason));
        }

        let ocr_result = self
            .ocr_service
            .extract_text_from_image(preprocessed.image())
            .map_err(|error| ScanError::Ocr(format!("{:#}", error)))?;

        log::debug!(
            "{} OCR returned {} line(s), blank={}",
            LOG_TAG_SCANNER,
            ocr_result.line_count(),
            ocr_result.is_blank()
        );

        Ok(self.respond_to_extraction(&ocr_result.full_text, notes))
    }

    fn respond_to_extraction(&self, ocr_text: &str, mut notes: Vec<String>) -> ScanResponse {
        match self.name_extractor.extract_name(ocr_text) {
            NameExtraction::Found(name) => {
                log::info!("{} Extracted name {:?}", LOG_TAG_SCANNER, name);
                ScanResponse::name_found(name, notes)
            }
            NameExtraction::NotFound { diagnostic } => {
                log::info!("{} No name found on card", LOG_TAG_SCANNER);
                notes.extend(diagnostic);
                ScanResponse::name_not_found(notes)
            }
        }
    }

    fn report_failure(&self, error: ScanError) -> ScanResponse {
        if error.is_hard_failure() {
            log::error!("{} Scan failed: {}", LOG_TAG_SCANNER, error);
        } else {
            log::warn!("{} Scan rejected: {}", LOG_TAG_SCANNER, error);
        }

        ScanResponse::from(error)
    }
}
