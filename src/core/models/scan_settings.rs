use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::global_constants::{
    self, APPLICATION_NAME, DEFAULT_BLUR_SIGMA, DEFAULT_CLOSING_KERNEL_SIZE, DEFAULT_OCR_DPI,
    DEFAULT_TESSERACT_LANGUAGE, LOG_TAG_SETTINGS, MAX_PAGE_SEGMENTATION_MODE, OEM_DEFAULT,
    PSM_SINGLE_UNIFORM_BLOCK,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    pub tesseract_language: String,
    pub page_segmentation_mode: i32,
    pub ocr_engine_mode: i32,
    pub dpi: Option<i32>,
    pub blur_sigma: f32,
    pub closing_kernel_size: u32,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            tesseract_language: DEFAULT_TESSERACT_LANGUAGE.to_string(),
            page_segmentation_mode: PSM_SINGLE_UNIFORM_BLOCK,
            ocr_engine_mode: OEM_DEFAULT,
            dpi: Some(DEFAULT_OCR_DPI),
            blur_sigma: DEFAULT_BLUR_SIGMA,
            closing_kernel_size: DEFAULT_CLOSING_KERNEL_SIZE,
        }
    }
}

impl ScanSettings {
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("{} No settings file found, using defaults", LOG_TAG_SETTINGS);
            let default_settings = Self::default();
            default_settings.save_to_path(&settings_path)?;
            return Ok(default_settings);
        }

        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read settings from {:?}", settings_path))?;
        let settings: ScanSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {:?}", settings_path))?;

        settings.validate()?;

        log::info!("{} Loaded settings from {:?}", LOG_TAG_SETTINGS, settings_path);
        log::debug!(
            "{} OCR language={}, psm={}, oem={}, dpi={:?}",
            LOG_TAG_SETTINGS,
            settings.tesseract_language,
            settings.page_segmentation_mode,
            settings.ocr_engine_mode,
            settings.dpi
        );
        log::debug!(
            "{} blur_sigma={}, closing_kernel_size={}",
            LOG_TAG_SETTINGS,
            settings.blur_sigma,
            settings.closing_kernel_size
        );

        Ok(settings)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("{} Saved settings to {:?}", LOG_TAG_SETTINGS, settings_path);
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.tesseract_language.trim().is_empty() {
            anyhow::bail!("tesseract_language must not be empty");
        }

        if !(0..=MAX_PAGE_SEGMENTATION_MODE).contains(&self.page_segmentation_mode) {
            anyhow::bail!(
                "page_segmentation_mode must be between 0 and {}, got {}",
                MAX_PAGE_SEGMENTATION_MODE,
                self.page_segmentation_mode
            );
        }

        if !self.blur_sigma.is_finite() || self.blur_sigma < 0.0 {
            anyhow::bail!("blur_sigma must be a non-negative number, got {}", self.blur_sigma);
        }

        if self.closing_kernel_size == 0 {
            anyhow::bail!("closing_kernel_size must be at least 1");
        }

        if let Some(dpi) = self.dpi {
            if dpi <= 0 {
                anyhow::bail!("dpi must be positive, got {}", dpi);
            }
        }

        Ok(())
    }

    fn get_settings_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
