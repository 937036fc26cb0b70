pub mod adapters;
pub mod core;
pub mod global_constants;

pub use crate::adapters::TesseractOcrService;
pub use crate::core::interfaces::adapters::OcrService;
pub use crate::core::models::{ImageUpload, ScanError, ScanResponse, ScanSettings};
pub use crate::core::orchestrators::NameScanOrchestrator;
