mod image_format;
mod image_upload;
mod name_extraction;
mod ocr;
mod preprocessed_image;
mod scan_error;
mod scan_response;
mod scan_settings;

pub use image_format::ImageFormat;
pub use image_upload::ImageUpload;
pub use name_extraction::NameExtraction;
pub use ocr::OcrResult;
pub use preprocessed_image::PreprocessedImage;
pub use scan_error::ScanError;
pub use scan_response::ScanResponse;
pub use scan_settings::ScanSettings;
