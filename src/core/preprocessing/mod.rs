mod image_preprocessor;
pub mod morphology;
pub mod otsu_threshold;

pub use image_preprocessor::ImagePreprocessor;
