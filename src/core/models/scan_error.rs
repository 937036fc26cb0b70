#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("unsupported file type: {0:?}")]
    UnsupportedFileType(String),

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("OCR failed: {0}")]
    Ocr(String),
}

impl ScanError {
    pub fn is_hard_failure(&self) -> bool {
        !matches!(self, Self::UnsupportedFileType(_))
    }
}
