#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrResult {
    pub full_text: String,
}

impl OcrResult {
    pub fn from_text(full_text: impl Into<String>) -> Self {
        Self {
            full_text: full_text.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.full_text.trim().is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.full_text.lines().count()
    }
}
