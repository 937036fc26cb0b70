use image::DynamicImage;

#[derive(Debug, Clone)]
pub enum PreprocessedImage {
    Binarized(DynamicImage),
    Unprocessed { original: DynamicImage, reason: String },
}

impl PreprocessedImage {
    pub fn image(&self) -> &DynamicImage {
        match self {
            Self::Binarized(binary_image) => binary_image,
            Self::Unprocessed { original, .. } => original,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Unprocessed { .. })
    }

    pub fn degradation_reason(&self) -> Option<&str> {
        match self {
            Self::Binarized(_) => None,
            Self::Unprocessed { reason, .. } => Some(reason),
        }
    }
}
