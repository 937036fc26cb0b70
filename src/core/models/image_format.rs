use serde::{Deserialize, Serialize};

use crate::global_constants::ALLOWED_IMAGE_EXTENSIONS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    PNG,
    JPEG,
    GIF,
    BMP,
    TIFF,
}

impl ImageFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        let lowered = extension.to_ascii_lowercase();

        if !ALLOWED_IMAGE_EXTENSIONS.contains(&lowered.as_str()) {
            return None;
        }

        match lowered.as_str() {
            "png" => Some(Self::PNG),
            "jpg" | "jpeg" => Some(Self::JPEG),
            "gif" => Some(Self::GIF),
            "bmp" => Some(Self::BMP),
            "tiff" => Some(Self::TIFF),
            _ => None,
        }
    }

    pub fn as_codec_format(&self) -> image::ImageFormat {
        match self {
            Self::PNG => image::ImageFormat::Png,
            Self::JPEG => image::ImageFormat::Jpeg,
            Self::GIF => image::ImageFormat::Gif,
            Self::BMP => image::ImageFormat::Bmp,
            Self::TIFF => image::ImageFormat::Tiff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension_accepts_every_allowed_extension() {
        for extension in ALLOWED_IMAGE_EXTENSIONS {
            assert!(
                ImageFormat::from_extension(extension).is_some(),
                "expected {} to be accepted",
                extension
            );
        }
    }

    #[test]
    fn test_from_extension_is_case_insensitive() {
        assert_eq!(ImageFormat::from_extension("JPG"), Some(ImageFormat::JPEG));
        assert_eq!(ImageFormat::from_extension("Png"), Some(ImageFormat::PNG));
    }

    #[test]
    fn test_from_extension_rejects_unknown_extensions() {
        assert_eq!(ImageFormat::from_extension("pdf"), None);
        assert_eq!(ImageFormat::from_extension("webp"), None);
        assert_eq!(ImageFormat::from_extension("tif"), None);
        assert_eq!(ImageFormat::from_extension(""), None);
    }

    #[test]
    fn test_jpg_and_jpeg_share_codec_format() {
        let jpg = ImageFormat::from_extension("jpg").unwrap();
        let jpeg = ImageFormat::from_extension("jpeg").unwrap();

        assert_eq!(jpg.as_codec_format(), jpeg.as_codec_format());
        assert_eq!(jpg.as_codec_format(), image::ImageFormat::Jpeg);
    }
}
