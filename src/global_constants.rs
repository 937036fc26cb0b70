pub const APPLICATION_NAME: &str = "id-name-scan";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_SCANNER: &str = "[SCANNER]";
pub const LOG_TAG_PREPROCESS: &str = "[PREPROCESS]";
pub const LOG_TAG_EXTRACTOR: &str = "[NAME_EXTRACTOR]";
pub const LOG_TAG_OCR: &str = "[TESSERACT_OCR]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_UPLOAD: &str = "[UPLOAD]";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const DEFAULT_TESSERACT_LANGUAGE: &str = "eng";
pub const PSM_SINGLE_UNIFORM_BLOCK: i32 = 6;
pub const OEM_DEFAULT: i32 = 3;
pub const DEFAULT_OCR_DPI: i32 = 300;
pub const MAX_PAGE_SEGMENTATION_MODE: i32 = 13;

// sigma OpenCV derives for a 5x5 Gaussian kernel
pub const DEFAULT_BLUR_SIGMA: f32 = 1.1;
pub const DEFAULT_CLOSING_KERNEL_SIZE: u32 = 2;

pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "tiff"];

pub const NAME_FIELD_LABELS: [&str; 5] = ["Name", "Full Name", "Given Name", "First Name", "Surname"];

pub const DOCUMENT_TYPE_STOPWORDS: [&str; 7] = [
    "ID", "CARD", "IDENTITY", "LICENCE", "LICENSE", "PASSPORT", "DRIVER",
];

pub const FALLBACK_LINE_MIN_CHARS: usize = 3;
pub const FALLBACK_LINE_MAX_CHARS: usize = 50;
pub const FALLBACK_LINE_MIN_TOKENS: usize = 2;

pub const USER_MESSAGE_NAME_EXTRACTED: &str = "Name extracted successfully";
pub const USER_MESSAGE_NAME_NOT_FOUND: &str = "Could not find a name on the ID card";
pub const USER_MESSAGE_IMPROVE_PHOTO: &str =
    "Make sure the ID card is well lit, in focus and fills most of the photo, then try again";
pub const USER_MESSAGE_INVALID_FILE_TYPE: &str =
    "Invalid file type. Please upload a PNG, JPG, JPEG, GIF, BMP or TIFF image";

pub const NOTE_PREPROCESSING_SKIPPED: &str = "image preprocessing failed, OCR ran on the original image";
