use serde::Serialize;

use crate::core::models::ScanError;
use crate::global_constants::{
    USER_MESSAGE_IMPROVE_PHOTO, USER_MESSAGE_INVALID_FILE_TYPE, USER_MESSAGE_NAME_EXTRACTED,
    USER_MESSAGE_NAME_NOT_FOUND,
};

/// What the registration form receives after an ID card scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanResponse {
    Success {
        name: String,
        message: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        notes: Vec<String>,
    },
    NotFound {
        error: String,
        suggestion: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        notes: Vec<String>,
    },
    InvalidFileType {
        error: String,
    },
    Error {
        error: String,
    },
}

impl ScanResponse {
    pub fn name_found(name: String, notes: Vec<String>) -> Self {
        Self::Success {
            name,
            message: USER_MESSAGE_NAME_EXTRACTED.to_string(),
            notes,
        }
    }

    pub fn name_not_found(notes: Vec<String>) -> Self {
        Self::NotFound {
            error: USER_MESSAGE_NAME_NOT_FOUND.to_string(),
            suggestion: USER_MESSAGE_IMPROVE_PHOTO.to_string(),
            notes,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// True for outcomes a retry with a better photo cannot fix.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::InvalidFileType { .. } | Self::Error { .. })
    }

    pub fn extracted_name(&self) -> Option<&str> {
        match self {
            Self::Success { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl From<ScanError> for ScanResponse {
    fn from(error: ScanError) -> Self {
        match error {
            ScanError::UnsupportedFileType(_) => Self::InvalidFileType {
                error: USER_MESSAGE_INVALID_FILE_TYPE.to_string(),
            },
            hard_error => Self::Error {
                error: hard_error.to_string(),
            },
        }
    }
}
