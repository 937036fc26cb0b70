#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameExtraction {
    Found(String),
    NotFound { diagnostic: Option<String> },
}

impl NameExtraction {
    pub fn not_found() -> Self {
        Self::NotFound { diagnostic: None }
    }

    pub fn not_found_because(diagnostic: impl Into<String>) -> Self {
        Self::NotFound {
            diagnostic: Some(diagnostic.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Found(name) => Some(name),
            Self::NotFound { .. } => None,
        }
    }
}
