use crate::global_constants::DOCUMENT_TYPE_STOPWORDS;

pub fn is_document_type_word(token: &str) -> bool {
    DOCUMENT_TYPE_STOPWORDS
        .iter()
        .any(|stopword| stopword.eq_ignore_ascii_case(token))
}

pub fn capitalize_token(token: &str) -> String {
    let mut characters = token.chars();

    match characters.next() {
        Some(first) => first
            .to_uppercase()
            .chain(characters.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Returns `None` when nothing but document words survives.
pub fn normalize_candidate(candidate: &str) -> Option<String> {
    let name_tokens: Vec<String> = candidate
        .split_whitespace()
        .filter(|token| !is_document_type_word(token))
        .map(capitalize_token)
        .collect();

    if name_tokens.is_empty() {
        return None;
    }

    Some(name_tokens.join(" "))
}
