use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::extraction::name_normalizer::normalize_candidate;
use crate::core::models::NameExtraction;
use crate::global_constants::{
    FALLBACK_LINE_MAX_CHARS, FALLBACK_LINE_MIN_CHARS, FALLBACK_LINE_MIN_TOKENS, LOG_TAG_EXTRACTOR,
    NAME_FIELD_LABELS,
};

pub type CandidateFinder = fn(&str) -> Result<Option<String>>;

#[derive(Clone, Copy)]
pub struct ExtractionStrategy {
    pub label: &'static str,
    pub find_candidate: CandidateFinder,
}

impl std::fmt::Debug for ExtractionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionStrategy")
            .field("label", &self.label)
            .finish()
    }
}

// One pattern per label, in priority order. A label must stand as a whole
// word and its value stays on the label's line.
static LABELED_FIELD_PATTERNS: Lazy<Result<Vec<(&'static str, Regex)>, regex::Error>> =
    Lazy::new(|| {
        NAME_FIELD_LABELS
            .iter()
            .map(|label| {
                let spaced_label = label.split(' ').collect::<Vec<_>>().join(r"\s+");
                let pattern = format!(
                    r"(?i)\b{}\b[:\s]+(\p{{L}}+(?:[ \t]+\p{{L}}+)*)",
                    spaced_label
                );
                Regex::new(&pattern).map(|regex| (*label, regex))
            })
            .collect()
    });

pub fn find_labeled_name_field(ocr_text: &str) -> Result<Option<String>> {
    let patterns = Lazy::force(&LABELED_FIELD_PATTERNS)
        .as_ref()
        .map_err(|error| anyhow::anyhow!("name label pattern failed to compile: {}", error))?;

    for (label, pattern) in patterns {
        if let Some(captures) = pattern.captures(ocr_text) {
            if let Some(value) = captures.get(1) {
                log::debug!(
                    "{} label {:?} matched value {:?}",
                    LOG_TAG_EXTRACTOR,
                    label,
                    value.as_str()
                );
                return Ok(Some(value.as_str().to_string()));
            }
        }
    }

    Ok(None)
}

pub fn is_plausible_name_line(line: &str) -> bool {
    let character_count = line.chars().count();

    (FALLBACK_LINE_MIN_CHARS..=FALLBACK_LINE_MAX_CHARS).contains(&character_count)
        && line
            .chars()
            .all(|character| character.is_alphabetic() || character == ' ' || character == '\t')
        && line.split_whitespace().count() >= FALLBACK_LINE_MIN_TOKENS
}

pub fn find_plausible_name_line(ocr_text: &str) -> Result<Option<String>> {
    Ok(ocr_text
        .lines()
        .map(str::trim)
        .find(|line| is_plausible_name_line(line))
        .map(str::to_string))
}

pub const LABELED_FIELD_STRATEGY: ExtractionStrategy = ExtractionStrategy {
    label: "labeled-field",
    find_candidate: find_labeled_name_field,
};

pub const NAME_LINE_STRATEGY: ExtractionStrategy = ExtractionStrategy {
    label: "name-line",
    find_candidate: find_plausible_name_line,
};

#[derive(Debug, Clone)]
pub struct NameFieldExtractor {
    strategies: Vec<ExtractionStrategy>,
}

impl Default for NameFieldExtractor {
    fn default() -> Self {
        Self::with_strategies(vec![LABELED_FIELD_STRATEGY, NAME_LINE_STRATEGY])
    }
}

impl NameFieldExtractor {
    pub fn with_strategies(strategies: Vec<ExtractionStrategy>) -> Self {
        Self { strategies }
    }

    pub fn extract_name(&self, ocr_text: &str) -> NameExtraction {
        log::info!(
            "{} Searching {} characters of OCR text",
            LOG_TAG_EXTRACTOR,
            ocr_text.len()
        );

        for strategy in &self.strategies {
            let candidate = match (strategy.find_candidate)(ocr_text) {
                Ok(Some(candidate)) => candidate,
                Ok(None) => continue,
                Err(error) => {
                    log::error!(
                        "{} {} strategy failed: {:#}",
                        LOG_TAG_EXTRACTOR,
                        strategy.label,
                        error
                    );
                    return NameExtraction::not_found_because(format!(
                        "{} strategy failed: {:#}",
                        strategy.label, error
                    ));
                }
            };

            return match normalize_candidate(&candidate) {
                Some(name) => {
                    log::info!(
                        "{} {} strategy found {:?}",
                        LOG_TAG_EXTRACTOR,
                        strategy.label,
                        name
                    );
                    NameExtraction::Found(name)
                }
                None => {
                    log::info!(
                        "{} {} candidate {:?} held only document words",
                        LOG_TAG_EXTRACTOR,
                        strategy.label,
                        candidate
                    );
                    NameExtraction::not_found_because(format!(
                        "candidate {:?} contained only document words",
                        candidate
                    ))
                }
            };
        }

        log::info!("{} No name candidate found", LOG_TAG_EXTRACTOR);
        NameExtraction::not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(ocr_text: &str) -> NameExtraction {
        NameFieldExtractor::default().extract_name(ocr_text)
    }

    #[test]
    fn test_label_patterns_compile() {
        let patterns = Lazy::force(&LABELED_FIELD_PATTERNS).as_ref().unwrap();

        assert_eq!(patterns.len(), NAME_FIELD_LABELS.len());
    }

    #[test]
    fn test_labeled_name_field_with_colon() {
        assert_eq!(
            extract("REPUBLIC OF NOWHERE\nName: JOHN SMITH\nDOB: 01/02/1990"),
            NameExtraction::Found("John Smith".to_string())
        );
    }

    #[test]
    fn test_labeled_name_field_with_whitespace_only() {
        assert_eq!(
            extract("FULL NAME   MARIA GARCIA\n12345"),
            NameExtraction::Found("Maria Garcia".to_string())
        );
    }

    #[test]
    fn test_labeled_value_does_not_run_into_next_line() {
        assert_eq!(
            find_labeled_name_field("Name: Ada\nLovelace Street 5").unwrap(),
            Some("Ada".to_string())
        );
    }

    #[test]
    fn test_label_on_its_own_line_takes_value_from_next_line() {
        assert_eq!(
            extract("NAME\nGRACE HOPPER\nEXPIRES 2030"),
            NameExtraction::Found("Grace Hopper".to_string())
        );
    }

    #[test]
    fn test_name_label_outranks_surname_regardless_of_position() {
        let surname_first = "Surname: Doe\nName: John";
        let name_first = "Name: John\nSurname: Doe";

        assert_eq!(
            extract(surname_first),
            NameExtraction::Found("John".to_string())
        );
        assert_eq!(extract(name_first), NameExtraction::Found("John".to_string()));
    }

    #[test]
    fn test_surname_label_used_when_no_other_label_present() {
        assert_eq!(
            extract("SURNAME: O CONNOR\n1988"),
            NameExtraction::Found("O Connor".to_string())
        );
    }

    #[test]
    fn test_label_inside_longer_word_is_ignored() {
        assert_eq!(find_labeled_name_field("Names and dates 2020").unwrap(), None);
        assert_eq!(find_labeled_name_field("Renamed: Someone").unwrap(), None);
    }

    #[test]
    fn test_stopwords_removed_from_labeled_value() {
        assert_eq!(
            extract("Name: John Card Smith"),
            NameExtraction::Found("John Smith".to_string())
        );
    }

    #[test]
    fn test_labeled_value_of_only_stopwords_is_not_found() {
        let extraction = extract("Name: ID Card");

        assert!(matches!(
            extraction,
            NameExtraction::NotFound { diagnostic: Some(_) }
        ));
        assert_eq!(extraction.name(), None);
    }

    #[test]
    fn test_fallback_line_used_without_labels() {
        assert_eq!(
            extract("ZX-4471\njane doe\n2024-01-01"),
            NameExtraction::Found("Jane Doe".to_string())
        );
    }

    #[test]
    fn test_fallback_skips_single_token_and_non_letter_lines() {
        assert_eq!(
            extract("PASSPORTS\nNo. 991\nALAN TURING\nmore words here"),
            NameExtraction::Found("Alan Turing".to_string())
        );
    }

    #[test]
    fn test_fallback_respects_length_bounds() {
        assert!(is_plausible_name_line("a b"));
        assert!(!is_plausible_name_line("ab"));

        let fifty = format!("{} {}", "a".repeat(24), "b".repeat(25));
        let fifty_one = format!("{} {}", "a".repeat(25), "b".repeat(25));
        assert_eq!(fifty.chars().count(), 50);
        assert!(is_plausible_name_line(&fifty));
        assert!(!is_plausible_name_line(&fifty_one));
    }

    #[test]
    fn test_fallback_line_is_trimmed() {
        assert_eq!(
            find_plausible_name_line("   \n  jane doe  \n").unwrap(),
            Some("jane doe".to_string())
        );
    }

    #[test]
    fn test_empty_text_is_not_found_without_diagnostic() {
        assert_eq!(extract(""), NameExtraction::not_found());
        assert_eq!(extract("\n\n  \n"), NameExtraction::not_found());
    }

    #[test]
    fn test_garbage_text_is_not_found() {
        assert_eq!(extract("#$%^ 1234\n@@@\nX"), NameExtraction::not_found());
    }

    #[test]
    fn test_failing_strategy_becomes_not_found_with_diagnostic() {
        fn failing_finder(_ocr_text: &str) -> Result<Option<String>> {
            anyhow::bail!("malformed text")
        }

        let extractor = NameFieldExtractor::with_strategies(vec![
            ExtractionStrategy {
                label: "broken",
                find_candidate: failing_finder,
            },
            NAME_LINE_STRATEGY,
        ]);

        match extractor.extract_name("jane doe") {
            NameExtraction::NotFound {
                diagnostic: Some(message),
            } => assert!(message.contains("malformed text")),
            other => panic!("Expected not found with diagnostic, got {:?}", other),
        }
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let extractor = NameFieldExtractor::default();
        let text = "GIVEN NAME: LINUS\nSURNAME: TORVALDS";

        assert_eq!(extractor.extract_name(text), extractor.extract_name(text));
    }
}
