mod name_field_extractor;
pub mod name_normalizer;

pub use name_field_extractor::{
    find_labeled_name_field, find_plausible_name_line, CandidateFinder, ExtractionStrategy,
    NameFieldExtractor, LABELED_FIELD_STRATEGY, NAME_LINE_STRATEGY,
};
