//! Structure validation for Modul Ajar Kurikulum Merdeka documents.
//!
//! Checks run in a fixed priority order and stop at the first failure, so a
//! caller only ever sees the most relevant diagnostic:
//! length → header → Tujuan Pembelajaran → Kompetensi Awal → Pemahaman Bermakna → identity.

use tracing::debug;

use crate::modul::models::{ValidationFailure, ValidationResult};
use crate::modul::sections::{
    collapse_whitespace, has_header_token, label_value, normalize_line_endings, Label, Outline,
    Section,
};

/// Minimum length, in characters of whitespace-collapsed text.
pub const MIN_DOCUMENT_CHARS: usize = 200;

pub fn validate(text: &str) -> ValidationResult {
    match first_failure(text) {
        Some(failure) => {
            debug!(code = failure.code(), "Modul Ajar rejected");
            ValidationResult::invalid(failure)
        }
        None => ValidationResult::valid(),
    }
}

fn first_failure(text: &str) -> Option<ValidationFailure> {
    let text = normalize_line_endings(text);

    let found = collapse_whitespace(&text).chars().count();
    if found < MIN_DOCUMENT_CHARS {
        return Some(ValidationFailure::TooShort {
            found,
            min: MIN_DOCUMENT_CHARS,
        });
    }

    if !has_header_token(&text) {
        return Some(ValidationFailure::MissingHeader);
    }

    let outline = Outline::parse(&text);
    let required = [
        (
            Section::TujuanPembelajaran,
            ValidationFailure::MissingLearningObjectives,
        ),
        (
            Section::KompetensiAwal,
            ValidationFailure::MissingPriorCompetency,
        ),
        (
            Section::PemahamanBermakna,
            ValidationFailure::MissingMeaningfulUnderstanding,
        ),
    ];
    if let Some((_, failure)) = required.iter().find(|(section, _)| !outline.has(*section)) {
        return Some(*failure);
    }

    // Same lookups the extractor uses for `mata_pelajaran` and `kelas`.
    let has_subject = label_value(&text, Label::Subject).is_some();
    let has_grade = label_value(&text, Label::Grade).is_some();
    if !(has_subject && has_grade) {
        return Some(ValidationFailure::IncompleteIdentity);
    }

    None
}
