use once_cell::sync::Lazy;
use regex::Regex;

use crate::modul::prompts::FORBIDDEN_HEDGING_TERMS;

/// One case-insensitive, whole-word matcher per forbidden term. Multi-word
/// terms tolerate any run of whitespace between words.
static MATCHERS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    FORBIDDEN_HEDGING_TERMS
        .iter()
        .map(|term| {
            let words: Vec<String> = term.split_whitespace().map(regex::escape).collect();
            let pattern = format!(r"(?i)\b{}\b", words.join(r"\s+"));
            let re = Regex::new(&pattern).expect("hedging pattern must compile");
            (*term, re)
        })
        .collect()
});

/// Forbidden hedging terms found in `text`, in table order, each at most once.
/// Whole words only: "memungkinkan" does not count as "mungkin".
pub fn find_hedging_terms(text: &str) -> Vec<&'static str> {
    MATCHERS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(term, _)| *term)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitive_question_is_clean() {
        let q = "Perangkat yang meneruskan paket berdasarkan alamat IP adalah router.";
        assert!(find_hedging_terms(q).is_empty());
    }

    #[test]
    fn test_detects_single_and_multi_word_terms() {
        let q = "Apa yang MUNGKIN terjadi? Sebutkan, antara  lain, contohnya.";
        assert_eq!(find_hedging_terms(q), vec!["mungkin", "antara lain"]);
    }

    #[test]
    fn test_word_boundaries() {
        assert!(find_hedging_terms("Jaringan memungkinkan berbagi data").is_empty());
        assert!(find_hedging_terms("Diambil sebanyak dua sampel").is_empty());
        assert_eq!(find_hedging_terms("ada kemungkinan gagal"), vec!["kemungkinan"]);
    }

    #[test]
    fn test_every_table_term_is_detected() {
        for term in FORBIDDEN_HEDGING_TERMS {
            let found = find_hedging_terms(&format!("Soal: {term}."));
            assert!(found.contains(term), "{term} not detected");
        }
    }
}
