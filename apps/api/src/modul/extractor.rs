//! Curriculum component extraction.
//!
//! Best-effort and total: a missing section leaves its field empty instead of
//! failing the whole document. Callers normally run `validate` first, but
//! nothing here relies on that.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::modul::models::CurriculumComponents;
use crate::modul::sections::{
    collapse_whitespace, has_header_token, is_label_line, label_value, match_heading,
    normalize_line_endings, Label, Outline, Section, SectionBody,
};

/// Bullet glyphs, dashes, `1.`, `2)`, `(3)` and `a.` markers.
static BULLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[•●▪◦·‣○■□➢➤✓✔*\-–]+[ \t]*|\(?(?:\d{1,3}|[a-zA-Z])[.)][ \t]+)(?P<item>\S.*)$")
        .expect("bullet pattern must compile")
});

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence pattern must compile"));

pub fn extract(text: &str) -> CurriculumComponents {
    let text = normalize_line_endings(text);
    let outline = Outline::parse(&text);

    let subject = label_value(&text, Label::Subject).unwrap_or_default();
    let main_topic = label_value(&text, Label::Topic)
        .or_else(|| title_topic(&outline, &subject))
        .unwrap_or_default();

    let components = CurriculumComponents {
        grade_or_phase: label_value(&text, Label::Grade).unwrap_or_default(),
        prior_competency: section_paragraph(&outline, Section::KompetensiAwal),
        learning_objectives: section_items(&outline, Section::TujuanPembelajaran),
        meaningful_understandings: section_items(&outline, Section::PemahamanBermakna),
        pancasila_profile_dimensions: section_items(&outline, Section::ProfilPelajarPancasila),
        target_audience: section_paragraph(&outline, Section::TargetPesertaDidik),
        subject,
        main_topic,
    };

    debug!(
        subject = %components.subject,
        objectives = components.learning_objectives.len(),
        understandings = components.meaningful_understandings.len(),
        pancasila = components.pancasila_profile_dimensions.len(),
        "extracted curriculum components"
    );

    components
}

fn section_items(outline: &Outline<'_>, section: Section) -> Vec<String> {
    outline
        .section(section)
        .map(list_items)
        .unwrap_or_default()
}

fn section_paragraph(outline: &Outline<'_>, section: Section) -> String {
    outline
        .section(section)
        .map(|body| {
            let joined = std::iter::once(body.inline)
                .chain(body.lines.iter().copied())
                .collect::<Vec<_>>()
                .join("\n");
            collapse_whitespace(&joined)
        })
        .unwrap_or_default()
}

/// Bullet items in document order. A line wrapped directly under an item is
/// joined onto it; a blank line ends the item.
fn list_items(body: SectionBody<'_>) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    let mut prose: Vec<&str> = Vec::new();
    let mut continuing = false;

    for line in std::iter::once(body.inline).chain(body.lines.iter().copied()) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continuing = false;
            continue;
        }

        if let Some(caps) = BULLET.captures(trimmed) {
            let item = collapse_whitespace(&caps["item"]);
            if !item.is_empty() {
                items.push(item);
                continuing = true;
            }
            continue;
        }

        match items.last_mut() {
            Some(last) if continuing && !is_label_line(trimmed) => {
                last.push(' ');
                last.push_str(&collapse_whitespace(trimmed));
            }
            _ => {
                continuing = false;
                prose.push(trimmed);
            }
        }
    }

    if items.is_empty() {
        return sentences(&prose);
    }
    items
}

/// Fallback for sections written as prose: one item per sentence, skipping
/// lead-in lines such as "peserta didik dapat:".
fn sentences(lines: &[&str]) -> Vec<String> {
    let joined = lines
        .iter()
        .filter(|line| !line.ends_with(':'))
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let joined = collapse_whitespace(&joined);

    let mut out = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END.find_iter(&joined) {
        // Terminators are ASCII, so `m.start() + 1` stays on a char boundary.
        let sentence = joined[start..m.start() + 1].trim();
        if !sentence.is_empty() {
            out.push(sentence.to_string());
        }
        start = m.end();
    }
    let tail = joined[start..].trim();
    if !tail.is_empty() {
        out.push(tail.to_string());
    }
    out
}

/// Topic taken from the document title when no topic label exists:
/// "MODUL AJAR: Topik" or the first plain line under the header.
/// A "Subject - Topic" title loses its subject prefix.
fn title_topic(outline: &Outline<'_>, subject: &str) -> Option<String> {
    let lines = outline.lines();
    let header_idx = lines.iter().position(|line| has_header_token(line))?;

    if let Some(heading) = match_heading(lines[header_idx]) {
        if heading.section == Section::ModulAjar && !heading.inline.trim().is_empty() {
            return Some(strip_subject_prefix(heading.inline, subject));
        }
    }

    let title = lines[header_idx + 1..]
        .iter()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())?;

    if match_heading(title).is_some() || is_label_line(title) {
        return None;
    }
    Some(strip_subject_prefix(title, subject))
}

fn strip_subject_prefix(title: &str, subject: &str) -> String {
    let split = title
        .split_once(" - ")
        .or_else(|| title.split_once(" – "));

    match split {
        Some((prefix, rest))
            if !subject.is_empty() && prefix.trim().eq_ignore_ascii_case(subject.trim()) =>
        {
            collapse_whitespace(rest)
        }
        _ => collapse_whitespace(title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modul::validator::fixtures::{ACTIVITY_REPORT, VALID_MODUL};

    #[test]
    fn test_extracts_valid_modul() {
        let c = extract(VALID_MODUL);
        assert_eq!(c.subject, "Informatika");
        assert_eq!(c.grade_or_phase, "E (Kelas X)");
        assert_eq!(c.main_topic, "Jaringan Komputer dan Internet");
        assert_eq!(
            c.learning_objectives,
            vec![
                "Menjelaskan konsep dasar jaringan komputer dan internet",
                "Menganalisis protokol komunikasi data dalam jaringan",
                "Menerapkan pengetahuan tentang topologi jaringan",
                "Mengevaluasi keamanan jaringan komputer",
            ]
        );
        assert_eq!(
            c.meaningful_understandings,
            vec![
                "Jaringan komputer memungkinkan berbagi sumber daya dan informasi",
                "Internet adalah jaringan global yang menghubungkan jutaan komputer",
                "Protokol adalah aturan komunikasi dalam jaringan",
                "Keamanan jaringan penting untuk melindungi data",
            ]
        );
        assert_eq!(c.pancasila_profile_dimensions.len(), 2);
        assert_eq!(
            c.pancasila_profile_dimensions[0],
            "Bernalar kritis dalam menganalisis masalah jaringan"
        );
        assert!(c
            .prior_competency
            .starts_with("Peserta didik memahami konsep dasar komputer"));
        assert!(c.prior_competency.ends_with("perangkat keras komputer."));
        assert!(c.target_audience.is_empty());
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        assert_eq!(extract(""), CurriculumComponents::default());
    }

    #[test]
    fn test_arbitrary_input_does_not_panic() {
        let inputs = [
            "\r\r\r::::•",
            "Tujuan Pembelajaran",
            "MODUL AJAR",
            "Kompetensi Awal:\n\n\n",
            "• • •\n1.\n(2)",
            "😀 Pemahaman Bermakna: 😀. 😀! ?",
        ];
        for input in inputs {
            let _ = extract(input);
        }
        assert!(extract("Tujuan Pembelajaran").learning_objectives.is_empty());
        assert!(extract("Kompetensi Awal:\n\n\n").prior_competency.is_empty());
    }

    #[test]
    fn test_activity_report_has_no_curriculum_lists() {
        let c = extract(ACTIVITY_REPORT);
        assert!(c.learning_objectives.is_empty());
        assert!(c.meaningful_understandings.is_empty());
        assert!(c.subject.is_empty());
    }

    #[test]
    fn test_numbered_objectives_keep_order() {
        let text = "Tujuan Pembelajaran:\n1. Alpha\n2) Beta\n(3) Gamma\n\nKompetensi Awal\nx";
        assert_eq!(
            extract(text).learning_objectives,
            vec!["Alpha", "Beta", "Gamma"]
        );
    }

    #[test]
    fn test_duplicate_items_are_kept() {
        let text = "Pemahaman Bermakna\n- Sama\n- Sama\n";
        assert_eq!(extract(text).meaningful_understandings, vec!["Sama", "Sama"]);
    }

    #[test]
    fn test_wrapped_bullet_is_joined() {
        let text = "Tujuan Pembelajaran\n• Menjelaskan konsep dasar\n  jaringan komputer\n• Membuat ERD\n";
        assert_eq!(
            extract(text).learning_objectives,
            vec!["Menjelaskan konsep dasar jaringan komputer", "Membuat ERD"]
        );
    }

    #[test]
    fn test_prose_after_blank_line_is_ignored() {
        let text = "Tujuan Pembelajaran\n• A\n• B\n\nCatatan penutup untuk guru.\n";
        assert_eq!(extract(text).learning_objectives, vec!["A", "B"]);
    }

    #[test]
    fn test_prose_objectives_split_into_sentences() {
        let text = "Tujuan Pembelajaran:\nPeserta didik dapat:\nSiswa memahami fungsi linear. Siswa mampu\nmenggambar grafik.\n";
        assert_eq!(
            extract(text).learning_objectives,
            vec!["Siswa memahami fungsi linear.", "Siswa mampu menggambar grafik."]
        );
    }

    #[test]
    fn test_inline_heading_content() {
        let text = "Tujuan Pembelajaran: Siswa mampu menyusun algoritma\nKompetensi Awal: Mengenal komputer.\n";
        let c = extract(text);
        assert_eq!(c.learning_objectives, vec!["Siswa mampu menyusun algoritma"]);
        assert_eq!(c.prior_competency, "Mengenal komputer.");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let text = VALID_MODUL.repeat(2);
        let c = extract(&text);
        assert_eq!(c.learning_objectives.len(), 4);
        assert_eq!(c.meaningful_understandings.len(), 4);
    }

    #[test]
    fn test_decorated_heading_keeps_objectives() {
        let text = VALID_MODUL.replace("I. Tujuan Pembelajaran", "**Tujuan Pembelajaran**");
        assert_eq!(extract(&text).learning_objectives.len(), 4);
    }

    #[test]
    fn test_reduplicated_word_does_not_end_paragraph() {
        let text = "Kompetensi Awal\nSiswa sudah mengenal internet.\nKegiatan-kegiatan sebelumnya memakai peramban.\n\nPemahaman Bermakna\n• A\n";
        let c = extract(text);
        assert_eq!(
            c.prior_competency,
            "Siswa sudah mengenal internet. Kegiatan-kegiatan sebelumnya memakai peramban."
        );
        assert_eq!(c.meaningful_understandings, vec!["A"]);
    }

    #[test]
    fn test_reduplicated_word_in_wrapped_bullet() {
        let text = "Tujuan Pembelajaran\n• Menjelaskan langkah\n  kegiatan-kegiatan praktikum jaringan\n• Membuat ERD\n";
        assert_eq!(
            extract(text).learning_objectives,
            vec![
                "Menjelaskan langkah kegiatan-kegiatan praktikum jaringan",
                "Membuat ERD",
            ]
        );
    }

    #[test]
    fn test_target_audience_paragraph() {
        let text = "Target Peserta Didik:\nPeserta didik reguler/tipikal: umum,\n   tidak ada kesulitan belajar.\n\nKegiatan Pembelajaran\n1. x";
        assert_eq!(
            extract(text).target_audience,
            "Peserta didik reguler/tipikal: umum, tidak ada kesulitan belajar."
        );
    }

    #[test]
    fn test_topic_label_beats_title() {
        let text = "MODUL AJAR\nInformatika - Jaringan\nTopik: Topologi Bintang\n";
        assert_eq!(extract(text).main_topic, "Topologi Bintang");
    }

    #[test]
    fn test_topic_from_header_inline() {
        let text = "MODUL AJAR: Sistem Basis Data\nMata Pelajaran: Informatika\n";
        assert_eq!(extract(text).main_topic, "Sistem Basis Data");
    }

    #[test]
    fn test_title_without_subject_prefix_is_kept_whole() {
        let text = "MODUL AJAR\nPembelajaran Teknologi\n\nDeskripsi:\nx";
        assert_eq!(extract(text).main_topic, "Pembelajaran Teknologi");
    }

    #[test]
    fn test_no_title_when_header_followed_by_heading() {
        let text = "MODUL AJAR\nIDENTITAS MODUL\nKelas: X\n";
        assert!(extract(text).main_topic.is_empty());
    }
}
