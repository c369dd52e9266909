//! Question-generation prompt assembly.
//!
//! The output is a pure function of the components: same input, byte-identical
//! prompt. Hedging terms appear only between `RULE_BLOCK_OPEN` and
//! `RULE_BLOCK_CLOSE`, where they are listed as forbidden.

use crate::modul::models::CurriculumComponents;
use crate::modul::prompts::{
    CHECKLIST_HEADER, CHECKLIST_PER_QUESTION, FORBIDDEN_HEADER, FORBIDDEN_HEDGING_TERMS,
    KEY_PRINCIPLES, NEGATIVE_EXAMPLES, OUTPUT_FORMAT, POSITIVE_EXAMPLES, REQUIRED_HEADER,
    REQUIRED_QUALITIES, RULE_BLOCK_CLOSE, RULE_BLOCK_OPEN, UNAVAILABLE, WRITING_GUIDELINES,
};
use crate::staging::{
    assign_weight, next_level, total_questions, FINAL_LEVELS, FIRST_LEVEL, LEVELS,
    QUESTIONS_PER_LEVEL,
};

pub fn compose_prompt(components: &CurriculumComponents) -> String {
    let mut prompt = String::with_capacity(8 * 1024);

    push_preamble(&mut prompt, components);
    push_components(&mut prompt, components);
    push_stage_plan(&mut prompt);
    push_rule_block(&mut prompt);

    for block in [POSITIVE_EXAMPLES, WRITING_GUIDELINES, OUTPUT_FORMAT] {
        prompt.push_str(block);
        prompt.push_str("\n\n");
    }
    push_checklist(&mut prompt);

    prompt
}

// ─── Sections ────────────────────────────────────────────────────────────────

fn push_preamble(prompt: &mut String, c: &CurriculumComponents) {
    prompt.push_str(&format!(
        "Anda adalah penyusun soal asesmen profesional untuk Kurikulum Merdeka.\n\
         Tugas Anda: menyusun soal PILIHAN GANDA untuk mata pelajaran {} dengan topik utama \"{}\" \
         bagi peserta didik {}.\n\
         Seluruh soal WAJIB bersumber dari komponen Modul Ajar berikut.\n\n",
        scalar(&c.subject),
        scalar(&c.main_topic),
        scalar(&c.grade_or_phase),
    ));
}

fn push_components(prompt: &mut String, c: &CurriculumComponents) {
    prompt.push_str("== KOMPONEN MODUL AJAR ==\n");
    prompt.push_str(&format!("MATA PELAJARAN: {}\n", scalar(&c.subject)));
    prompt.push_str(&format!("TOPIK UTAMA: {}\n", scalar(&c.main_topic)));
    prompt.push_str(&format!("FASE/KELAS: {}\n\n", scalar(&c.grade_or_phase)));

    prompt.push_str(&format!("KOMPETENSI AWAL:\n{}\n\n", scalar(&c.prior_competency)));
    prompt.push_str(&format!(
        "TARGET PESERTA DIDIK:\n{}\n\n",
        scalar(&c.target_audience)
    ));

    prompt.push_str("TUJUAN PEMBELAJARAN (setiap tujuan WAJIB diukur oleh minimal satu soal):\n");
    push_numbered(prompt, &c.learning_objectives);

    prompt.push_str(
        "PEMAHAMAN BERMAKNA (setiap pemahaman WAJIB tercermin pada minimal satu soal):\n",
    );
    push_numbered(prompt, &c.meaningful_understandings);

    prompt.push_str("PROFIL PELAJAR PANCASILA:\n");
    if c.pancasila_profile_dimensions.is_empty() {
        prompt.push_str(&format!("- {UNAVAILABLE}\n"));
    }
    for dimension in &c.pancasila_profile_dimensions {
        prompt.push_str(&format!("- {dimension}\n"));
    }
    prompt.push('\n');
}

fn push_stage_plan(prompt: &mut String) {
    prompt.push_str("== DESAIN TES MULTI-TAHAP ==\n");
    prompt.push_str(&format!(
        "Susun tepat {QUESTIONS_PER_LEVEL} soal untuk setiap level, total {} soal. \
         Peserta didik memulai dari level {FIRST_LEVEL}.\n",
        total_questions(),
    ));

    prompt.push_str("Alur perpindahan level:\n");
    for stage in &LEVELS {
        let level = stage.level;
        match (next_level(level, true), next_level(level, false)) {
            (Some(up), Some(down)) if up == down => {
                prompt.push_str(&format!("- Level {level} -> Level {up}\n"));
            }
            (Some(up), Some(down)) => {
                prompt.push_str(&format!(
                    "- Level {level} -> benar: Level {up}, salah: Level {down}\n"
                ));
            }
            _ => {}
        }
    }
    let finals = FINAL_LEVELS
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    prompt.push_str(&format!("- Level akhir: {finals}\n\n"));

    for stage in &LEVELS {
        prompt.push_str(&format!(
            "LEVEL {} (STAGE {}) - {}\n\
             \x20 * Fokus: {}\n\
             \x20 * Jenis pengetahuan: {}\n\
             \x20 * Kata kerja operasional: {}\n\
             \x20 * Tingkat kesulitan: p = {:.2}, bobot {}\n",
            stage.level,
            stage.stage,
            stage.competency,
            stage.focus,
            stage.knowledge,
            stage.verbs.join(", "),
            stage.p,
            assign_weight(stage.p),
        ));
    }
    prompt.push('\n');
}

fn push_rule_block(prompt: &mut String) {
    prompt.push_str(RULE_BLOCK_OPEN);
    prompt.push('\n');

    prompt.push_str(FORBIDDEN_HEADER);
    prompt.push('\n');
    for term in FORBIDDEN_HEDGING_TERMS {
        prompt.push_str(&format!("- \"{term}\"\n"));
    }
    prompt.push('\n');

    prompt.push_str(REQUIRED_HEADER);
    prompt.push('\n');
    for (name, definition) in REQUIRED_QUALITIES {
        prompt.push_str(&format!("- {name}: {definition}\n"));
    }
    prompt.push('\n');

    prompt.push_str(NEGATIVE_EXAMPLES);
    prompt.push('\n');
    prompt.push_str(RULE_BLOCK_CLOSE);
    prompt.push_str("\n\n");
}

fn push_checklist(prompt: &mut String) {
    prompt.push_str(CHECKLIST_HEADER);
    prompt.push('\n');
    prompt.push_str(CHECKLIST_PER_QUESTION);
    prompt.push('\n');
    prompt.push_str(&format!(
        "[ ] Setiap level berisi tepat {QUESTIONS_PER_LEVEL} soal, total {} soal.\n\n",
        total_questions(),
    ));
    prompt.push_str(KEY_PRINCIPLES);
    prompt.push('\n');
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn scalar(value: &str) -> &str {
    if value.trim().is_empty() {
        UNAVAILABLE
    } else {
        value
    }
}

fn push_numbered(prompt: &mut String, items: &[String]) {
    if items.is_empty() {
        prompt.push_str(&format!("1. {UNAVAILABLE}\n"));
    }
    for (i, item) in items.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, item));
    }
    prompt.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modul::hedging::find_hedging_terms;

    fn sample() -> CurriculumComponents {
        CurriculumComponents {
            subject: "Informatika".into(),
            main_topic: "Jaringan Komputer dan Internet".into(),
            grade_or_phase: "E (Kelas X)".into(),
            prior_competency: "Peserta didik memahami konsep dasar komputer.".into(),
            learning_objectives: vec![
                "Menjelaskan konsep dasar jaringan komputer dan internet".into(),
                "Menganalisis protokol komunikasi data dalam jaringan".into(),
                "Menerapkan pengetahuan tentang topologi jaringan".into(),
                "Mengevaluasi keamanan jaringan komputer".into(),
            ],
            meaningful_understandings: vec![
                "Jaringan komputer memungkinkan berbagi sumber daya dan informasi".into(),
                "Protokol adalah aturan komunikasi dalam jaringan".into(),
            ],
            pancasila_profile_dimensions: vec!["Bernalar kritis".into()],
            target_audience: String::new(),
        }
    }

    /// Prompt text with the rule block cut out.
    fn outside_rule_block(prompt: &str) -> String {
        let start = prompt.find(RULE_BLOCK_OPEN).expect("rule block opens");
        let end = prompt.find(RULE_BLOCK_CLOSE).expect("rule block closes") + RULE_BLOCK_CLOSE.len();
        assert!(start < end);
        format!("{}{}", &prompt[..start], &prompt[end..])
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(compose_prompt(&sample()), compose_prompt(&sample()));
    }

    #[test]
    fn test_contains_required_blocks() {
        let prompt = compose_prompt(&sample());
        for needle in [
            "ATURAN KHUSUS ANTI-AMBIGUITAS",
            "LARANGAN KERAS",
            "WAJIB: Gunakan kata-kata PASTI dan DEFINITIF",
            "DEFINITIF: Tidak ada ruang interpretasi ganda",
            "VERIFIABLE: Jawaban dapat dibuktikan",
            "CONTOH SOAL YANG BENAR (DEFINITIF & JELAS)",
            "CONTOH SOAL YANG SALAH (AMBIGU & TIDAK JELAS)",
            "PEDOMAN PENULISAN SOAL DEFINITIF",
            "CHECKLIST KUALITAS SEBELUM MENGIRIM JAWABAN",
            "VALIDASI SETIAP SOAL",
            "PRINSIP KUNCI YANG HARUS DITERAPKAN",
        ] {
            assert!(prompt.contains(needle), "missing: {needle}");
        }
    }

    #[test]
    fn test_components_appear_verbatim() {
        let c = sample();
        let prompt = compose_prompt(&c);
        assert!(prompt.contains("Informatika"));
        assert!(prompt.contains("Jaringan Komputer dan Internet"));
        assert!(prompt.contains("E (Kelas X)"));
        for objective in &c.learning_objectives {
            assert!(prompt.contains(objective.as_str()), "missing: {objective}");
        }
        for understanding in &c.meaningful_understandings {
            assert!(prompt.contains(understanding.as_str()));
        }
        assert!(prompt.contains("1. Menjelaskan konsep dasar jaringan komputer dan internet\n"));
        assert!(prompt.contains("4. Mengevaluasi keamanan jaringan komputer\n"));
    }

    #[test]
    fn test_rule_block_lists_every_forbidden_term() {
        let prompt = compose_prompt(&sample());
        let start = prompt.find(RULE_BLOCK_OPEN).unwrap();
        let end = prompt.find(RULE_BLOCK_CLOSE).unwrap();
        let block = &prompt[start..end];
        for term in FORBIDDEN_HEDGING_TERMS {
            assert!(block.contains(&format!("\"{term}\"")), "not listed: {term}");
        }
        assert_eq!(prompt.matches(RULE_BLOCK_OPEN).count(), 1);
    }

    #[test]
    fn test_no_hedging_outside_rule_block() {
        let prompt = compose_prompt(&sample());
        let rest = outside_rule_block(&prompt);
        assert_eq!(find_hedging_terms(&rest), Vec::<&str>::new());
    }

    #[test]
    fn test_empty_components_still_render() {
        let prompt = compose_prompt(&CurriculumComponents::default());
        assert!(prompt.contains("MATA PELAJARAN: Tidak tersedia"));
        assert!(prompt.contains("TUJUAN PEMBELAJARAN"));
        assert!(prompt.contains("1. Tidak tersedia"));
        assert!(find_hedging_terms(&outside_rule_block(&prompt)).is_empty());
    }

    #[test]
    fn test_stage_plan_lists_routes_and_weights() {
        let prompt = compose_prompt(&sample());
        assert!(prompt.contains("- Level 1 -> Level 2\n"));
        assert!(prompt.contains("- Level 2 -> benar: Level 4, salah: Level 3\n"));
        assert!(prompt.contains("- Level 4 -> benar: Level 7, salah: Level 6\n"));
        assert!(prompt.contains("- Level akhir: 5, 6, 7\n"));
        assert!(prompt.contains("p = 0.95, bobot 1"));
        assert!(prompt.contains("p = 0.15, bobot 5"));
        assert!(prompt.contains("total 35 soal"));
    }

    #[test]
    fn test_caller_supplied_hedge_is_visible_outside_block() {
        let mut c = sample();
        c.learning_objectives.push("Siswa mungkin memahami subnet".into());
        let rest = outside_rule_block(&compose_prompt(&c));
        assert_eq!(find_hedging_terms(&rest), vec!["mungkin"]);
    }
}
