//! Multi-stage adaptive test design.
//!
//! Seven levels in four stages, following the technology-competency taxonomy
//! (Todd, 1991). A student starts at level 1; each answer at levels 2–4 routes
//! them up on a correct answer or down on a wrong one. Levels 5, 6 and 7 are final.

use serde::Serialize;

pub mod handlers;

pub const FIRST_LEVEL: u8 = 1;
pub const FINAL_LEVELS: [u8; 3] = [5, 6, 7];
pub const QUESTIONS_PER_LEVEL: usize = 5;

/// One row of the taxonomy table.
#[derive(Debug, Clone, Serialize)]
pub struct StageLevel {
    pub level: u8,
    pub stage: &'static str,
    pub competency: &'static str,
    pub focus: &'static str,
    pub knowledge: &'static str,
    pub verbs: &'static [&'static str],
    /// Target proportion of students answering correctly.
    pub p: f64,
}

pub static LEVELS: [StageLevel; 7] = [
    StageLevel {
        level: 1,
        stage: "I",
        competency: "Kesadaran Teknologi (Pemahaman)",
        focus: "Pemahaman dasar konsep dan istilah",
        knowledge: "knowledge that",
        verbs: &["mengenali", "mengidentifikasi", "menyebutkan"],
        p: 0.95,
    },
    StageLevel {
        level: 2,
        stage: "II",
        competency: "Literasi Teknologi (Komprehensi)",
        focus: "Kemampuan menjelaskan konsep secara lebih mendalam",
        knowledge: "knowledge that",
        verbs: &["menjelaskan", "membandingkan", "mengklasifikasi"],
        p: 0.90,
    },
    StageLevel {
        level: 3,
        stage: "III",
        competency: "Kemampuan Teknologi (Aplikasi dasar)",
        focus: "Penerapan konsep untuk peserta berkemampuan rendah-menengah",
        knowledge: "knowledge that dan knowledge how",
        verbs: &["menerapkan", "menggunakan", "mendemonstrasikan"],
        p: 0.75,
    },
    StageLevel {
        level: 4,
        stage: "III",
        competency: "Kemampuan Teknologi (Aplikasi lanjut)",
        focus: "Penerapan konsep untuk peserta berkemampuan menengah-tinggi",
        knowledge: "knowledge that dan knowledge how",
        verbs: &["menerapkan", "menghitung", "memecahkan"],
        p: 0.67,
    },
    StageLevel {
        level: 5,
        stage: "IV",
        competency: "Kreativitas Teknologi (dasar)",
        focus: "Analisis dan perancangan solusi dasar, untuk peserta dari level 3",
        knowledge: "knowledge that, how, dan why",
        verbs: &["menganalisis", "membandingkan", "merancang"],
        p: 0.20,
    },
    StageLevel {
        level: 6,
        stage: "IV",
        competency: "Kreativitas Teknologi (menengah)",
        focus: "Analisis dan perancangan solusi menengah, untuk peserta dari level 3 atau 4",
        knowledge: "knowledge that, how, dan why",
        verbs: &["menganalisis", "mengorganisasi", "merancang"],
        p: 0.17,
    },
    StageLevel {
        level: 7,
        stage: "IV",
        competency: "Kritik Teknologi (Evaluasi)",
        focus: "Penilaian kritis dan evaluasi mendalam, untuk peserta dari level 4",
        knowledge: "knowledge that, how, dan why",
        verbs: &["mengevaluasi", "mengkritisi", "menciptakan"],
        p: 0.15,
    },
];

pub fn stage_level(level: u8) -> Option<&'static StageLevel> {
    LEVELS.iter().find(|l| l.level == level)
}

pub fn is_final(level: u8) -> bool {
    FINAL_LEVELS.contains(&level)
}

/// Level reached after answering at `current`. `None` once the test is over
/// or for a level outside the table.
pub fn next_level(current: u8, is_correct: bool) -> Option<u8> {
    match (current, is_correct) {
        (1, _) => Some(2),
        (2, true) => Some(4),
        (2, false) => Some(3),
        (3, true) => Some(6),
        (3, false) => Some(5),
        (4, true) => Some(7),
        (4, false) => Some(6),
        _ => None,
    }
}

/// Scoring weight for a question of difficulty `p`: easier questions weigh less.
pub fn assign_weight(p: f64) -> u8 {
    const PIVOT: f64 = 0.62;

    if p > 0.90 {
        1
    } else if p > PIVOT {
        2
    } else if (p - PIVOT).abs() < 1e-6 {
        3
    } else if p > 0.20 {
        4
    } else {
        5
    }
}

/// Multiple-choice comparison: trimmed, case-insensitive.
pub fn is_answer_correct(answer: &str, expected: &str) -> bool {
    answer.trim().to_lowercase() == expected.trim().to_lowercase()
}

pub fn total_questions() -> usize {
    LEVELS.len() * QUESTIONS_PER_LEVEL
}
