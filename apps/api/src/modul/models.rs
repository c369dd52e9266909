use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a document is rejected, declared in the order the validator checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ValidationFailure {
    #[error(
        "Dokumen terlalu pendek ({found} karakter, minimal {min} karakter). \
        Modul Ajar Kurikulum Merdeka minimal memuat: judul MODUL AJAR, identitas modul \
        (Mata Pelajaran dan Fase/Kelas), Tujuan Pembelajaran, Kompetensi Awal, \
        dan Pemahaman Bermakna."
    )]
    TooShort { found: usize, min: usize },

    #[error(
        "Dokumen tidak dikenali sebagai Modul Ajar: judul \"MODUL AJAR\" tidak ditemukan. \
        Pastikan file yang diunggah adalah Modul Ajar Kurikulum Merdeka, bukan RPP, \
        laporan kegiatan, atau dokumen lain."
    )]
    MissingHeader,

    #[error(
        "Bagian \"Tujuan Pembelajaran\" tidak ditemukan. Tambahkan judul bagian \
        Tujuan Pembelajaran beserta daftar tujuan yang harus dicapai peserta didik."
    )]
    MissingLearningObjectives,

    #[error(
        "Bagian \"Kompetensi Awal\" tidak ditemukan. Tambahkan judul bagian \
        Kompetensi Awal yang menjelaskan pengetahuan dan keterampilan prasyarat peserta didik."
    )]
    MissingPriorCompetency,

    #[error(
        "Bagian \"Pemahaman Bermakna\" tidak ditemukan. Tambahkan judul bagian \
        Pemahaman Bermakna beserta daftar pemahaman yang diperoleh peserta didik."
    )]
    MissingMeaningfulUnderstanding,

    #[error(
        "Identitas modul tidak lengkap. Cantumkan \"Mata Pelajaran: ...\" dan \
        \"Fase/Kelas: ...\" pada bagian Identitas Modul."
    )]
    IncompleteIdentity,
}

impl ValidationFailure {
    /// Stable machine-readable code, also used as the HTTP error code.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationFailure::TooShort { .. } => "DOCUMENT_TOO_SHORT",
            ValidationFailure::MissingHeader => "MISSING_HEADER",
            ValidationFailure::MissingLearningObjectives => "MISSING_TUJUAN_PEMBELAJARAN",
            ValidationFailure::MissingPriorCompetency => "MISSING_KOMPETENSI_AWAL",
            ValidationFailure::MissingMeaningfulUnderstanding => "MISSING_PEMAHAMAN_BERMAKNA",
            ValidationFailure::IncompleteIdentity => "INCOMPLETE_IDENTITY",
        }
    }
}

/// Verdict of `validate`. `message` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ValidationFailure>,
}

impl ValidationResult {
    pub const VALID_MESSAGE: &'static str =
        "Dokumen dikenali sebagai Modul Ajar Kurikulum Merdeka yang valid.";

    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: Self::VALID_MESSAGE.to_string(),
            failure: None,
        }
    }

    pub fn invalid(failure: ValidationFailure) -> Self {
        Self {
            is_valid: false,
            message: failure.to_string(),
            failure: Some(failure),
        }
    }
}

/// Curriculum components pulled out of a Modul Ajar.
/// JSON keys keep the Indonesian names used by the frontend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurriculumComponents {
    #[serde(rename = "mata_pelajaran")]
    pub subject: String,
    #[serde(rename = "topik_utama")]
    pub main_topic: String,
    #[serde(rename = "kelas")]
    pub grade_or_phase: String,
    #[serde(rename = "kompetensi_awal")]
    pub prior_competency: String,
    #[serde(rename = "tujuan_pembelajaran")]
    pub learning_objectives: Vec<String>,
    #[serde(rename = "pemahaman_bermakna")]
    pub meaningful_understandings: Vec<String>,
    #[serde(rename = "profil_pelajar_pancasila")]
    pub pancasila_profile_dimensions: Vec<String>,
    #[serde(rename = "target_peserta_didik")]
    pub target_audience: String,
}
