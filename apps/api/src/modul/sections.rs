//! Section table shared by the validator and the extractor.
//!
//! Both sides look headings up through [`Outline`], so a synonym added here is
//! recognized by validation and extraction at the same time.

use once_cell::sync::Lazy;
use regex::Regex;

/// Headings recognized in a Modul Ajar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ModulAjar,
    IdentitasModul,
    TujuanPembelajaran,
    KompetensiAwal,
    PemahamanBermakna,
    ProfilPelajarPancasila,
    TargetPesertaDidik,
    /// Any other known heading. Only used to end the previous section.
    Other,
}

const SECTION_SYNONYMS: &[(Section, &[&str])] = &[
    (Section::ModulAjar, &["modul ajar"]),
    (
        Section::IdentitasModul,
        &["identitas modul", "informasi umum", "identitas"],
    ),
    (
        Section::TujuanPembelajaran,
        &["tujuan pembelajaran", "tujuan belajar", "learning objectives"],
    ),
    (
        Section::KompetensiAwal,
        &[
            "kompetensi awal",
            "kemampuan awal",
            "kompetensi prasyarat",
            "pengetahuan prasyarat",
        ],
    ),
    (
        Section::PemahamanBermakna,
        &[
            "pemahaman bermakna",
            "pemahaman yang bermakna",
            "meaningful understanding",
        ],
    ),
    (
        Section::ProfilPelajarPancasila,
        &[
            "profil pelajar pancasila",
            "dimensi profil pelajar pancasila",
            "profil pancasila",
        ],
    ),
    (
        Section::TargetPesertaDidik,
        &[
            "target peserta didik",
            "sasaran peserta didik",
            "karakteristik peserta didik",
            "target audience",
        ],
    ),
    (
        Section::Other,
        &[
            "komponen inti",
            "komponen awal",
            "capaian pembelajaran",
            "pertanyaan pemantik",
            "persiapan pembelajaran",
            "kegiatan pembelajaran",
            "langkah pembelajaran",
            "kegiatan",
            "asesmen",
            "penilaian",
            "sarana dan prasarana",
            "media pembelajaran",
            "model pembelajaran",
            "materi pembelajaran",
            "materi ajar",
            "pengayaan dan remedial",
            "pengayaan",
            "remedial",
            "refleksi",
            "lampiran",
            "glosarium",
            "daftar pustaka",
            "deskripsi",
        ],
    ),
];

/// Scalar identity fields written as `Label: value` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Subject,
    Grade,
    Topic,
}

const LABEL_SYNONYMS: &[(Label, &[&str])] = &[
    (Label::Subject, &["mata pelajaran", "bidang studi", "mapel"]),
    (Label::Grade, &["fase", "kelas"]),
    (
        Label::Topic,
        &[
            "topik utama",
            "topik",
            "materi pokok",
            "materi",
            "judul modul",
            "judul",
            "tema",
        ],
    ),
];

/// Turns "tujuan pembelajaran" into an alternation branch tolerant of any run
/// of spaces or tabs between words.
fn phrase_alternation(phrases: &[&str]) -> String {
    phrases
        .iter()
        .map(|phrase| {
            phrase
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"[ \t]+")
        })
        .collect::<Vec<_>>()
        .join("|")
}

/// Decoration allowed around a heading phrase: markdown emphasis and hashes,
/// bullets, brackets and quotes.
const LEAD_DECORATION: &str = r#"(?:[#*_=|•▪◦●>\["'«]+[ \t]*)?"#;
const TRAIL_DECORATION: &str = r#"[ \t]*[#*_=|\]"'»]*"#;

/// `I.`, `iv)`, `1.`, `2)`, `(3)`, `a.`, `A.1`, `1.2.`
const NUMBERING: &str = r"(?:\(?(?:[ivxlcdm]{1,4}|\d{1,2}|[a-z])(?:[.)]|(?:\.\d{1,2})+\.?)[ \t]*)?";

/// Builds the heading matcher for one section. The phrase must open the line
/// once decoration and numbering are skipped, and must then be followed by
/// one of: end of line, `:` plus inline content, a spaced `-`/`–` plus inline
/// content, or a few words closed by `:` ("Tujuan Pembelajaran yang ingin
/// dicapai:"). A hyphen glued to the phrase ("Kegiatan-kegiatan") is a word,
/// not a separator.
fn heading_pattern(phrases: &[&str]) -> String {
    format!(
        concat!(
            r"(?i)^[ \t]*{lead}{num}{lead}(?:{phrases})(?:[ \t]*\([^)]*\))?",
            r"(?:",
            r"{trail}[ \t]*\.?[ \t]*",
            r"|{trail}[ \t]*:[ \t]*(?:[*_]+[ \t]*)?(?P<rest>.*?)[ \t]*",
            r"|[ \t]+[-–][ \t]+(?P<dash>.*?)[ \t]*",
            r"|[ \t]+[^:.!?\n]{{1,60}}?:[ \t]*(?:[*_]+[ \t]*)?(?P<tail>.*?)[ \t]*",
            r")$",
        ),
        lead = LEAD_DECORATION,
        num = NUMBERING,
        trail = TRAIL_DECORATION,
        phrases = phrase_alternation(phrases),
    )
}

static HEADING_PATTERNS: Lazy<Vec<(Section, Regex)>> = Lazy::new(|| {
    SECTION_SYNONYMS
        .iter()
        .map(|(section, phrases)| {
            (
                *section,
                Regex::new(&heading_pattern(phrases)).expect("heading pattern must compile"),
            )
        })
        .collect()
});

static LABEL_PATTERNS: Lazy<Vec<(Label, Regex)>> = Lazy::new(|| {
    LABEL_SYNONYMS
        .iter()
        .map(|(label, phrases)| {
            let pattern = format!(
                r"(?im)^[ \t]*(?:[•\-*▪◦●][ \t]*)?(?:{})(?:[ \t]*/[ \t]*[\p{{L}} ]+?)?[ \t]*:[ \t]*(?P<value>.*?)[ \t]*$",
                phrase_alternation(phrases)
            );
            (
                *label,
                Regex::new(&pattern).expect("label pattern must compile"),
            )
        })
        .collect()
});

static HEADER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)modul\s+ajar").expect("header pattern must compile"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

/// Unifies `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Collapses every whitespace run to one space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// True if the "MODUL AJAR" token appears anywhere in `text` (a whole
/// document or a single line), in any case and with any whitespace between
/// the words.
pub fn has_header_token(text: &str) -> bool {
    HEADER_TOKEN.is_match(text)
}

/// A heading line: which section it opens and any content after its colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    pub section: Section,
    pub inline: &'a str,
}

pub fn match_heading(line: &str) -> Option<Heading<'_>> {
    HEADING_PATTERNS.iter().find_map(|(section, re)| {
        re.captures(line).map(|caps| Heading {
            section: *section,
            inline: ["rest", "dash", "tail"]
                .iter()
                .find_map(|name| caps.name(name))
                .map(|m| m.as_str())
                .unwrap_or(""),
        })
    })
}

/// Value of the first non-empty `label: value` line for `label`.
pub fn label_value(text: &str, label: Label) -> Option<String> {
    let re = LABEL_PATTERNS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, re)| re)?;

    re.captures_iter(text)
        .filter_map(|caps| caps.name("value"))
        .map(|m| collapse_whitespace(m.as_str()))
        .find(|value| !value.is_empty())
}

pub fn is_label_line(line: &str) -> bool {
    LABEL_PATTERNS.iter().any(|(_, re)| re.is_match(line))
}

/// The lines of a section: inline heading content plus the lines up to the
/// next recognized heading.
#[derive(Debug, Clone, Copy)]
pub struct SectionBody<'a> {
    pub inline: &'a str,
    pub lines: &'a [&'a str],
}

/// Line index of every heading in a document, computed once per document.
#[derive(Debug)]
pub struct Outline<'a> {
    lines: Vec<&'a str>,
    headings: Vec<(usize, Heading<'a>)>,
}

impl<'a> Outline<'a> {
    /// `text` is expected to have normalized line endings.
    pub fn parse(text: &'a str) -> Self {
        let lines: Vec<&'a str> = text.lines().collect();
        let headings = lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| match_heading(line).map(|h| (idx, h)))
            .collect();
        Self { lines, headings }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn has(&self, section: Section) -> bool {
        self.position(section).is_some()
    }

    /// Index of the line the first occurrence of `section` starts on.
    pub fn position(&self, section: Section) -> Option<usize> {
        self.headings
            .iter()
            .find(|(_, h)| h.section == section)
            .map(|(idx, _)| *idx)
    }

    /// Body of the first occurrence of `section`. Later repeats are ignored.
    pub fn section(&self, section: Section) -> Option<SectionBody<'_>> {
        let (slot, (start, heading)) = self
            .headings
            .iter()
            .enumerate()
            .find(|(_, (_, h))| h.section == section)?;

        let end = self
            .headings
            .get(slot + 1)
            .map(|(idx, _)| *idx)
            .unwrap_or(self.lines.len());

        Some(SectionBody {
            inline: heading.inline,
            lines: &self.lines[start + 1..end],
        })
    }
}
