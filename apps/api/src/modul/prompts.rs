// Fixed template blocks for the question-generation prompt.
// Dynamic parts (components, stage plan) are assembled in composer.rs.

/// Hedging terms a generated question must never contain.
pub const FORBIDDEN_HEDGING_TERMS: &[&str] = &[
    "mungkin",
    "kemungkinan",
    "biasanya",
    "umumnya",
    "sebaiknya",
    "dapat berupa",
    "salah satunya adalah",
    "antara lain",
    "misalnya",
    "seharusnya",
    "lebih baik jika",
    "direkomendasikan",
    "disarankan",
    "beberapa",
    "banyak",
    "sedikit",
];

/// Qualities every generated question must have, as (name, definition).
pub const REQUIRED_QUALITIES: &[(&str, &str)] = &[
    ("DEFINITIF", "Tidak ada ruang interpretasi ganda"),
    (
        "VERIFIABLE",
        "Jawaban dapat dibuktikan benar dengan merujuk materi pada Modul Ajar",
    ),
    (
        "JAWABAN TUNGGAL",
        "Tepat satu opsi benar; tiga opsi lainnya salah secara pasti",
    ),
    (
        "SPESIFIK",
        "Soal menyebut konsep, istilah, atau kondisi secara eksplisit",
    ),
    (
        "OBJEKTIF",
        "Kebenaran jawaban tidak bergantung pada pendapat pribadi",
    ),
];

/// Markers around the only region of the prompt allowed to name hedging terms.
pub const RULE_BLOCK_OPEN: &str = "### ATURAN KHUSUS ANTI-AMBIGUITAS ###";
pub const RULE_BLOCK_CLOSE: &str = "### AKHIR ATURAN KHUSUS ANTI-AMBIGUITAS ###";

pub const FORBIDDEN_HEADER: &str =
    "LARANGAN KERAS - teks soal, opsi jawaban, dan penjelasan TIDAK BOLEH memuat kata atau frasa berikut:";

pub const REQUIRED_HEADER: &str =
    "WAJIB: Gunakan kata-kata PASTI dan DEFINITIF. Setiap soal memenuhi kualitas berikut:";

/// Lives inside the rule block: these examples quote hedging terms on purpose.
pub const NEGATIVE_EXAMPLES: &str = r#"CONTOH SOAL YANG SALAH (AMBIGU & TIDAK JELAS):
1. "Apa yang mungkin terjadi jika kabel jaringan terputus?"
   -> Memuat "mungkin"; lebih dari satu jawaban dapat dibenarkan.
2. "Protokol apa yang biasanya digunakan di internet?"
   -> "biasanya" membuka lebih dari satu jawaban benar.
3. "Sebutkan beberapa perangkat jaringan!"
   -> "beberapa" tidak terukur dan bukan format pilihan ganda.
4. "Langkah apa yang sebaiknya dilakukan saat jaringan lambat?"
   -> "sebaiknya" meminta pendapat, bukan fakta yang dapat diverifikasi."#;

pub const POSITIVE_EXAMPLES: &str = r#"CONTOH SOAL YANG BENAR (DEFINITIF & JELAS):
1. "Perangkat jaringan yang meneruskan paket data antarjaringan berdasarkan alamat IP adalah ..."
   A. Router   B. Switch   C. Hub   D. Repeater   -> Jawaban: A
2. "Topologi jaringan yang menghubungkan setiap komputer ke satu perangkat pusat disebut ..."
   A. Topologi bus   B. Topologi star   C. Topologi ring   D. Topologi mesh   -> Jawaban: B
3. "Protokol yang digunakan browser untuk meminta halaman web terenkripsi adalah ..."
   A. FTP   B. SMTP   C. HTTPS   D. DNS   -> Jawaban: C
Contoh di atas menunjukkan BENTUK kalimat soal. Isi soal WAJIB mengikuti mata pelajaran dan topik Modul Ajar."#;

pub const WRITING_GUIDELINES: &str = r#"PEDOMAN PENULISAN SOAL DEFINITIF:
1. Awali soal dengan fakta atau kondisi yang jelas, lalu ajukan tepat satu pertanyaan.
2. Gunakan pola kalimat yang menuntut satu jawaban: "... adalah ...", "... disebut ...", "Yang tepat adalah ...".
3. Keempat opsi jawaban sejenis, sepadan panjangnya, dan tidak saling tumpang tindih.
4. Jangan gunakan opsi "semua benar" atau "semua salah".
5. Jangan menyebut ID, nomor urut, atau nama file dari dokumen sumber.
6. Gunakan bahasa Indonesia baku yang mudah dipahami peserta didik pada fase/kelas tersebut."#;

pub const OUTPUT_FORMAT: &str = r#"FORMAT JAWABAN:
Berikan respon HANYA berupa JSON array tanpa komentar atau teks tambahan. Pastikan JSON valid:
[
  {
    "level": 1,
    "question_type": "multiple_choice",
    "soal": "Teks soal yang definitif",
    "options": ["Opsi A", "Opsi B", "Opsi C", "Opsi D"],
    "jawaban_benar": "Opsi A",
    "p": 0.95,
    "explanation": "Alasan singkat mengapa opsi tersebut benar"
  }
]"#;

pub const CHECKLIST_HEADER: &str = "CHECKLIST KUALITAS SEBELUM MENGIRIM JAWABAN:";

pub const CHECKLIST_PER_QUESTION: &str = r#"VALIDASI SETIAP SOAL:
[ ] Tidak ada satu pun kata dari daftar LARANGAN KERAS pada soal, opsi, maupun penjelasan.
[ ] Tepat satu opsi benar, dan "jawaban_benar" sama persis dengan salah satu isi "options".
[ ] Soal mengukur minimal satu Tujuan Pembelajaran atau Pemahaman Bermakna di atas.
[ ] Tingkat kesulitan dan nilai "p" sesuai dengan level soal.
[ ] JSON valid: tanpa koma di akhir elemen dan tanpa blok kode markdown."#;

pub const KEY_PRINCIPLES: &str = r#"PRINSIP KUNCI YANG HARUS DITERAPKAN:
- DEFINITIF: satu soal, satu jawaban benar.
- VERIFIABLE: kebenaran jawaban dapat ditelusuri ke Modul Ajar.
- RELEVAN: setiap soal terhubung dengan komponen Modul Ajar di atas.
Perbaiki setiap soal yang gagal pada checklist sebelum mengirim jawaban."#;

pub const UNAVAILABLE: &str = "Tidak tersedia";
