//! Text normalization applied to every line before pattern matching.
//!
//! OCR output often arrives as UTF-8 that was decoded as Latin-1 somewhere
//! upstream (`matrÃ­cula` instead of `matrícula`). [`normalize`] undoes that
//! when possible and then strips the accents from vowels so the patterns
//! only have to deal with plain ASCII labels.

/// Repair mis-decoded text and strip accented vowels.
pub fn normalize(text: &str) -> String {
    strip_accents(&fix_encoding(text))
}

/// Re-decode text that was read as Latin-1 but was really UTF-8.
///
/// Every char must fit in a single Latin-1 byte and the resulting bytes must
/// be valid UTF-8; otherwise the input is returned unchanged.
pub fn fix_encoding(text: &str) -> String {
    let bytes: Option<Vec<u8>> = text.chars().map(|c| u8::try_from(c).ok()).collect();

    bytes
        .and_then(|b| String::from_utf8(b).ok())
        .unwrap_or_else(|| text.to_string())
}

/// Replace `á é í ó ú` (either case) with the plain vowel.
pub fn strip_accents(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            'Á' => 'A',
            'É' => 'E',
            'Í' => 'I',
            'Ó' => 'O',
            'Ú' => 'U',
            other => other,
        })
        .collect()
}
