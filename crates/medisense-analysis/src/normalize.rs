/// Text prepared for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// Trimmed, lowercased, with whitespace runs collapsed to one space.
    pub text: String,
    /// True if any character lies outside ASCII. Informational only.
    pub has_non_latin_chars: bool,
}

impl NormalizedText {
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

pub fn normalize(raw: &str) -> NormalizedText {
    let text = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    NormalizedText {
        has_non_latin_chars: !raw.is_ascii(),
        text,
    }
}
