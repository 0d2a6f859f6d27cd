use once_cell::sync::OnceCell;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static WHITESPACE_PATTERN: OnceCell<Regex> = OnceCell::new();

fn whitespace_re() -> &'static Regex {
    WHITESPACE_PATTERN.get_or_init(|| Regex::new(r"\s+").unwrap())
}

pub struct NameNormalizer;

impl NameNormalizer {
    /// Cleans up a name arriving from free-form input before it reaches the
    /// ranking: NFC composition, trimmed ends, inner whitespace runs
    /// collapsed to single spaces. Matching against the ranking stays exact.
    pub fn normalize(name: &str) -> String {
        let composed: String = name.nfc().collect();
        whitespace_re().replace_all(composed.trim(), " ").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_collapses_whitespace() {
        assert_eq!(NameNormalizer::normalize("  Ada   Lovelace\t"), "Ada Lovelace");
    }

    #[test]
    fn composes_combining_characters() {
        // "e" followed by a combining acute accent composes to a single char
        assert_eq!(NameNormalizer::normalize("Ange\u{301}lique"), "Angélique");
    }

    #[test]
    fn leaves_clean_names_alone() {
        assert_eq!(NameNormalizer::normalize("Brian"), "Brian");
    }
}
