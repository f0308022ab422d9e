use unicode_normalization::UnicodeNormalization;

/// Turns a raw grammatical tag into lower-case tokens.
pub trait TagParser {
    /// NFKC-normalized, `!`-free, trimmed tag text. Case is preserved.
    fn clean(&self, tag: &str) -> String {
        let text: String = tag.nfkc().filter(|c| *c != '!').collect();
        text.trim().to_string()
    }

    /// Ordered tokens of the tag, empty for a missing or blank tag.
    fn tokenize(&self, tag: Option<&str>) -> Vec<String> {
        let Some(tag) = tag else {
            return Vec::new();
        };

        let cleaned = self.clean(tag);
        if cleaned.is_empty() {
            return Vec::new();
        }

        cleaned.split('.').map(str::to_lowercase).collect()
    }
}

pub struct DefaultTagParser;
impl TagParser for DefaultTagParser {}
