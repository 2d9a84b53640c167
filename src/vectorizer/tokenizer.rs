/// Split raw text into normalized tokens.
///
/// Splits on whitespace, lower-cases, strips every character outside the
/// ASCII alphabet and drops tokens of length <= 1.
/// Blank input yields an empty sequence.
///
/// # Examples
/// ```
/// use tf_idf_cluster::vectorizer::tokenizer::tokenize;
/// assert_eq!(tokenize("The cat's HAT, a hat!"), vec!["the", "cats", "hat", "hat"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize)
        .filter(|token| token.len() > 1)
        .collect()
}

/// Normalize a single whitespace-delimited word.
/// Lower-cases first, since some letters only become ASCII once lowered
/// (`'İ'` -> `"i\u{307}"`, Kelvin sign -> `'k'`). The result may be empty.
#[inline]
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn strips_digits_inside_words() {
        assert_eq!(tokenize("win32 x86_64 mp3"), vec!["win", "mp"]);
    }

    #[test]
    fn drops_short_tokens() {
        assert_eq!(tokenize("a I x 1 ab"), vec!["ab"]);
        // "a." -> "a" is dropped, "--" -> "" is dropped
        assert_eq!(tokenize("a. -- ok"), vec!["ok"]);
    }

    #[test]
    fn non_ascii_letters_are_removed() {
        assert_eq!(tokenize("café naïve über"), vec!["caf", "nave", "ber"]);
    }

    #[test]
    fn lowercasing_happens_before_stripping() {
        assert_eq!(tokenize("İSTANBUL \u{212A}ELVIN"), vec!["istanbul", "kelvin"]);
        assert_eq!(normalize("İ"), "i");
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n  ").is_empty());
    }

    #[test]
    fn keeps_order_and_duplicates() {
        assert_eq!(tokenize("dog cat dog"), vec!["dog", "cat", "dog"]);
    }
}
