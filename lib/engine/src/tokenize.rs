/// Split text into indexable tokens.
///
/// Splits on whitespace and ASCII punctuation and drops single-char
/// tokens. Case is preserved here: case folding is the corpus
/// converter's responsibility, so the `caseSensitive` policy knob
/// works end to end.
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .map(|s| s.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|s| !s.is_empty() && s.len() > 1)
        .collect()
}
