use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]").expect("static regex is valid"));

/// Lowercases and drops everything outside `a-z0-9`.
///
/// "EIN / Employer ID:" -> "einemployerid"
pub fn normalize(text: &str) -> String {
    NON_ALNUM.replace_all(&text.to_lowercase(), "").into_owned()
}

/// True when every keyword (normalized) is a substring of the normalized text.
///
/// Matching is a plain AND with no scoring, so an empty keyword list always matches.
/// This survives extra whitespace, punctuation and casing drift in label text.
pub fn matches_all_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let haystack = normalize(text);
    keywords
        .iter()
        .all(|k| haystack.contains(normalize(k.as_ref()).as_str()))
}
