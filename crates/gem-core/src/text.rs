// crates/gem-core/src/text.rs

//! # Location Text Normalization
//!
//! Turns whatever a user typed into a spreadsheet cell into the canonical
//! form that gazetteer names are indexed under.

/// Normalize a raw location string for lookup.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII, dropping characters without an ASCII
///    equivalent (e.g. `Łódź` -> `Lodz`)
/// 2\) Title-case every token: the first letter of each whitespace or comma
///    delimited token is upper-cased, every other letter lower-cased
/// 3\) Strip everything that is not alphanumeric, whitespace or a comma
/// 4\) Trim surrounding whitespace
///
/// Folding runs before casing so that multi-letter expansions such as
/// `Æ` -> `AE` end up in canonical case, which keeps the function idempotent.
/// Commas are never produced by folding; only commas from the input survive.
///
/// # Examples
///
/// ```rust
/// use gem_core::text::normalize;
///
/// assert_eq!(normalize("  st. louis, mo "), "St Louis, Mo");
/// assert_eq!(normalize("ZÜRICH"), "Zurich");
/// assert_eq!(normalize(&normalize("São Paulo!")), normalize("São Paulo!"));
/// ```
pub fn normalize(raw: &str) -> String {
    let folded = fold_ascii(raw);
    let titled = title_case(&folded);
    strip_punctuation(&titled).trim().to_string()
}

/// Best-effort transliteration to ASCII using `deunicode`.
///
/// Characters with no ASCII equivalent are dropped. A transliteration that
/// would introduce a comma (e.g. the full-width `，`) is dropped as well, since
/// the comma is the structural "Name, Region" separator.
pub fn fold_ascii(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch.is_ascii() {
            out.push(ch);
            continue;
        }
        if let Some(ascii) = deunicode::deunicode_char(ch) {
            out.extend(ascii.chars().filter(|c| *c != ','));
        }
    }
    out
}

/// Upper-case the first letter of each token and lower-case the rest.
///
/// Tokens are delimited by ASCII whitespace and commas. Non-letters inside a token
/// are kept as they are and do not count as the "first letter", so
/// `-x` becomes `-X` and `1st` becomes `1St`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut seen_letter = false;
    for ch in s.chars() {
        if ch.is_ascii_whitespace() || ch == ',' {
            seen_letter = false;
            out.push(ch);
        } else if ch.is_alphabetic() {
            if seen_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
                seen_letter = true;
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Drop every character that is not ASCII alphanumeric, whitespace or `,`.
pub fn strip_punctuation(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || *c == ',')
        .collect()
}

/// Returns `true` if `token` appears in `s` as a standalone word.
///
/// Word boundaries are any non-alphanumeric characters, and the comparison
/// ignores ASCII case. `dc` is found in `"Washington, DC"` but not in
/// `"Dcville"`.
pub fn has_token(s: &str, token: &str) -> bool {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .any(|t| t.eq_ignore_ascii_case(token))
}

/// Case-insensitive substring test over ASCII text.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_title_cases_tokens() {
        assert_eq!(normalize("springfield"), "Springfield");
        assert_eq!(normalize("NEW YORK"), "New York");
        assert_eq!(normalize("portland, oregon"), "Portland, Oregon");
    }

    #[test]
    fn normalize_folds_diacritics() {
        assert_eq!(normalize("Zürich"), "Zurich");
        assert_eq!(normalize("łódź"), "Lodz");
        assert_eq!(normalize("Ærøskøbing"), "Aeroskobing");
    }

    #[test]
    fn normalize_strips_punctuation_but_keeps_commas() {
        assert_eq!(normalize("St. Louis, MO."), "St Louis, Mo");
        assert_eq!(normalize("Washington, D.C."), "Washington, Dc");
        assert_eq!(normalize("o'fallon"), "Ofallon");
    }

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize("   Boise  "), "Boise");
        assert_eq!(normalize("\tSalem\n"), "Salem");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalize_never_introduces_commas() {
        assert!(!normalize("Paris，France").contains(','));
        assert_eq!(normalize("Tulsa\u{0}"), "Tulsa");
    }

    #[test]
    fn normalize_is_idempotent_on_samples() {
        for s in ["-x", "1st street", "Ærø", "Straße", "san josé, ca", "北京", "A.B.C."] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn title_case_uses_first_letter_of_token() {
        assert_eq!(title_case("-x"), "-X");
        assert_eq!(title_case("1st"), "1St");
        assert_eq!(title_case("springfield,il"), "Springfield,Il");
    }

    #[test]
    fn has_token_requires_word_boundary() {
        assert!(has_token("Washington, Dc", "dc"));
        assert!(has_token("Washington DC", "dc"));
        assert!(!has_token("Washington Dcville", "dc"));
        assert!(!has_token("Washington", "dc"));
    }

    #[test]
    fn contains_ignore_case_matches_substrings() {
        assert!(contains_ignore_case("Washingtonville", "WASHINGTON"));
        assert!(!contains_ignore_case("Seattle", "washington"));
    }
}
