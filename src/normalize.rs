//! Dungeon-name canonicalization.
//!
//! Raider.IO, the bundled catalog and user-edited catalogs spell the same
//! dungeon with different apostrophes, dashes, accents and punctuation.
//! [`normalize`] folds all of those into one [`CanonicalKey`].

use std::fmt;

use unicode_normalization::UnicodeNormalization;

/// Lookup key derived from a display name. Contains only `[a-z0-9' -]`,
/// never starts or ends with a space and never holds two spaces in a row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

const COMBINING_DIACRITICS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

fn fold_apostrophe(c: char) -> char {
    match c {
        '\u{2019}' | '\u{2018}' | '\u{0060}' | '\u{02BB}' | '\u{02BC}' | '\u{2032}' => '\'',
        other => other,
    }
}

fn fold_dash(c: char) -> char {
    match c {
        '\u{2013}' | '\u{2014}' | '\u{2212}' | '\u{2010}' | '\u{2011}' => '-',
        other => other,
    }
}

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\'' || c == '-'
}

/// Canonicalize a free-text dungeon name.
///
/// The input is NFKD-decomposed and stripped of combining accents; curly
/// quotes and dash variants fold to their ASCII forms; every other
/// character outside letters, digits, `'` and `-` becomes a separator.
/// Separator runs collapse to a single space, the ends are trimmed and the
/// result is lowercased. Total over all strings and idempotent.
pub fn normalize(input: &str) -> CanonicalKey {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;

    for c in input.nfkd() {
        if COMBINING_DIACRITICS.contains(&c) {
            continue;
        }
        let c = fold_dash(fold_apostrophe(c));
        if is_kept(c) {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_space = true;
        }
    }

    CanonicalKey(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_yields_empty_key() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \t\n ").is_empty());
        assert!(normalize(":::").is_empty());
    }

    #[test]
    fn hyphenated_name_keeps_hyphen_and_lowercases() {
        assert_eq!(normalize("Eco-Dome Al'dani").as_str(), "eco-dome al'dani");
        assert_eq!(normalize("Eco-Dome Al'dani"), normalize("eco-dome al'dani"));
    }

    #[test]
    fn colon_becomes_single_space() {
        assert_eq!(
            normalize("Tazavesh: So'leah's Gambit").as_str(),
            "tazavesh so'leah's gambit"
        );
        assert_eq!(
            normalize("Ara-Kara, City of Echoes").as_str(),
            "ara-kara city of echoes"
        );
    }

    #[test]
    fn apostrophe_variants_fold_together() {
        let plain = normalize("Al'dani");
        for variant in [
            "Al\u{2019}dani",
            "Al\u{2018}dani",
            "Al`dani",
            "Al\u{02BB}dani",
            "Al\u{02BC}dani",
            "Al\u{2032}dani",
        ] {
            assert_eq!(normalize(variant), plain, "variant {variant:?}");
        }
    }

    #[test]
    fn dash_variants_fold_together() {
        let plain = normalize("Eco-Dome");
        for variant in [
            "Eco\u{2013}Dome",
            "Eco\u{2014}Dome",
            "Eco\u{2212}Dome",
            "Eco\u{2010}Dome",
            "Eco\u{2011}Dome",
        ] {
            assert_eq!(normalize(variant), plain, "variant {variant:?}");
        }
    }

    #[test]
    fn accents_are_stripped_without_splitting_words() {
        assert_eq!(normalize("Séthékk Hálls").as_str(), "sethekk halls");
        assert_eq!(normalize("Ahn'kahe\u{0301}t").as_str(), "ahn'kahet");
    }

    #[test]
    fn compatibility_forms_decompose() {
        // Fullwidth letters and ligatures reduce to ASCII under NFKD.
        assert_eq!(normalize("ＴＨＥ ﬁnal").as_str(), "the final");
    }

    #[test]
    fn punctuation_noise_collapses() {
        assert_eq!(
            normalize("  Operation:   Floodgate!! ").as_str(),
            "operation floodgate"
        );
        assert_eq!(normalize("Halls\tof\nAtonement").as_str(), "halls of atonement");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in any::<String>()) {
            let once = normalize(&s);
            let twice = normalize(once.as_str());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn output_stays_in_canonical_alphabet(s in any::<String>()) {
            let key = normalize(&s);
            let text = key.as_str();
            let in_alphabet = text.chars().all(|c| {
                c.is_ascii_lowercase() || c.is_ascii_digit() || c == '\'' || c == '-' || c == ' '
            });
            prop_assert!(in_alphabet);
            prop_assert!(!text.starts_with(' '));
            prop_assert!(!text.ends_with(' '));
            prop_assert!(!text.contains("  "));
        }

        #[test]
        fn case_does_not_change_key(s in "[A-Za-z' -]{0,24}") {
            prop_assert_eq!(normalize(&s.to_ascii_uppercase()), normalize(&s.to_ascii_lowercase()));
        }
    }
}
