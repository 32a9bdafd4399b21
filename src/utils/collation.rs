//! Locale-aware text comparison used when ordering table cells.

use std::cmp::Ordering;

use icu::collator::{
    Collator, CollatorBorrowed, CollatorPreferences, options::CollatorOptions,
};
use icu::locale::locale;
use lazy_static::lazy_static;

lazy_static! {
    static ref GERMAN_COLLATOR: CollatorBorrowed<'static> = {
        use icu::collator::preferences::CollationNumericOrdering;

        let mut prefs = CollatorPreferences::from(locale!("de"));
        prefs.numeric_ordering = Some(CollationNumericOrdering::True);

        Collator::try_new(prefs, CollatorOptions::default())
            .expect("baked-in collation data covers the de locale")
    };
}

/// Compares two strings with German collation rules and numeric ordering
/// enabled, so `"Item 2"` sorts before `"Item 10"`.
#[inline]
pub fn german_compare(a: &str, b: &str) -> Ordering {
    GERMAN_COLLATOR.compare(a, b)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn umlauts_follow_their_base_letter() {
        let mut words = vec!["Banane", "Apfel", "Äpfel"];
        words.sort_by(|a, b| german_compare(a, b));
        assert_eq!(words, vec!["Apfel", "Äpfel", "Banane"]);
    }

    #[test]
    fn embedded_numbers_compare_by_value() {
        assert_eq!(german_compare("Item 2", "Item 10"), Ordering::Less);
        assert_eq!(german_compare("Item 10", "Item 2"), Ordering::Greater);
        assert_eq!(german_compare("Item 2", "Item 2"), Ordering::Equal);
    }

    #[test]
    fn empty_strings_sort_first() {
        assert_eq!(german_compare("", "Apfel"), Ordering::Less);
        assert_eq!(german_compare("Apfel", ""), Ordering::Greater);
        assert_eq!(german_compare("", ""), Ordering::Equal);
    }

    #[test]
    fn sharp_s_matches_double_s_ordering() {
        // DIN 5007-1 treats ß like ss at the primary level.
        let mut words = vec!["Strasze", "Straße", "Strasse"];
        words.sort_by(|a, b| german_compare(a, b));
        assert_eq!(words[2], "Strasze");
    }
}
