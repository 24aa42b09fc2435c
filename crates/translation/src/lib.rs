//! Foresti Translation - localized dashboard strings.
//!
//! Every user-facing label in the dashboard is addressed by a
//! [`TranslationKey`] and resolved against a per-locale table. The tables
//! are exhaustive `match` expressions, so a key without a string in some
//! locale is a compile error rather than a silent fallback.

mod en;
mod keys;
mod locale;
mod pt;

pub use keys::TranslationKey;
pub use locale::{Locale, LocaleParseError};

/// Resolves a key to its localized string.
pub fn translate(locale: Locale, key: TranslationKey) -> &'static str {
    match locale {
        Locale::En => en::text(key),
        Locale::Pt => pt::text(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_text_in_every_locale() {
        for &key in TranslationKey::ALL {
            for locale in [Locale::En, Locale::Pt] {
                let text = translate(locale, key);
                assert!(
                    !text.is_empty(),
                    "empty translation for {:?} in {:?}",
                    key,
                    locale
                );
            }
        }
    }

    #[test]
    fn locales_disagree_on_translated_labels() {
        // Sanity check that the tables are not copies of each other.
        assert_ne!(
            translate(Locale::En, TranslationKey::Loading),
            translate(Locale::Pt, TranslationKey::Loading)
        );
        assert_ne!(
            translate(Locale::En, TranslationKey::TotalInvested),
            translate(Locale::Pt, TranslationKey::TotalInvested)
        );
    }

    #[test]
    fn brand_name_is_locale_invariant() {
        assert_eq!(
            translate(Locale::En, TranslationKey::ForestiFi),
            translate(Locale::Pt, TranslationKey::ForestiFi)
        );
    }
}
