//! Column and page text translations.
//!
//! Lookups resolve the requested locale first, then [FALLBACK_LOCALE], and
//! finally return the key itself, so a translation never fails.

mod preference;
mod tables;

pub use preference::{
    CookieStorage, PREFERENCE_KEY, current_language, set_language_preference,
};
pub use tables::SUPPORTED_LANGUAGES;

use tables::{COLUMN_TRANSLATIONS, Entry, TEXT_TRANSLATIONS};

/// The locale used when the requested locale has no translation.
pub const FALLBACK_LOCALE: &str = "ja-JP";

/// Translate a column name such as `AMOUNT` into `locale`.
///
/// Column names are matched ignoring ASCII case.
pub fn translate_column<'a>(column: &'a str, locale: &str) -> &'a str {
    resolve(COLUMN_TRANSLATIONS, column, locale)
}

/// Translate a page text key such as `TOTAL_AMOUNT` into `locale`.
pub fn translate_text<'a>(key: &'a str, locale: &str) -> &'a str {
    resolve(TEXT_TRANSLATIONS, key, locale)
}

fn resolve<'a>(table: &[Entry], key: &'a str, locale: &str) -> &'a str {
    let Some((_, translations)) = table
        .iter()
        .find(|(entry_key, _)| entry_key.eq_ignore_ascii_case(key))
    else {
        return key;
    };

    let lookup = |wanted: &str| -> Option<&'a str> {
        translations
            .iter()
            .find(|(code, _)| *code == wanted)
            .map(|(_, text)| *text)
    };

    lookup(locale).or_else(|| lookup(FALLBACK_LOCALE)).unwrap_or(key)
}

/// The supported locale codes and their native display names.
pub fn supported_languages() -> &'static [(&'static str, &'static str)] {
    SUPPORTED_LANGUAGES
}

/// A supported UI language.
///
/// Pass it to rendering code instead of reading the preference globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
    name: &'static str,
}

impl Language {
    /// The supported language for `code`, ignoring ASCII case.
    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(supported, _)| supported.eq_ignore_ascii_case(code.trim()))
            .map(|&(code, name)| Self { code, name })
    }

    /// The language used when nothing else applies.
    pub fn fallback() -> Self {
        Self::from_code(FALLBACK_LOCALE).unwrap_or(Self {
            code: FALLBACK_LOCALE,
            name: FALLBACK_LOCALE,
        })
    }

    /// The locale code, e.g. "en-US".
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The native name of the language, e.g. "日本語".
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Shorthand for [translate_text] in this language.
    pub fn text<'a>(&self, key: &'a str) -> &'a str {
        translate_text(key, self.code)
    }

    /// Shorthand for [translate_column] in this language.
    pub fn column<'a>(&self, column: &'a str) -> &'a str {
        translate_column(column, self.code)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        FALLBACK_LOCALE, Language, SUPPORTED_LANGUAGES, translate_column, translate_text,
    };

    #[test]
    fn translates_into_the_requested_locale() {
        assert_eq!(translate_column("AMOUNT", "en-US"), "Amount");
        assert_eq!(translate_column("AMOUNT", "zh-CN"), "金额");
        assert_eq!(translate_text("TOTAL_AMOUNT", "en-US"), "Total Amount");
    }

    #[test]
    fn unsupported_locale_falls_back_to_japanese() {
        assert_eq!(translate_column("AMOUNT", "fr-FR"), "金額");
        assert_eq!(translate_text("REFRESH_BUTTON", "fr-FR"), "データ更新");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        assert_eq!(translate_column("extra1", "en-US"), "extra1");
        assert_eq!(translate_text("NOT_A_KEY", "fr-FR"), "NOT_A_KEY");
    }

    #[test]
    fn column_keys_ignore_case() {
        assert_eq!(translate_column("payment_date", "en-US"), "Payment Date");
        assert_eq!(translate_column("Comment", "ja-JP"), "備考");
    }

    #[test]
    fn namespaces_are_independent() {
        assert_eq!(translate_text("AMOUNT", "en-US"), "AMOUNT");
        assert_eq!(translate_column("TOTAL_AMOUNT", "en-US"), "TOTAL_AMOUNT");
    }

    #[test]
    fn every_supported_language_is_resolvable() {
        for (code, name) in SUPPORTED_LANGUAGES {
            let language = Language::from_code(code).unwrap();

            assert_eq!(language.code(), *code);
            assert_eq!(language.name(), *name);
        }

        assert_eq!(Language::from_code("en-us").unwrap().code(), "en-US");
        assert_eq!(Language::from_code("fr-FR"), None);
        assert_eq!(Language::default().code(), FALLBACK_LOCALE);
    }
}
