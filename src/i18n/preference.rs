//! Persisting and resolving the user's language preference.

use std::collections::HashMap;

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use time::Duration;

use super::{Language, SUPPORTED_LANGUAGES};

/// The key the chosen locale code is stored under.
pub const PREFERENCE_KEY: &str = "preferred-language";

/// How long the language cookie lives.
const PREFERENCE_COOKIE_DURATION: Duration = Duration::days(365);

/// Durable key-value storage on the client's side.
pub trait PreferenceStorage {
    /// Get the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

impl PreferenceStorage for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), value.to_owned());
    }
}

/// Preference storage backed by the request's cookies.
///
/// Changes are only sent to the client if [CookieStorage::into_jar] is
/// returned as part of the response.
#[derive(Debug, Clone)]
pub struct CookieStorage {
    jar: CookieJar,
}

impl CookieStorage {
    /// Wrap the cookies sent with a request.
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    /// The cookie jar including any changes.
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl PreferenceStorage for CookieStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|cookie| cookie.value().to_owned())
    }

    fn set(&mut self, key: &str, value: &str) {
        let cookie = Cookie::build((key.to_owned(), value.to_owned()))
            .path("/")
            .max_age(PREFERENCE_COOKIE_DURATION)
            .same_site(SameSite::Lax)
            .http_only(true);

        self.jar = self.jar.clone().add(cookie);
    }
}

/// Resolve the language to display.
///
/// A valid stored preference wins, then the first entry of the
/// `Accept-Language` header whose primary subtag matches a supported
/// language, then the fallback language.
pub fn current_language(
    storage: &impl PreferenceStorage,
    accept_language: Option<&str>,
) -> Language {
    if let Some(language) = storage
        .get(PREFERENCE_KEY)
        .and_then(|code| Language::from_code(&code))
    {
        return language;
    }

    accept_language
        .and_then(detect_language)
        .unwrap_or_default()
}

/// Store `code` as the preferred language if it is supported.
///
/// Returns whether the preference was stored. Unsupported codes are ignored.
pub fn set_language_preference(storage: &mut impl PreferenceStorage, code: &str) -> bool {
    match Language::from_code(code) {
        Some(language) => {
            storage.set(PREFERENCE_KEY, language.code());
            true
        }
        None => {
            tracing::debug!("Ignoring unsupported language preference {code:?}");
            false
        }
    }
}

fn detect_language(accept_language: &str) -> Option<Language> {
    accept_language
        .split(',')
        .filter_map(|entry| entry.split(';').next())
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && *tag != "*")
        .find_map(|tag| {
            let primary = tag.split('-').next().unwrap_or(tag);

            SUPPORTED_LANGUAGES
                .iter()
                .find(|(code, _)| {
                    code.split('-')
                        .next()
                        .is_some_and(|supported| supported.eq_ignore_ascii_case(primary))
                })
                .and_then(|(code, _)| Language::from_code(code))
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum_extra::extract::{CookieJar, cookie::Cookie};

    use super::{
        CookieStorage, PREFERENCE_KEY, PreferenceStorage, current_language,
        set_language_preference,
    };

    #[test]
    fn stored_preference_wins() {
        let mut storage = HashMap::new();
        storage.insert(PREFERENCE_KEY.to_owned(), "en-US".to_owned());

        let language = current_language(&storage, Some("zh-CN,zh;q=0.9"));

        assert_eq!(language.code(), "en-US");
    }

    #[test]
    fn invalid_stored_preference_is_skipped() {
        let mut storage = HashMap::new();
        storage.insert(PREFERENCE_KEY.to_owned(), "xx-XX".to_owned());

        let language = current_language(&storage, Some("zh-TW"));

        assert_eq!(language.code(), "zh-CN");
    }

    #[test]
    fn detects_language_from_accept_language() {
        let storage = HashMap::new();

        assert_eq!(current_language(&storage, Some("ja")).code(), "ja-JP");
        assert_eq!(
            current_language(&storage, Some("fr-FR,en-GB;q=0.8")).code(),
            "en-US"
        );
    }

    #[test]
    fn falls_back_to_japanese() {
        let storage = HashMap::new();

        assert_eq!(current_language(&storage, None).code(), "ja-JP");
        assert_eq!(current_language(&storage, Some("de-DE")).code(), "ja-JP");
        assert_eq!(current_language(&storage, Some("*")).code(), "ja-JP");
    }

    #[test]
    fn set_preference_stores_supported_codes_only() {
        let mut storage: HashMap<String, String> = HashMap::new();

        assert!(!set_language_preference(&mut storage, "fr-FR"));
        assert_eq!(storage.get(PREFERENCE_KEY), None);

        assert!(set_language_preference(&mut storage, "zh-cn"));
        assert_eq!(
            PreferenceStorage::get(&storage, PREFERENCE_KEY),
            Some("zh-CN".to_owned())
        );
    }

    #[test]
    fn cookie_storage_round_trips_through_the_jar() {
        let jar = CookieJar::new().add(Cookie::new(PREFERENCE_KEY, "en-US"));
        let mut storage = CookieStorage::new(jar);

        assert_eq!(storage.get(PREFERENCE_KEY), Some("en-US".to_owned()));

        storage.set(PREFERENCE_KEY, "ja-JP");
        let jar = storage.into_jar();

        let cookie = jar.get(PREFERENCE_KEY).unwrap();
        assert_eq!(cookie.value(), "ja-JP");
        assert_eq!(cookie.path(), Some("/"));
    }
}
