use axum::{Form, http::StatusCode};
use axum_extra::extract::CookieJar;
use axum_htmx::HxRefresh;
use serde::{Deserialize, Serialize};

use crate::i18n::{CookieStorage, set_language_preference};

/// The form sent by the language selector.
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageForm {
    /// A locale code, e.g. "en-US".
    pub language: String,
}

/// Route handler for changing the preferred language.
///
/// Supported languages are stored in the preference cookie, anything else is
/// ignored. The page is refreshed either way so it re-renders in the
/// preferred language.
pub async fn post_language(
    jar: CookieJar,
    Form(form): Form<LanguageForm>,
) -> (CookieJar, HxRefresh, StatusCode) {
    let mut storage = CookieStorage::new(jar);

    if set_language_preference(&mut storage, &form.language) {
        tracing::debug!("Language preference set to {}", form.language);
    }

    (storage.into_jar(), HxRefresh(true), StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::post};
    use axum_htmx::HX_REFRESH;
    use axum_test::TestServer;

    use crate::{endpoints, i18n::PREFERENCE_KEY};

    use super::{LanguageForm, post_language};

    fn get_test_server() -> TestServer {
        let app = Router::new().route(endpoints::LANGUAGE, post(post_language));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn stores_supported_language() {
        let server = get_test_server();

        let response = server
            .post(endpoints::LANGUAGE)
            .form(&LanguageForm {
                language: "en-US".to_owned(),
            })
            .await;

        response.assert_status_ok();
        assert_eq!(response.header(HX_REFRESH), "true");
        let cookie = response.cookie(PREFERENCE_KEY);
        assert_eq!(cookie.value(), "en-US");
        assert_eq!(cookie.path(), Some("/"));
    }

    #[tokio::test]
    async fn ignores_unsupported_language() {
        let server = get_test_server();

        let response = server
            .post(endpoints::LANGUAGE)
            .form(&LanguageForm {
                language: "fr-FR".to_owned(),
            })
            .await;

        response.assert_status_ok();
        assert_eq!(response.header(HX_REFRESH), "true");
        assert!(response.maybe_cookie(PREFERENCE_KEY).is_none());
    }
}
