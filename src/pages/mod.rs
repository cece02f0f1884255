//! The HTML pages and the htmx fragments they request.
//!
//! Both expense pages share the same layout: a header with the language
//! selector, and a table section that is swapped as a whole when the data is
//! refreshed or a different month is selected.

mod expenses_page;
mod language;
mod monthly_page;
mod tooltip;

pub use expenses_page::{get_expenses_page, get_expenses_table};
pub use language::post_language;
pub use monthly_page::{get_monthly_expenses_page, get_monthly_expenses_table};
pub use tooltip::{delete_tooltip, post_tooltip};

use axum::{
    extract::FromRef,
    http::{HeaderMap, header::ACCEPT_LANGUAGE},
};
use axum_extra::extract::CookieJar;
use maud::{Markup, html};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    AppState, endpoints,
    client::{ExpenseClient, FetchError},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_SELECT_STYLE, PAGE_CONTAINER_STYLE, format_yen, loading_spinner,
    },
    i18n::{CookieStorage, Language, current_language, supported_languages},
    row::Row,
    table::{TableViewModel, table_view},
};

/// The id of the element swapped by the refresh button and the month selector.
const TABLE_SECTION_ID: &str = "expense-table-section";

/// The id of the page container, which is never swapped.
///
/// Table requests synchronise on it so that a newer request aborts an older one.
const PAGE_ID: &str = "expense-page";

const LAST_UPDATED_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// The state needed by the page route handlers.
#[derive(Debug, Clone)]
pub struct PageState {
    pub expense_client: ExpenseClient,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Tokyo".
    pub local_timezone: String,
}

impl FromRef<AppState> for PageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_client: state.expense_client.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The language to render a request in, from the preference cookie or the
/// `Accept-Language` header.
pub(crate) fn request_language(jar: &CookieJar, headers: &HeaderMap) -> Language {
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    current_language(&CookieStorage::new(jar.clone()), accept_language)
}

/// The result of one fetch, ready to be rendered as the table section.
pub(crate) struct LoadedExpenses {
    pub result: Result<Vec<Row>, FetchError>,
    pub database_connected: bool,
    pub loaded_at: OffsetDateTime,
}

impl LoadedExpenses {
    /// Fetch the rows with `fetch` and check the API health at the same time.
    pub async fn load(
        client: &ExpenseClient,
        fetch: impl Future<Output = Result<Vec<Row>, FetchError>>,
        loaded_at: OffsetDateTime,
    ) -> Self {
        let (result, database_connected) = tokio::join!(fetch, client.check_health());

        if let Err(error) = &result {
            tracing::error!("Could not fetch expenses: {error}");
        }

        Self {
            result,
            database_connected,
            loaded_at,
        }
    }
}

/// The page title, subtitle and language selector.
pub(crate) fn page_header(title: &str, subtitle: &str, language: Language) -> Markup {
    html! {
        header class="w-full flex flex-wrap justify-between items-end gap-4 mb-4"
        {
            div
            {
                h1 class="text-2xl font-bold" { (title) }
                p class="text-sm text-gray-600 dark:text-gray-400" { (subtitle) }
            }

            form
                class="flex items-center gap-2"
                hx-post=(endpoints::LANGUAGE)
                hx-trigger="change"
            {
                label for="language" class=(FORM_LABEL_STYLE)
                {
                    (language.text("LANGUAGE_LABEL"))
                }

                select id="language" name="language" title=(language.name()) class=(FORM_SELECT_STYLE)
                {
                    @for (code, name) in supported_languages() {
                        option value=(code) selected[*code == language.code()] { (name) }
                    }
                }
            }
        }
    }
}

/// The element that wraps the page content, see [PAGE_ID].
pub(crate) fn page_container(content: Markup) -> Markup {
    html! {
        div id=(PAGE_ID) class=(PAGE_CONTAINER_STYLE)
        {
            (content)
        }
    }
}

/// The `hx-sync` value shared by every request that replaces the table section.
pub(crate) fn table_request_sync() -> String {
    format!("#{PAGE_ID}:replace")
}

/// The `hx-target` value of requests that replace the table section.
pub(crate) fn table_section_target() -> String {
    format!("#{TABLE_SECTION_ID}")
}

/// Renders the table section: last updated time, refresh button, stats,
/// then either the error panel, the empty panel or the total and table.
///
/// `refresh_url` is the fragment URL that re-renders this section.
pub(crate) fn table_section(
    loaded: &LoadedExpenses,
    refresh_url: &str,
    language: Language,
) -> Markup {
    let model = loaded
        .result
        .as_ref()
        .map(|rows| TableViewModel::new(rows, language.code()));
    let (record_count, column_count) = match &model {
        Ok(model) => (model.rows.len(), model.columns.len()),
        Err(_) => (0, 0),
    };
    let last_updated = loaded
        .loaded_at
        .format(LAST_UPDATED_FORMAT)
        .unwrap_or_else(|error| {
            tracing::error!("Could not format last updated time: {error}");
            loaded.loaded_at.to_string()
        });

    html! {
        section id=(TABLE_SECTION_ID) class="w-full flex flex-col gap-4"
        {
            div class="flex flex-wrap justify-between items-center gap-2"
            {
                p class="text-sm text-gray-600 dark:text-gray-400"
                {
                    (language.text("LAST_UPDATED")) " " (last_updated)
                }

                (refresh_button(refresh_url, BUTTON_PRIMARY_STYLE, language))
            }

            details class={"stats-panel " (CARD_STYLE)}
            {
                summary class="cursor-pointer text-sm font-medium"
                {
                    span class="stats-show" { (language.text("SHOW_STATS")) }
                    span class="stats-hide" { (language.text("HIDE_STATS")) }
                }

                dl class="grid grid-cols-2 gap-x-4 gap-y-1 mt-2 text-sm"
                {
                    dt { (language.text("TOTAL_RECORDS")) }
                    dd { (record_count) }
                    dt { (language.text("COLUMN_COUNT")) }
                    dd { (column_count) }
                    dt { (language.text("DATABASE_STATUS")) }
                    @if loaded.database_connected {
                        dd class="text-green-600 dark:text-green-400" { (language.text("CONNECTED")) }
                    } @else {
                        dd class="text-red-600 dark:text-red-400" { (language.text("DISCONNECTED")) }
                    }
                }
            }

            @match &model {
                Err(error) => {
                    div role="alert" class={"flex flex-col gap-2 " (CARD_STYLE)}
                    {
                        p class="font-semibold text-red-600 dark:text-red-400"
                        {
                            (language.text("LOAD_FAILED"))
                        }
                        p class="error-message text-sm" { (error.to_string()) }
                        div
                        {
                            (refresh_button(refresh_url, BUTTON_SECONDARY_STYLE, language))
                        }
                    }
                }
                Ok(model) => {
                    @if model.is_empty() {
                        div class={"empty-panel text-center " (CARD_STYLE)}
                        {
                            p class="font-semibold" { (language.text("NO_DATA")) }
                            p class="text-sm text-gray-600 dark:text-gray-400"
                            {
                                (language.text("NO_DATA_DETAILS"))
                            }
                        }
                    } @else {
                        p class="total-amount text-lg font-semibold"
                        {
                            (language.text("TOTAL_AMOUNT")) ": " (format_yen(model.total_amount))
                        }

                        (table_view(model))
                    }
                }
            }
        }
    }
}

fn refresh_button(refresh_url: &str, style: &str, language: Language) -> Markup {
    html! {
        button
            type="button"
            class=(style)
            hx-get=(refresh_url)
            hx-target=(table_section_target())
            hx-swap="outerHTML"
            hx-sync=(table_request_sync())
            hx-disabled-elt="this"
        {
            span class="htmx-indicator"
            {
                (loading_spinner())
                (language.text("REFRESHING"))
            }
            span class="htmx-hide-on-request" { (language.text("REFRESH_BUTTON")) }
        }
    }
}
