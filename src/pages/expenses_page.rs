use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    html::base,
    i18n::Language,
    navigation::NavBar,
    timezone::local_now,
};

use super::{
    LoadedExpenses, PageState, page_container, page_header, request_language, table_section,
};

async fn load_all_expenses(state: &PageState) -> Result<LoadedExpenses, Error> {
    let now = local_now(&state.local_timezone)?;
    let client = &state.expense_client;

    Ok(LoadedExpenses::load(client, client.fetch_all_expenses(), now).await)
}

fn expenses_view(loaded: &LoadedExpenses, language: Language) -> Markup {
    let title = language.text("PAGE_TITLE");

    let content = html! {
        (NavBar::new(endpoints::EXPENSES_VIEW, language).into_html())

        (page_container(html! {
            (page_header(title, language.text("PAGE_SUBTITLE"), language))
            (table_section(loaded, endpoints::EXPENSES_TABLE, language))
        }))
    };

    base(title, language, &content)
}

/// Route handler for the page listing every expense.
pub async fn get_expenses_page(
    State(state): State<PageState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<Response, Error> {
    let language = request_language(&jar, &headers);
    let loaded = load_all_expenses(&state).await?;

    Ok(expenses_view(&loaded, language).into_response())
}

/// Route handler for the table section fragment of the all expenses page.
pub async fn get_expenses_table(
    State(state): State<PageState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<Response, Error> {
    let language = request_language(&jar, &headers);
    let loaded = load_all_expenses(&state).await?;

    Ok(table_section(&loaded, endpoints::EXPENSES_TABLE, language).into_response())
}
