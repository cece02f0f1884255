use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error, endpoints,
    html::{FORM_LABEL_STYLE, FORM_SELECT_STYLE, base},
    i18n::Language,
    month::{MonthKey, TRAILING_MONTH_COUNT},
    navigation::NavBar,
    timezone::local_now,
};

use super::{
    LoadedExpenses, PageState, page_container, page_header, request_language, table_request_sync,
    table_section, table_section_target,
};

/// The query string of the monthly page and its table fragment.
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    /// The month to show as `YYYY-MM`, defaults to the current month.
    pub month: Option<String>,
}

/// The month to show and the months offered by the selector.
struct MonthSelection {
    selected: MonthKey,
    options: Vec<MonthKey>,
}

async fn load_monthly_expenses(
    state: &PageState,
    query: MonthQuery,
) -> Result<(MonthSelection, LoadedExpenses), Error> {
    let now = local_now(&state.local_timezone)?;

    let mut options = MonthKey::trailing(now.date(), TRAILING_MONTH_COUNT);
    let selected = match query.month.filter(|month| !month.is_empty()) {
        Some(month) => month.parse()?,
        None => MonthKey::containing(now.date()),
    };
    // A month requested by URL stays selectable even if it is older than the trailing months.
    if !options.contains(&selected) {
        options.push(selected);
        options.sort_unstable_by(|a, b| b.cmp(a));
    }

    let client = &state.expense_client;
    let loaded = LoadedExpenses::load(client, client.fetch_monthly_expenses(&selected), now).await;

    Ok((MonthSelection { selected, options }, loaded))
}

fn month_selector(selection: &MonthSelection, language: Language) -> Markup {
    html! {
        div class="w-full flex items-center gap-2 mb-4"
        {
            label for="month" class=(FORM_LABEL_STYLE) { (language.text("MONTH_LABEL")) }

            select
                id="month"
                name="month"
                class=(FORM_SELECT_STYLE)
                hx-get=(endpoints::MONTHLY_EXPENSES_TABLE)
                hx-trigger="change"
                hx-target=(table_section_target())
                hx-swap="outerHTML"
                hx-sync=(table_request_sync())
            {
                @for month in &selection.options {
                    option value=(month.to_string()) selected[*month == selection.selected]
                    {
                        (month.label(language.code()))
                    }
                }
            }
        }
    }
}

fn monthly_expenses_view(
    selection: &MonthSelection,
    loaded: &LoadedExpenses,
    language: Language,
) -> Markup {
    let title = language.text("MONTHLY_PAGE_TITLE");
    let refresh_url = endpoints::with_month(endpoints::MONTHLY_EXPENSES_TABLE, &selection.selected);

    let content = html! {
        (NavBar::new(endpoints::MONTHLY_EXPENSES_VIEW, language).into_html())

        (page_container(html! {
            (page_header(title, language.text("MONTHLY_PAGE_SUBTITLE"), language))
            (month_selector(selection, language))
            (table_section(loaded, &refresh_url, language))
        }))
    };

    base(title, language, &content)
}

/// Route handler for the page listing the expenses of one month.
///
/// Responds with 400 Bad Request if `month` is given but is not of the form `YYYY-MM`.
pub async fn get_monthly_expenses_page(
    State(state): State<PageState>,
    Query(query): Query<MonthQuery>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<Response, Error> {
    let language = request_language(&jar, &headers);
    let (selection, loaded) = load_monthly_expenses(&state, query).await?;

    Ok(monthly_expenses_view(&selection, &loaded, language).into_response())
}

/// Route handler for the table section fragment of the monthly page.
pub async fn get_monthly_expenses_table(
    State(state): State<PageState>,
    Query(query): Query<MonthQuery>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<Response, Error> {
    let language = request_language(&jar, &headers);
    let (selection, loaded) = load_monthly_expenses(&state, query).await?;
    let refresh_url = endpoints::with_month(endpoints::MONTHLY_EXPENSES_TABLE, &selection.selected);

    Ok(table_section(&loaded, &refresh_url, language).into_response())
}
