//! The read-only JSON API over the expense views.
//!
//! Successful responses are wrapped as `{ "success": true, "data": [...] }`
//! and failures as `{ "success": false, "error": "..." }`.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    AppState, Error,
    db::{select_all_expenses, select_monthly_expenses},
    month::MonthKey,
    row::Row,
};

/// The state needed by the API route handlers.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ApiState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query string of [get_monthly_expenses].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MonthlyExpensesQuery {
    /// The month to get expenses for as `YYYY-MM`.
    #[serde(rename = "monthKey")]
    pub month_key: Option<String>,
}

/// A successful response, serialized field by field so that each row keeps
/// its column order.
#[derive(Debug, Serialize)]
struct ExpensesResponse<'a> {
    success: bool,
    data: &'a [Row],
}

/// Route handler for listing every expense.
pub async fn get_expenses(State(state): State<ApiState>) -> Response {
    query_expenses(&state, select_all_expenses)
}

/// Route handler for listing the expenses of one month.
///
/// Responds with 400 Bad Request if the month key is missing or is not of the
/// form `YYYY-MM`.
pub async fn get_monthly_expenses(
    State(state): State<ApiState>,
    Query(query): Query<MonthlyExpensesQuery>,
) -> Response {
    let month = match query
        .month_key
        .ok_or(Error::MissingMonthKey)
        .and_then(|month_key| month_key.parse::<MonthKey>())
    {
        Ok(month) => month,
        Err(error) => return error.into_json_response(),
    };

    query_expenses(&state, |connection| {
        select_monthly_expenses(connection, &month)
    })
}

/// Route handler for the liveness check.
pub async fn get_health() -> Response {
    Json(json!({ "status": "OK", "message": "Server is running" })).into_response()
}

fn query_expenses(
    state: &ApiState,
    query: impl FnOnce(&Connection) -> Result<Vec<Row>, Error>,
) -> Response {
    let result = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)
        .and_then(|connection| query(&connection));

    match result {
        Ok(rows) => Json(ExpensesResponse {
            success: true,
            data: &rows,
        })
        .into_response(),
        Err(error) => error.into_json_response(),
    }
}
