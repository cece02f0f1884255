//! The URIs of the pages, fragments and API.
//!
//! For the monthly routes that take a month, use [with_month].

use crate::month::MonthKey;

/// The root route which redirects to the monthly expenses page.
pub const ROOT: &str = "/";
/// The page listing every expense.
pub const EXPENSES_VIEW: &str = "/expenses";
/// The page listing the expenses of one month.
pub const MONTHLY_EXPENSES_VIEW: &str = "/monthly-expenses";
/// The fragment with the expense table, used to refresh the all expenses page.
pub const EXPENSES_TABLE: &str = "/expenses/table";
/// The fragment with the expense table of one month.
pub const MONTHLY_EXPENSES_TABLE: &str = "/monthly-expenses/table";
/// The route for storing the preferred language.
pub const LANGUAGE: &str = "/language";
/// The route for showing and hiding the tooltip of a clipped cell.
pub const TOOLTIP: &str = "/tooltip";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route listing every expense as JSON.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route listing the expenses of one month as JSON.
pub const MONTHLY_EXPENSES_API: &str = "/api/monthly-expenses";
/// The route for checking that the server is running.
pub const HEALTH_API: &str = "/api/health";

/// Add `month` to `endpoint_path` as the `month` query parameter.
pub fn with_month(endpoint_path: &str, month: &MonthKey) -> String {
    match serde_urlencoded::to_string([("month", month.to_string())]) {
        Ok(query) => format!("{endpoint_path}?{query}"),
        Err(error) => {
            tracing::error!("Could not encode month {month}: {error}");
            endpoint_path.to_owned()
        }
    }
}
