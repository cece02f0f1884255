//! Application router configuration for the pages, fragments and JSON API.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    api::{get_expenses, get_health, get_monthly_expenses},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    pages::{
        delete_tooltip, get_expenses_page, get_expenses_table, get_monthly_expenses_page,
        get_monthly_expenses_table, post_language, post_tooltip,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(endpoints::EXPENSES_TABLE, get(get_expenses_table))
        .route(
            endpoints::MONTHLY_EXPENSES_VIEW,
            get(get_monthly_expenses_page),
        )
        .route(
            endpoints::MONTHLY_EXPENSES_TABLE,
            get(get_monthly_expenses_table),
        )
        .route(endpoints::LANGUAGE, post(post_language))
        .route(
            endpoints::TOOLTIP,
            post(post_tooltip).delete(delete_tooltip),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(endpoints::EXPENSES_API, get(get_expenses))
        .route(endpoints::MONTHLY_EXPENSES_API, get(get_monthly_expenses))
        .route(endpoints::HEALTH_API, get(get_health));

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the monthly expenses page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::MONTHLY_EXPENSES_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page, test_utils::get_header};

    #[tokio::test]
    async fn root_redirects_to_monthly_expenses() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        assert_eq!(
            get_header(&response, "location"),
            endpoints::MONTHLY_EXPENSES_VIEW
        );
    }
}
