use axum::{
    Form,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::table::{CellBounds, CellMeasurement, TooltipState, tooltip_container};

/// The measurements a long-text cell sends when the pointer enters it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TooltipForm {
    pub scroll_width: f64,
    pub client_width: f64,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub viewport_width: f64,
    #[serde(default)]
    pub text: String,
}

impl From<TooltipForm> for CellMeasurement {
    fn from(form: TooltipForm) -> Self {
        Self {
            scroll_width: form.scroll_width,
            client_width: form.client_width,
            bounds: CellBounds {
                left: form.left,
                top: form.top,
                width: form.width,
                height: form.height,
            },
            text: form.text,
        }
    }
}

/// Route handler for the pointer entering a long-text cell.
///
/// Responds with the tooltip container, which holds the tooltip only if the
/// cell's text is clipped.
pub async fn post_tooltip(Form(form): Form<TooltipForm>) -> Response {
    let viewport_width = form.viewport_width;
    let state = TooltipState::Idle.pointer_enter(form.into());

    match state.tooltip() {
        Some(tooltip) => tracing::debug!("Showing tooltip for {:?}", tooltip.preview()),
        None => tracing::debug!("Cell text fits, hiding the tooltip"),
    }

    tooltip_container(&state, viewport_width).into_response()
}

/// Route handler for the pointer leaving a long-text cell.
pub async fn delete_tooltip() -> Response {
    tooltip_container(&TooltipState::Idle.pointer_leave(), 0.0).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::post};
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        test_utils::{assert_status_ok, assert_valid_html, parse_html_fragment},
    };

    use super::{TooltipForm, delete_tooltip, post_tooltip};

    fn get_test_server() -> TestServer {
        let app = Router::new().route(
            endpoints::TOOLTIP,
            post(post_tooltip).delete(delete_tooltip),
        );

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn form(scroll_width: f64, top: f64) -> TooltipForm {
        TooltipForm {
            scroll_width,
            client_width: 200.0,
            left: 1000.0,
            top,
            width: 200.0,
            height: 24.0,
            viewport_width: 1280.0,
            text: "Birthday present for grandma & grandpa".to_owned(),
        }
    }

    fn tooltip_text(body: &str) -> String {
        let html = Html::parse_fragment(body);
        let selector = Selector::parse("#tooltip").unwrap();

        html.select(&selector)
            .next()
            .expect("missing tooltip container")
            .text()
            .collect()
    }

    #[tokio::test]
    async fn clipped_cell_shows_the_full_text() {
        let server = get_test_server();

        let response = server.post(endpoints::TOOLTIP).form(&form(500.0, 300.0)).await;

        response.assert_status_ok();
        let body = response.text();
        assert_eq!(tooltip_text(&body), "Birthday present for grandma & grandpa");
        // 1100 + 400 overflows the viewport, so the tooltip is pulled back inside it.
        assert!(body.contains("left: 864px;"), "unexpected tooltip {body}");
    }

    #[tokio::test]
    async fn tooltip_near_the_top_hangs_below_the_cell() {
        let server = get_test_server();

        let response = server.post(endpoints::TOOLTIP).form(&form(500.0, 20.0)).await;

        let body = response.text();
        assert!(body.contains("top: 45px;"), "unexpected tooltip {body}");
        assert!(!body.contains("translateY"), "unexpected tooltip {body}");
    }

    #[tokio::test]
    async fn fitting_cell_hides_the_tooltip() {
        let server = get_test_server();

        let response = server.post(endpoints::TOOLTIP).form(&form(200.0, 300.0)).await;

        response.assert_status_ok();
        assert_eq!(tooltip_text(&response.text()), "");
    }

    #[tokio::test]
    async fn leaving_the_cell_hides_the_tooltip() {
        let server = get_test_server();

        let response = server.delete(endpoints::TOOLTIP).await;

        response.assert_status_ok();
        assert_eq!(tooltip_text(&response.text()), "");
    }

    #[tokio::test]
    async fn idle_container_is_valid_html() {
        let response = delete_tooltip().await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let selector = Selector::parse("#tooltip.tooltip-container").unwrap();
        assert_eq!(html.select(&selector).count(), 1);
    }
}
