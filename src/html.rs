//! The shared page layout, error page and style constants.

use maud::{DOCTYPE, Markup, html};

use crate::{
    i18n::Language,
    table::{TooltipState, format_amount, tooltip_container},
};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "inline-flex items-center px-4 py-2 bg-blue-500 \
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_SECONDARY_STYLE: &str = "py-2 px-4 text-sm font-medium \
    text-gray-900 bg-white rounded border border-gray-200 hover:bg-gray-100 \
    hover:text-blue-700 dark:bg-gray-800 dark:text-gray-400 \
    dark:border-gray-600 dark:hover:text-white dark:hover:bg-gray-700";

// Form styles
pub const FORM_LABEL_STYLE: &str = "text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_SELECT_STYLE: &str = "p-2 rounded text-sm text-gray-900 \
    dark:text-white bg-gray-50 dark:bg-gray-700 border border-gray-300 \
    dark:border-gray-600 focus:ring-blue-600 focus:border-blue-600";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "flex flex-col items-center w-full max-w-screen-xl \
    px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

// Card for panels such as the stats panel and error messages
pub const CARD_STYLE: &str = "w-full rounded border border-gray-200 bg-white \
    px-4 py-3 shadow-sm dark:border-gray-700 dark:bg-gray-800";

/// The page layout shared by every page.
///
/// The page is rendered in `language` and includes the empty tooltip container.
pub fn base(title: &str, language: Language, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(language.code())
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link href="/static/main.css" rel="stylesheet";

                script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}

                style
                {
                    r#"
                    .htmx-indicator {
                        display: none;
                    }

                    .htmx-request .htmx-indicator,
                    .htmx-request.htmx-indicator {
                        display: inline;
                    }

                    .htmx-request .htmx-hide-on-request {
                        display: none;
                    }
                    "#
                }
            }

            body class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                (tooltip_container(&TooltipState::Idle, 0.0))
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, Language::fallback(), &content)
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="inline text-white w-4 h-4 me-2 mb-1 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// Format `amount` as yen, e.g. "¥1,234,567".
pub fn format_yen(amount: f64) -> String {
    format!("¥{}", format_amount(amount))
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{i18n::Language, test_utils::assert_valid_html};

    use super::{base, error_view, format_yen};

    #[test]
    fn base_sets_the_document_language_and_tooltip_container() {
        let language = Language::from_code("en-US").unwrap();

        let page = base("Title", language, &maud::html! { p { "content" } }).into_string();

        let html = Html::parse_document(&page);
        assert_valid_html(&html);
        let root = html.root_element();
        assert_eq!(root.value().attr("lang"), Some("en-US"));
        let tooltip = Selector::parse("body > #tooltip").unwrap();
        assert_eq!(html.select(&tooltip).count(), 1);
    }

    #[test]
    fn error_view_shows_the_fix() {
        let page = error_view("Not Found", "404", "Page not found", "Check the URL").into_string();

        let html = Html::parse_document(&page);
        assert_valid_html(&html);
        let h1 = Selector::parse("h1").unwrap();
        let header: String = html.select(&h1).next().unwrap().text().collect();
        assert_eq!(header.trim(), "404");
        assert!(page.contains("Check the URL"));
    }

    #[test]
    fn yen_amounts_are_grouped() {
        assert_eq!(format_yen(1_234_567.0), "¥1,234,567");
        assert_eq!(format_yen(-500.0), "¥-500");
    }

    #[test]
    fn large_yen_totals_stay_grouped() {
        assert_eq!(format_yen(1e15), "¥1,000,000,000,000,000");
        assert_eq!(format_yen(2468.0005), "¥2,468.001");
    }
}
