//! The navigation bar linking the all expenses and monthly expenses pages.

use maud::{Markup, html};

use crate::{endpoints, i18n::Language};

/// A link in the navigation bar.
///
/// Only one link should be current at any one time.
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white bg-blue-700 rounded-sm sm:bg-transparent
            sm:text-blue-700 sm:p-0 dark:text-white sm:dark:text-blue-500"
        } else {
            "block py-2 px-3 text-gray-900 rounded-sm hover:bg-gray-100
            sm:hover:bg-transparent sm:border-0 sm:hover:text-blue-700 sm:p-0
            dark:text-white sm:dark:hover:text-blue-500 dark:hover:bg-gray-700"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar with titles in `language`.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as current and displayed differently in the HTML.
    pub fn new(active_endpoint: &str, language: Language) -> NavBar<'static> {
        let links = [
            (endpoints::EXPENSES_VIEW, "ALL_EXPENSES_NAV"),
            (endpoints::MONTHLY_EXPENSES_VIEW, "MONTHLY_EXPENSES_NAV"),
        ]
        .into_iter()
        .map(|(url, key)| Link {
            url,
            title: language.text(key),
            is_current: active_endpoint == url,
        })
        .collect();

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    ul
                        class="font-medium flex flex-row space-x-8 rtl:space-x-reverse"
                    {
                        @for link in self.links {
                            li { (link.into_html()) }
                        }
                    }
                }
            }
        )
    }
}
