//! Family Expenses is a web app for viewing household expenses.
//!
//! This library provides a read-only JSON API over the expense database and
//! HTML pages that render the expenses as a translated, formatted table.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod client;
mod db;
mod endpoints;
mod error;
mod html;
mod i18n;
mod internal_server_error;
mod month;
mod navigation;
mod not_found;
mod pages;
mod routing;
mod row;
mod table;
mod timezone;

pub use app_state::AppState;
pub use client::{ExpenseClient, FetchError};
pub use db::{NewExpense, initialize as initialize_db, insert_expense};
pub use error::Error;
pub use month::MonthKey;
pub use routing::build_router;
pub use row::{CellValue, Row};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

#[cfg(test)]
mod test_utils;
