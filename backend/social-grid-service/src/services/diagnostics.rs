//! Database diagnostics for `GET /test`
//!
//! Reports how far store initialisation got and whether the store answers a
//! collection listing. Never returns an error.

use crate::models::DiagnosticsResponse;
use crate::state::{AppState, DatabaseHandle};
use std::fmt;

const BACKEND_RUNNING: &str = "✅ Running";
const MAX_LISTED_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    NotAvailable,
    AvailableButUninitialized,
    ConnectedAndWorking,
    ConnectedWithError(String),
    Error(String),
}

impl fmt::Display for DatabaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseStatus::NotAvailable => f.write_str("❌ Not Available"),
            DatabaseStatus::AvailableButUninitialized => {
                f.write_str("⚠️  Available but not initialized")
            }
            DatabaseStatus::ConnectedAndWorking => f.write_str("✅ Connected & Working"),
            DatabaseStatus::ConnectedWithError(e) => {
                write!(f, "⚠️  Connected but Error: {}", truncate_chars(e, MAX_ERROR_CHARS))
            }
            DatabaseStatus::Error(e) => {
                write!(f, "❌ Error: {}", truncate_chars(e, MAX_ERROR_CHARS))
            }
        }
    }
}

fn truncate_chars(message: &str, max: usize) -> &str {
    match message.char_indices().nth(max) {
        Some((idx, _)) => &message[..idx],
        None => message,
    }
}

pub async fn collect_diagnostics(state: &AppState) -> DiagnosticsResponse {
    let database_url = if state.config.database.url_set {
        "✅ Set"
    } else {
        "❌ Not Set"
    };

    let mut response = DiagnosticsResponse {
        backend: BACKEND_RUNNING.to_string(),
        database: DatabaseStatus::NotAvailable.to_string(),
        database_url: Some(database_url.to_string()),
        database_name: None,
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    let status = match state.database.as_ref() {
        DatabaseHandle::Unconfigured => DatabaseStatus::NotAvailable,
        DatabaseHandle::Uninitialized => DatabaseStatus::AvailableButUninitialized,
        DatabaseHandle::Failed(reason) => DatabaseStatus::Error(reason.clone()),
        DatabaseHandle::Ready(store) => {
            response.database_name = Some(store.database_name().to_string());
            response.connection_status = "Connected".to_string();

            match store.list_collection_names().await {
                Ok(names) => {
                    response.collections = names.into_iter().take(MAX_LISTED_COLLECTIONS).collect();
                    DatabaseStatus::ConnectedAndWorking
                }
                Err(e) => {
                    tracing::warn!("Collection listing failed: {}", e);
                    DatabaseStatus::ConnectedWithError(e.to_string())
                }
            }
        }
    };

    response.database = status.to_string();
    response
}
