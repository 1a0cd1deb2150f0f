//! CSV export endpoint

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use flashcard_core::export::CONTENT_TYPE;

use crate::error::Result;
use crate::AppState;

const FILE_STEM: &str = "flashcards";

/// GET /api/export
/// Download all generated flashcards as an Anki-importable CSV file
pub async fn download(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let cards = state.store.list()?;
    let csv = state.exporter.export(&cards)?;

    let exported = cards.iter().filter(|c| c.has_ai_content()).count();
    tracing::debug!(exported, skipped = cards.len() - exported, "Rendered CSV export");

    let filename = download_filename(state.timestamped_filename, Utc::now());

    Ok((
        [
            (header::CONTENT_TYPE, CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        csv,
    ))
}

/// File name offered for the download. Does not affect the body.
pub fn download_filename(timestamped: bool, now: DateTime<Utc>) -> String {
    if timestamped {
        format!("{}-{}.csv", FILE_STEM, now.format("%Y%m%d-%H%M%S"))
    } else {
        format!("{}.csv", FILE_STEM)
    }
}
