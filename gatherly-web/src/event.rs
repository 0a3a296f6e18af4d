use axum::extract::{Path, State};
use maud::Markup;

use crate::{AppState, PageError, pages};

pub async fn get_event_details(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Markup, PageError> {
    let details = state.event_service.get_event_details(&slug).await?;
    Ok(pages::event_details_page(&details))
}
