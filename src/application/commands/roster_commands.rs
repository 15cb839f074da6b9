// src/application/commands/roster_commands.rs

use crate::application::error_handling::ToErrorResponse;
use crate::application::commands::navigation_commands::invalid_id;
use crate::application::{dto::*, state::AppState};
use crate::domain::position_for_id;
use crate::error::AppError;

/// List every roster entry in position order
pub async fn list_entries(state: &AppState) -> Result<Vec<RosterItemDto>, String> {
    if !state.roster.is_loaded() {
        return Err::<Vec<RosterItemDto>, _>(AppError::RosterNotLoaded).to_error_response();
    }

    Ok(state
        .roster
        .entries()
        .iter()
        .enumerate()
        .map(|(position, entry)| RosterItemDto::new(position, entry))
        .collect())
}

/// Detail view for a catalog id, resolving through the cache
pub async fn get_entry_view(id: u32, state: &AppState) -> Result<DetailView, String> {
    let position = position_for_id(id).ok_or_else(|| invalid_id(id))?;

    let record = state.pipeline.resolve(position).await.to_error_response()?;
    Ok(DetailView::from(&record))
}
