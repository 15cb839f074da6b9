// src/application/commands/navigation_commands.rs

use crate::application::error_handling::validation_error;
use crate::application::state::AppState;
use crate::domain::{position_for_id, NavigationStep};
use crate::services::SelectOutcome;

/// Select an entry by its 1-based catalog id
pub async fn select_entry(id: u32, state: &AppState) -> Result<SelectOutcome, String> {
    let position = position_for_id(id).ok_or_else(|| invalid_id(id))?;
    let position = i64::try_from(position).map_err(|_| invalid_id(id))?;

    Ok(state.navigation.select(position).await)
}

/// Step one entry forward or back
pub async fn step_entry(forward: bool, state: &AppState) -> Result<SelectOutcome, String> {
    let step = if forward {
        NavigationStep::Next
    } else {
        NavigationStep::Previous
    };
    Ok(state.navigation.step(step).await)
}

/// Jump a page of entries forward or back
pub async fn jump_entries(forward: bool, state: &AppState) -> Result<SelectOutcome, String> {
    let step = if forward {
        NavigationStep::PageForward
    } else {
        NavigationStep::PageBack
    };
    Ok(state.navigation.step(step).await)
}

pub(crate) fn invalid_id(id: u32) -> String {
    validation_error(format!("Invalid entry id: {}", id))
}
