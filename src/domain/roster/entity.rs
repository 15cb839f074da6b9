use serde::{Deserialize, Serialize};

/// Lightweight roster reference. Position `i` in the roster is catalog id `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub detail_locator: String,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, detail_locator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail_locator: detail_locator.into(),
        }
    }
}

/// Catalog id for a 0-based roster position
pub fn id_for_position(position: usize) -> u32 {
    position as u32 + 1
}

/// 0-based roster position for a catalog id; `None` for id 0
pub fn position_for_id(id: u32) -> Option<usize> {
    id.checked_sub(1).map(|p| p as usize)
}
