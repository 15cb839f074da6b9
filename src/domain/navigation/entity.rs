use serde::{Deserialize, Serialize};

/// Distance covered by a page jump
pub const PAGE_SIZE: i64 = 10;

/// Relative moves offered by the d-pad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationStep {
    Next,
    Previous,
    PageForward,
    PageBack,
}

impl NavigationStep {
    pub fn delta(&self) -> i64 {
        match self {
            NavigationStep::Next => 1,
            NavigationStep::Previous => -1,
            NavigationStep::PageForward => PAGE_SIZE,
            NavigationStep::PageBack => -PAGE_SIZE,
        }
    }
}

/// Proof of a selection; compared against the state to detect stale results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket {
    pub position: usize,
    pub generation: u64,
}

/// Current cursor position. Starts with no selection and never returns to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    current: Option<usize>,
    generation: u64,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Moves the cursor and opens a new generation
    pub fn select(&mut self, position: usize) -> SelectionTicket {
        self.current = Some(position);
        self.generation += 1;
        SelectionTicket {
            position,
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        self.generation == ticket.generation && self.current == Some(ticket.position)
    }

    /// Target of a relative move over a ring of `len` entries.
    ///
    /// Without a selection the move starts one before the first entry, so
    /// `+1` lands on the first entry and `+10` on the tenth. Returns `None`
    /// when the move would not change the position.
    pub fn target_for(&self, delta: i64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let target = match self.current {
            Some(current) => wrap_position(current, delta, len),
            None => (delta - 1).rem_euclid(len as i64) as usize,
        };
        (Some(target) != self.current).then_some(target)
    }
}

/// `(position + delta) mod len`, wrapping in both directions
pub fn wrap_position(position: usize, delta: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    (position as i64 + delta).rem_euclid(len as i64) as usize
}

/// Prefetch neighborhood of a position: +1, -1, +10, -10 on the ring,
/// deduplicated in that order, never including the position itself.
pub fn neighbor_positions(position: usize, len: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let mut neighbors = Vec::with_capacity(4);
    for delta in [1, -1, PAGE_SIZE, -PAGE_SIZE] {
        let candidate = wrap_position(position, delta, len);
        if candidate != position && !neighbors.contains(&candidate) {
            neighbors.push(candidate);
        }
    }
    neighbors
}
