pub mod entity;

pub use entity::{id_for_position, position_for_id, RosterEntry};
