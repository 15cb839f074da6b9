pub mod entity;
pub mod invariants;

pub use entity::{DetailRecord, StatEntry, StatName};
pub use invariants::validate_detail_record;
