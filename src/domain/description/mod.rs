pub mod entity;

pub use entity::{clean_flavor_text, DescriptionRecord, FlavorEntry, NO_DESCRIPTION_TEXT};
