pub mod entity;

pub use entity::{
    neighbor_positions, wrap_position, NavigationState, NavigationStep, SelectionTicket,
};
