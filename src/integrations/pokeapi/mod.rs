pub mod client;
pub mod payload;

pub use client::{CatalogClient, PokeApiClient};
pub use payload::{RawDetail, RawSpecies, RosterPage};

#[cfg(test)]
pub use client::MockCatalogClient;
