// src/integrations/mod.rs
//
// External Integrations Module

pub mod pokeapi;

pub use pokeapi::{CatalogClient, PokeApiClient, RawDetail, RawSpecies};

#[cfg(test)]
pub use pokeapi::MockCatalogClient;
