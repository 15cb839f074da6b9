// src/integrations/pokeapi/payload.rs
//
// Upstream PokeAPI payloads.
//
// Only the fields this system reads are declared; everything else in the
// (large) upstream documents is ignored by serde. `slim()` projects a
// payload into the record that gets cached and rendered.

use log::debug;
use serde::Deserialize;

use crate::domain::{DescriptionRecord, DetailRecord, FlavorEntry, RosterEntry, StatEntry, StatName};

/// `{ name, url }` reference used throughout the API
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// `GET /pokemon?limit=&offset=`
#[derive(Debug, Clone, Deserialize)]
pub struct RosterPage {
    pub results: Vec<NamedResource>,
}

impl RosterPage {
    pub fn into_entries(self) -> Vec<RosterEntry> {
        self.results
            .into_iter()
            .map(|resource| RosterEntry::new(resource.name, resource.url))
            .collect()
    }
}

/// `GET /pokemon/{id}/`
#[derive(Debug, Clone, Deserialize)]
pub struct RawDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: RawSprites,
    #[serde(default)]
    pub types: Vec<RawTypeSlot>,
    #[serde(default)]
    pub stats: Vec<RawStat>,
    #[serde(default)]
    pub cries: Option<RawCries>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub versions: Option<RawSpriteVersions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSpriteVersions {
    #[serde(rename = "generation-v")]
    pub generation_v: Option<RawGenerationV>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGenerationV {
    #[serde(rename = "black-white")]
    pub black_white: Option<RawBlackWhite>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBlackWhite {
    pub animated: Option<RawAnimated>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAnimated {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCries {
    pub latest: Option<String>,
    pub legacy: Option<String>,
}

impl RawSprites {
    fn animated_front(&self) -> Option<String> {
        self.versions
            .as_ref()?
            .generation_v
            .as_ref()?
            .black_white
            .as_ref()?
            .animated
            .as_ref()?
            .front_default
            .clone()
    }
}

impl RawDetail {
    /// Projects the payload down to a `DetailRecord`.
    ///
    /// Types keep upstream order with duplicates dropped. Stats are laid out
    /// in `StatName::ALL` order; a stat missing upstream reads as 0.
    pub fn slim(self) -> DetailRecord {
        let animated_sprite_url = self.sprites.animated_front();

        let mut types: Vec<String> = Vec::with_capacity(self.types.len());
        for slot in self.types {
            if !types.contains(&slot.kind.name) {
                types.push(slot.kind.name);
            }
        }

        let stats = StatName::ALL
            .into_iter()
            .map(|name| {
                let base_value = self
                    .stats
                    .iter()
                    .find(|raw| raw.stat.name == name.as_str())
                    .map(|raw| raw.base_stat)
                    .unwrap_or_else(|| {
                        debug!("Entry {} has no {} stat upstream", self.id, name);
                        0
                    });
                StatEntry { name, base_value }
            })
            .collect();

        let cry_url = self.cries.and_then(|cries| cries.latest.or(cries.legacy));

        DetailRecord {
            id: self.id,
            name: self.name,
            sprite_url: self.sprites.front_default,
            animated_sprite_url,
            types,
            stats,
            cry_url,
        }
    }
}

/// `GET /pokemon-species/{id}/`
#[derive(Debug, Clone, Deserialize)]
pub struct RawSpecies {
    #[serde(default)]
    pub flavor_text_entries: Vec<RawFlavorText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
    pub version: NamedResource,
}

impl RawSpecies {
    pub fn slim(self) -> DescriptionRecord {
        DescriptionRecord::new(
            self.flavor_text_entries
                .into_iter()
                .map(|entry| FlavorEntry::new(entry.language.name, entry.version.name, entry.flavor_text))
                .collect(),
        )
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slim_detail_keeps_only_projected_fields() {
        let record = raw_detail(1, "bulbasaur").slim();

        assert_eq!(record.id, 1);
        assert_eq!(record.name, "bulbasaur");
        assert_eq!(record.sprite_url.as_deref(), Some("https://sprites.example/1.png"));
        assert_eq!(
            record.animated_sprite_url.as_deref(),
            Some("https://sprites.example/animated/1.gif")
        );
        assert_eq!(record.types, vec!["grass", "poison"]);
        assert_eq!(record.stat(StatName::SpecialAttack), Some(65));
        assert_eq!(record.stats.len(), 6);
        assert_eq!(record.cry_url.as_deref(), Some("https://cries.example/latest/1.ogg"));
    }

    #[test]
    fn test_slim_detail_with_sparse_payload() {
        let raw: RawDetail = serde_json::from_value(json!({
            "id": 132,
            "name": "ditto",
            "sprites": { "front_default": null },
            "types": [
                { "slot": 1, "type": { "name": "normal", "url": "" } },
                { "slot": 2, "type": { "name": "normal", "url": "" } }
            ],
            "stats": [
                { "base_stat": 48, "stat": { "name": "speed", "url": "" } },
                { "base_stat": 48, "stat": { "name": "hp", "url": "" } }
            ],
            "cries": { "latest": null, "legacy": "https://cries.example/legacy/132.ogg" }
        }))
        .unwrap();

        let record = raw.slim();
        assert_eq!(record.sprite_url, None);
        assert_eq!(record.animated_sprite_url, None);
        assert_eq!(record.types, vec!["normal"]);
        let names: Vec<StatName> = record.stats.iter().map(|s| s.name).collect();
        assert_eq!(names, StatName::ALL);
        assert_eq!(record.stat(StatName::Hp), Some(48));
        assert_eq!(record.stat(StatName::Attack), Some(0));
        assert_eq!(record.cry_url.as_deref(), Some("https://cries.example/legacy/132.ogg"));
    }

    #[test]
    fn test_missing_cries_is_absent() {
        let raw: RawDetail =
            serde_json::from_value(json!({ "id": 3, "name": "venusaur" })).unwrap();
        assert_eq!(raw.slim().cry_url, None);
    }

    #[test]
    fn test_roster_page_entries() {
        let page: RosterPage = serde_json::from_value(json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=2&limit=2",
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        }))
        .unwrap();

        let entries = page.into_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].name, "ivysaur");
        assert_eq!(entries[1].detail_locator, "https://pokeapi.co/api/v2/pokemon/2/");
    }

    #[test]
    fn test_species_slim() {
        let record = raw_species(&[("en", "red", "Seed."), ("ja", "red", "たね")]).slim();
        assert_eq!(record.entries.len(), 2);
        assert_eq!(record.entries[0], FlavorEntry::new("en", "red", "Seed."));
        assert_eq!(record.select_text(), "Seed.");
    }
}
