// src/application/dto/mod.rs
//
// View models
//
// PRINCIPLES:
// - Pure projections of domain records into what the screen shows
// - Conversion FROM domain records only (never TO)
// - No I/O, no caching, no failure modes

use serde::{Deserialize, Serialize};

use crate::domain::{id_for_position, DetailRecord, RosterEntry, StatEntry};

/// Stat values are drawn against this ceiling
pub const STAT_CEILING: u32 = 255;

pub const PLACEHOLDER_SPRITE: &str = "placeholder.png";
pub const PLACEHOLDER_SPRITE_ALT: &str = "Sprite not found";

// ============================================================================
// ROSTER DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterItemDto {
    pub position: usize,
    pub id: u32,
    pub display_id: String,
    pub name: String,
}

impl RosterItemDto {
    pub fn new(position: usize, entry: &RosterEntry) -> Self {
        let id = id_for_position(position);
        Self {
            position,
            id,
            display_id: display_id(id),
            name: entry.name.clone(),
        }
    }
}

// ============================================================================
// DETAIL DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBadgeDto {
    pub name: String,
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBarDto {
    pub name: String,
    pub label: String,
    pub value: u32,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailView {
    pub id: u32,
    pub display_id: String,
    pub name: String,
    pub sprite_src: String,
    pub sprite_alt: String,
    pub types: Vec<TypeBadgeDto>,
    pub stats: Vec<StatBarDto>,
    pub cry_url: Option<String>,
}

impl From<&DetailRecord> for DetailView {
    fn from(record: &DetailRecord) -> Self {
        let (sprite_src, sprite_alt) = match record.preferred_sprite() {
            Some(url) => (url.to_string(), record.name.clone()),
            None => (
                PLACEHOLDER_SPRITE.to_string(),
                PLACEHOLDER_SPRITE_ALT.to_string(),
            ),
        };

        Self {
            id: record.id,
            display_id: display_id(record.id),
            name: record.name.clone(),
            sprite_src,
            sprite_alt,
            types: record
                .types
                .iter()
                .map(|name| TypeBadgeDto {
                    name: name.clone(),
                    class: format!("type-badge type-{}", name),
                })
                .collect(),
            stats: record.stats.iter().map(StatBarDto::from).collect(),
            cry_url: record.cry_url.clone(),
        }
    }
}

impl From<&StatEntry> for StatBarDto {
    fn from(stat: &StatEntry) -> Self {
        let name = stat.name.as_str();
        Self {
            name: name.to_string(),
            label: stat_label(name),
            value: stat.base_value,
            percent: stat_bar_percent(stat.base_value),
        }
    }
}

/// `#` followed by the id padded to three digits
pub fn display_id(id: u32) -> String {
    format!("#{:03}", id)
}

/// Bar width relative to `STAT_CEILING`, clamped at 100
pub fn stat_bar_percent(value: u32) -> f64 {
    (f64::from(value) / f64::from(STAT_CEILING) * 100.0).min(100.0)
}

pub fn stat_label(name: &str) -> String {
    match name {
        "special-attack" => "Sp. Atk".to_string(),
        "special-defense" => "Sp. Def".to_string(),
        other => other.replace('-', " "),
    }
}
