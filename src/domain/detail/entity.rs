use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// The six base stats, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatName {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatName {
    pub const ALL: [StatName; 6] = [
        StatName::Hp,
        StatName::Attack,
        StatName::Defense,
        StatName::SpecialAttack,
        StatName::SpecialDefense,
        StatName::Speed,
    ];

    /// Upstream identifier, e.g. `special-attack`
    pub fn as_str(&self) -> &'static str {
        match self {
            StatName::Hp => "hp",
            StatName::Attack => "attack",
            StatName::Defense => "defense",
            StatName::SpecialAttack => "special-attack",
            StatName::SpecialDefense => "special-defense",
            StatName::Speed => "speed",
        }
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatName::ALL
            .into_iter()
            .find(|stat| stat.as_str() == s)
            .ok_or_else(|| DomainError::InvariantViolation(format!("Unknown stat: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: StatName,
    pub base_value: u32,
}

/// Slimmed detail record, the only shape persisted under `detail:{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,
    pub sprite_url: Option<String>,
    pub animated_sprite_url: Option<String>,
    pub types: Vec<String>,
    pub stats: Vec<StatEntry>,
    pub cry_url: Option<String>,
}

impl DetailRecord {
    /// Animated sprite when present, otherwise the default one
    pub fn preferred_sprite(&self) -> Option<&str> {
        self.animated_sprite_url
            .as_deref()
            .or(self.sprite_url.as_deref())
    }

    pub fn stat(&self, name: StatName) -> Option<u32> {
        self.stats
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.base_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DetailRecord {
        DetailRecord {
            id: 25,
            name: "pikachu".to_string(),
            sprite_url: Some("https://img/25.png".to_string()),
            animated_sprite_url: None,
            types: vec!["electric".to_string()],
            stats: StatName::ALL
                .into_iter()
                .map(|name| StatEntry { name, base_value: 50 })
                .collect(),
            cry_url: None,
        }
    }

    #[test]
    fn test_stat_name_roundtrip() {
        for stat in StatName::ALL {
            assert_eq!(stat.as_str().parse::<StatName>().unwrap(), stat);
        }
        assert!("luck".parse::<StatName>().is_err());
    }

    #[test]
    fn test_stat_name_serializes_kebab_case() {
        let json = serde_json::to_string(&StatName::SpecialDefense).unwrap();
        assert_eq!(json, "\"special-defense\"");
    }

    #[test]
    fn test_preferred_sprite_falls_back_to_default() {
        let mut record = record();
        assert_eq!(record.preferred_sprite(), Some("https://img/25.png"));

        record.animated_sprite_url = Some("https://img/25.gif".to_string());
        assert_eq!(record.preferred_sprite(), Some("https://img/25.gif"));

        record.animated_sprite_url = None;
        record.sprite_url = None;
        assert_eq!(record.preferred_sprite(), None);
    }
}
