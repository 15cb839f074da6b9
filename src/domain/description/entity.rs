use serde::{Deserialize, Serialize};

/// Shown when no English flavor text exists for an entry
pub const NO_DESCRIPTION_TEXT: &str = "No description available.";

const PREFERRED_LANGUAGE: &str = "en";
const PREFERRED_VERSION: &str = "red";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorEntry {
    pub language_code: String,
    pub version_name: String,
    pub text: String,
}

impl FlavorEntry {
    pub fn new(
        language_code: impl Into<String>,
        version_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            language_code: language_code.into(),
            version_name: version_name.into(),
            text: text.into(),
        }
    }
}

/// Flavor text entries of a species, persisted under `description:{id}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DescriptionRecord {
    pub entries: Vec<FlavorEntry>,
}

impl DescriptionRecord {
    pub fn new(entries: Vec<FlavorEntry>) -> Self {
        Self { entries }
    }

    /// Picks the English Red text, then any English text, then the fallback.
    pub fn select_text(&self) -> String {
        let english = |entry: &&FlavorEntry| entry.language_code == PREFERRED_LANGUAGE;

        self.entries
            .iter()
            .filter(english)
            .find(|entry| entry.version_name == PREFERRED_VERSION)
            .or_else(|| self.entries.iter().find(english))
            .map(|entry| clean_flavor_text(&entry.text))
            .unwrap_or_else(|| NO_DESCRIPTION_TEXT.to_string())
    }
}

/// Replaces form-feed and newline characters with spaces
pub fn clean_flavor_text(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\u{000C}' || c == '\n' { ' ' } else { c })
        .collect()
}
