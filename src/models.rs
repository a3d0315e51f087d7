//! Frontend Models
//!
//! Wire structures matching PokeAPI payloads, and the view models the pages
//! build from them.

use serde::{Deserialize, Serialize};

// ========================
// Wire Types
// ========================

/// `{ name, url }` reference used throughout the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Response of `GET /pokemon?limit=&offset=`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

impl Sprites {
    /// Official artwork, else the default front sprite
    pub fn best(&self) -> Option<&str> {
        self.other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|art| art.front_default.as_deref())
            .or(self.front_default.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
}

/// Response of `GET /pokemon/{id or name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

impl PokemonRecord {
    /// Type names in slot order
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.type_ref.name.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectEntry {
    pub effect: String,
    #[serde(default)]
    pub short_effect: Option<String>,
    pub language: NamedResource,
}

/// Response of an ability URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
}

impl AbilityRecord {
    /// Effect text in the given language, if any entry carries it
    pub fn effect_in(&self, language: &str) -> Option<&str> {
        self.effect_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.effect.as_str())
    }
}

/// Response of a move URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

// ========================
// View Models
// ========================

/// One catalog card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub name: String,
    /// Position-derived number, 1-based across all loaded pages
    pub id: u32,
    pub image_url: String,
    /// Primary type
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityDescription {
    pub name: String,
    pub effect_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSummary {
    pub name: String,
    pub category: String,
}

/// Everything the detail page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: u32,
    pub name: String,
    pub image_url: Option<String>,
    pub categories: Vec<String>,
    pub abilities: Vec<AbilityDescription>,
    pub moves: Vec<MoveSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_decodes_nested_artwork() {
        let json = r#"{
            "id": 6,
            "name": "charizard",
            "sprites": {
                "front_default": "front.png",
                "other": { "official-artwork": { "front_default": "art.png" } }
            },
            "types": [
                { "slot": 2, "type": { "name": "flying", "url": "" } },
                { "slot": 1, "type": { "name": "fire", "url": "" } }
            ],
            "abilities": [],
            "moves": [{ "move": { "name": "scratch", "url": "m/10" } }],
            "height": 17
        }"#;
        let record: PokemonRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.sprites.best(), Some("art.png"));
        assert_eq!(record.type_names(), vec!["fire", "flying"]);
        assert_eq!(record.moves[0].move_ref.name, "scratch");
    }

    #[test]
    fn test_sprite_falls_back_to_front_default() {
        let sprites = Sprites {
            front_default: Some("front.png".into()),
            other: Some(OtherSprites { official_artwork: Some(Artwork { front_default: None }) }),
        };
        assert_eq!(sprites.best(), Some("front.png"));
        assert_eq!(Sprites::default().best(), None);
    }

    #[test]
    fn test_effect_in_language() {
        let json = r#"{
            "name": "overgrow",
            "effect_entries": [
                { "effect": "Erhöht", "language": { "name": "de", "url": "" } },
                { "effect": "Boosts grass moves", "short_effect": "Boost", "language": { "name": "en", "url": "" } }
            ]
        }"#;
        let ability: AbilityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(ability.effect_in("en"), Some("Boosts grass moves"));
        assert_eq!(ability.effect_in("fr"), None);
    }
}
