//! Wire models for the BGG XML API2
//!
//! These cover the subset of fields the API actually populates for boardgame
//! searches and thing lookups. All structs serialize as camelCase JSON so
//! they can be embedded directly in API responses.

use serde::{Deserialize, Serialize};

/// Item category accepted by the search and thing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThingType {
    Boardgame,
    BoardgameExpansion,
}

impl ThingType {
    /// Wire value used in `type` query parameters and attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThingType::Boardgame => "boardgame",
            ThingType::BoardgameExpansion => "boardgameexpansion",
        }
    }
}

/// Result of a search call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// Total reported by the API; can exceed the number of items returned.
    pub total: u64,

    /// Matching items, in the order the API returned them.
    pub items: Vec<SearchItem>,
}

/// One search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    pub id: u64,

    #[serde(rename = "type")]
    pub kind: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_published: Option<i32>,
}

/// Full record for one item from the thing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thing {
    pub id: u64,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// All names the API lists, primary first when one is marked.
    pub names: Vec<ThingName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_published: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_players: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub playing_time: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_play_time: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_play_time: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,

    /// Related entities (categories, mechanics, designers, ...).
    pub links: Vec<Link>,
}

/// A name entry on a thing (`type` is "primary" or "alternate").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingName {
    #[serde(rename = "type")]
    pub kind: String,

    pub value: String,
}

/// A typed reference from a thing to a related entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(rename = "type")]
    pub kind: String,

    pub id: u64,

    pub value: String,
}

impl Thing {
    /// The primary display name, falling back to the first name listed.
    pub fn primary_name(&self) -> Option<&str> {
        self.names
            .iter()
            .find(|name| name.kind == "primary")
            .or_else(|| self.names.first())
            .map(|name| name.value.as_str())
    }

    /// Values of every link of the given kind (e.g. "boardgamecategory").
    pub fn link_values(&self, kind: &str) -> Vec<String> {
        self.links
            .iter()
            .filter(|link| link.kind == kind)
            .map(|link| link.value.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_thing() -> Thing {
        Thing {
            id: 13,
            kind: "boardgame".to_string(),
            thumbnail: None,
            image: None,
            names: vec![
                ThingName {
                    kind: "alternate".to_string(),
                    value: "Die Siedler von Catan".to_string(),
                },
                ThingName {
                    kind: "primary".to_string(),
                    value: "Catan".to_string(),
                },
            ],
            description: None,
            year_published: Some(1995),
            min_players: Some(3),
            max_players: Some(4),
            playing_time: Some(120),
            min_play_time: Some(60),
            max_play_time: Some(120),
            min_age: Some(10),
            links: vec![
                Link {
                    kind: "boardgamecategory".to_string(),
                    id: 1026,
                    value: "Negotiation".to_string(),
                },
                Link {
                    kind: "boardgamemechanic".to_string(),
                    id: 2072,
                    value: "Dice Rolling".to_string(),
                },
                Link {
                    kind: "boardgamecategory".to_string(),
                    id: 1008,
                    value: "Economic".to_string(),
                },
            ],
        }
    }

    #[test]
    fn primary_name_prefers_the_primary_entry() {
        assert_eq!(sample_thing().primary_name(), Some("Catan"));
    }

    #[test]
    fn primary_name_falls_back_to_the_first_listed() {
        let mut thing = sample_thing();
        for name in &mut thing.names {
            name.kind = "alternate".to_string();
        }
        assert_eq!(thing.primary_name(), Some("Die Siedler von Catan"));

        thing.names.clear();
        assert_eq!(thing.primary_name(), None);
    }

    #[test]
    fn link_values_filters_by_kind_preserving_order() {
        let thing = sample_thing();
        assert_eq!(
            thing.link_values("boardgamecategory"),
            vec!["Negotiation".to_string(), "Economic".to_string()]
        );
        assert_eq!(
            thing.link_values("boardgamemechanic"),
            vec!["Dice Rolling".to_string()]
        );
        assert!(thing.link_values("boardgamedesigner").is_empty());
    }

    #[test]
    fn things_serialize_as_camel_case_and_omit_missing_fields() {
        let json = serde_json::to_value(sample_thing()).unwrap();

        assert_eq!(json["type"], "boardgame");
        assert_eq!(json["yearPublished"], 1995);
        assert_eq!(json["minPlayers"], 3);
        assert_eq!(json["names"][1]["value"], "Catan");
        assert!(json.get("thumbnail").is_none());
    }
}
