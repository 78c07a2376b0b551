//! Raw game-state export as written by the tabletop game
//!
//! Field names on the wire follow the export script; the Rust names describe
//! what each field holds. Only `players`, `ambitions` and `court` are required,
//! everything else falls back to an empty or zero value.

use crate::error::{OverlayError, OverlayResult};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Complete game-state export
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawExport {
    #[serde(rename = "campaign", default)]
    pub is_campaign: bool,
    pub players: Vec<RawPlayer>,
    pub ambitions: Vec<RawAmbition>,
    pub court: Vec<RawCourtCard>,
    #[serde(default)]
    pub discard: Vec<String>,
    #[serde(default)]
    pub edicts: Vec<String>,
    #[serde(default)]
    pub laws: Vec<String>,
}

impl RawExport {
    /// Parse an export from a JSON string
    pub fn from_json(json: &str) -> OverlayResult<Self> {
        serde_json::from_str(json).map_err(OverlayError::MalformedInput)
    }

    /// Parse an export from any reader (file, stdin, request body)
    pub fn from_reader<R: Read>(reader: R) -> OverlayResult<Self> {
        serde_json::from_reader(reader).map_err(OverlayError::MalformedInput)
    }

    /// Number of seated players
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

/// One seated player
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPlayer {
    #[serde(default)]
    pub name: Option<String>,
    /// Hex color code without the leading `#`
    #[serde(rename = "color", default)]
    pub color_hex: Option<String>,
    #[serde(default)]
    pub initiative: bool,
    #[serde(default)]
    pub power: i64,
    #[serde(default)]
    pub objective: Option<i64>,
    /// Six resource slots, `null` for an empty slot
    #[serde(default)]
    pub resources: Vec<Option<String>>,
    /// The export writes either an empty list or a list of markers; only
    /// presence is meaningful, so the raw value is kept as-is.
    #[serde(default)]
    pub outrage: serde_json::Value,
    #[serde(rename = "cities", default)]
    pub city_count: i64,
    #[serde(rename = "spaceports", default)]
    pub spaceport_count: i64,
    #[serde(rename = "ships", default)]
    pub ship_count: i64,
    #[serde(rename = "agents", default)]
    pub agent_count: i64,
    #[serde(default)]
    pub cards: Vec<String>,
    #[serde(rename = "court", default)]
    pub court_card_ids: Vec<String>,
    #[serde(rename = "titles", default)]
    pub title_ids: Vec<String>,
}

/// Progress on one ambition track
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAmbition {
    pub id: String,
    /// Declared marker values (9/6/4 gold, 5/3/2 silver). The export may
    /// write them as numbers or as numeric strings.
    #[serde(rename = "declared", default, deserialize_with = "marker_values")]
    pub declared_markers: Vec<i64>,
    /// One entry per player, index-aligned with `players`
    #[serde(default)]
    pub ranking: Vec<i64>,
}

/// A card in the shared court
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCourtCard {
    pub id: String,
    /// One entry per player, index-aligned with `players`
    #[serde(rename = "influence", default)]
    pub influence_per_player: Vec<i64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MarkerValue {
    Number(i64),
    Text(String),
}

fn marker_values<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i64>, D::Error> {
    Vec::<MarkerValue>::deserialize(deserializer)?
        .into_iter()
        .map(|marker| match marker {
            MarkerValue::Number(value) => Ok(value),
            MarkerValue::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid marker value {:?}", text))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../fixtures/sample_export.json");

    #[test]
    fn test_parse_sample_export() {
        let raw = RawExport::from_json(SAMPLE).unwrap();
        assert!(raw.is_campaign);
        assert_eq!(raw.player_count(), 4);
        assert_eq!(raw.ambitions.len(), 5);
        assert_eq!(raw.court.len(), 5);
        assert_eq!(raw.edicts, vec!["ARCS-AID05A".to_string()]);

        let second = &raw.players[1];
        assert_eq!(second.name.as_deref(), Some("BlueChell"));
        assert_eq!(second.color_hex.as_deref(), Some("E1533D"));
        assert_eq!(second.resources[0].as_deref(), Some("psionic"));
        assert_eq!(second.resources[2], None);
        assert_eq!(raw.players[2].objective, Some(18));
        assert_eq!(raw.players[0].objective, None);
    }

    #[test]
    fn test_missing_collection_is_malformed() {
        let err = RawExport::from_json(r#"{"campaign": false, "players": [], "court": []}"#)
            .unwrap_err();
        assert!(matches!(err, OverlayError::MalformedInput(_)));
        assert!(err.to_string().contains("ambitions"));
    }

    #[test]
    fn test_optional_lists_default_to_empty() {
        let raw = RawExport::from_json(
            r#"{"players": [{"color": "FFB700"}], "ambitions": [], "court": []}"#,
        )
        .unwrap();
        assert!(!raw.is_campaign);
        assert!(raw.edicts.is_empty());
        assert!(raw.laws.is_empty());

        let player = &raw.players[0];
        assert!(player.cards.is_empty());
        assert!(player.outrage.is_null());
        assert_eq!(player.ship_count, 0);
    }

    #[test]
    fn test_from_reader() {
        let raw = RawExport::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(raw.players[3].ship_count, 12);
    }

    #[test]
    fn test_declared_markers_accept_numeric_strings() {
        let raw = RawExport::from_json(
            r#"{"players": [], "court": [], "ambitions": [
                {"id": "tycoon", "declared": ["9", 5, " 3 "], "ranking": []}
            ]}"#,
        )
        .unwrap();
        assert_eq!(raw.ambitions[0].declared_markers, vec![9, 5, 3]);

        let err = RawExport::from_json(
            r#"{"players": [], "court": [], "ambitions": [
                {"id": "tycoon", "declared": ["gold"]}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, OverlayError::MalformedInput(_)));
    }
}
