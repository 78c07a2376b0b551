//! Export -> game data transformation
//!
//! [`transform`] is a pure function of the export. It never mutates its input
//! and keeps no state between calls; its only side effect is diagnostic logging.

use crate::game_data::{
    Agent, CourtCard, GameData, GeneralData, PerAmbition, PlayerData, Supply, OUTRAGE_SLOTS,
};
use crate::lookup::{normalize_card_id, Ambition, Fate, MarkerLabel, PlayerColor};
use crate::podium::{compute_podium, Podium};
use crate::raw::{RawAmbition, RawCourtCard, RawExport, RawPlayer};
use log::{debug, warn};

/// Convert a game-state export into overlay game data
pub fn transform(raw: &RawExport) -> GameData {
    let view = ExportView::new(raw);
    let player_data = view.player_data();
    let general_data = view.general_data(&player_data);

    debug!(
        "Transformed export: {} players, {} court cards",
        raw.player_count(),
        general_data.court_cards.len()
    );

    GameData {
        player_data,
        general_data,
    }
}

/// Borrowed view of an export with ambition ids resolved once
struct ExportView<'a> {
    raw: &'a RawExport,
    ambitions: PerAmbition<Option<&'a RawAmbition>>,
}

impl<'a> ExportView<'a> {
    fn new(raw: &'a RawExport) -> Self {
        for ambition in &raw.ambitions {
            if Ambition::from_id(&ambition.id).is_none() {
                debug!("Ignoring unknown ambition id {:?}", ambition.id);
            }
        }

        // First record wins when an id appears twice
        let ambitions = PerAmbition::from_fn(|id| {
            raw.ambitions
                .iter()
                .find(|a| Ambition::from_id(&a.id) == Some(id))
        });

        Self { raw, ambitions }
    }

    fn players(&self) -> &'a [RawPlayer] {
        &self.raw.players
    }

    fn column<T>(&self, f: impl FnMut(&'a RawPlayer) -> T) -> Vec<T> {
        self.players().iter().map(f).collect()
    }

    fn player_data(&self) -> PlayerData {
        let n = self.players().len();

        PlayerData {
            name: self.column(|p| p.name.clone().unwrap_or_default()),
            fate: self.column(|p| extract_fate(&p.cards)),
            color: self.column(|p| PlayerColor::from_hex(p.color_hex.as_deref())),
            power: self.column(|p| p.power),
            objective_progress: self.column(|p| p.objective.unwrap_or(0)),
            resources: self.column(|p| {
                p.resources
                    .iter()
                    .map(|slot| slot.clone().unwrap_or_default())
                    .collect()
            }),
            supply: Supply {
                cities: self.column(|p| p.city_count),
                starports: self.column(|p| p.spaceport_count),
                ships: self.column(|p| p.ship_count),
                agents: self.column(|p| p.agent_count),
                favors: vec![Vec::new(); n],
            },
            outrage: self.column(|p| normalize_outrage(&p.outrage)),
            court_cards: self.column(|p| {
                p.court_card_ids
                    .iter()
                    .map(|id| normalize_card_id(id))
                    .collect()
            }),
            ambition_progress: PerAmbition::from_fn(|a| self.ranking_for(a)),
            has_flagship: vec![false; n],
            flagship_board: vec![vec![String::new()]; n],
            titles: self.column(|p| p.title_ids.clone()),
        }
    }

    fn general_data(&self, player_data: &PlayerData) -> GeneralData {
        let has_fate = |fate: Fate| {
            player_data
                .fate
                .iter()
                .any(|token| Fate::from_token(token) == Some(fate))
        };

        GeneralData {
            is_campaign: self.raw.is_campaign,
            has_blightkin: has_fate(Fate::Naturalist),
            has_edenguard: has_fate(Fate::Guardian),
            ambition_declarations: PerAmbition::from_fn(|a| self.declared_labels_for(a)),
            ambition_podium: PerAmbition::from_fn(|a| {
                self.podium_for(a, player_data.ambition_progress.get(a))
            }),
            court_cards: self
                .raw
                .court
                .iter()
                .map(|card| project_court_card(card, self.players()))
                .collect(),
            edicts: self
                .raw
                .edicts
                .iter()
                .map(|id| normalize_card_id(id))
                .collect(),
            laws: self.raw.laws.clone(),
        }
    }

    /// Ranking for an ambition, sized to the player count. Absent ambitions
    /// rank every player at zero.
    fn ranking_for(&self, ambition: Ambition) -> Vec<i64> {
        let n = self.players().len();
        match self.ambitions.get(ambition) {
            Some(record) => {
                let mut ranking = record.ranking.clone();
                if ranking.len() != n {
                    warn!(
                        "Ambition {} has {} ranking entries for {} players",
                        ambition,
                        ranking.len(),
                        n
                    );
                }
                ranking.resize(n, 0);
                ranking
            }
            None => vec![0; n],
        }
    }

    /// Podium from the sized ranking produced by [`Self::ranking_for`]
    fn podium_for(&self, ambition: Ambition, ranking: &[i64]) -> Podium {
        if self.ambitions.get(ambition).is_none() {
            warn!("Ambition {} not present in export", ambition);
            return Podium::missing();
        }
        compute_podium(ranking)
    }

    fn declared_labels_for(&self, ambition: Ambition) -> Vec<MarkerLabel> {
        let Some(record) = self.ambitions.get(ambition) else {
            return Vec::new();
        };

        record
            .declared_markers
            .iter()
            .filter_map(|value| {
                let label = MarkerLabel::from_value(*value);
                if label.is_none() {
                    warn!("Dropping unknown {} marker value {}", ambition, value);
                }
                label
            })
            .collect()
    }
}

/// Fate token of the first card mentioning `FATE`, normalized. Players with
/// no fate card are reported as Steward.
pub fn extract_fate(cards: &[String]) -> String {
    cards
        .iter()
        .find(|card| card.contains("FATE"))
        .map(|card| normalize_card_id(card))
        .unwrap_or_else(|| Fate::Steward.token().to_string())
}

/// Any outrage marker lights every slot; otherwise all slots are clear
pub fn normalize_outrage(outrage: &serde_json::Value) -> [bool; OUTRAGE_SLOTS] {
    let present = outrage.as_array().is_some_and(|markers| !markers.is_empty());
    [present; OUTRAGE_SLOTS]
}

/// Agents on a court card, one per player with positive influence, in seat order
pub fn project_court_card(card: &RawCourtCard, players: &[RawPlayer]) -> CourtCard {
    let agents = card
        .influence_per_player
        .iter()
        .enumerate()
        .filter(|(_, value)| **value > 0)
        .map(|(idx, value)| Agent {
            color: PlayerColor::from_hex(players.get(idx).and_then(|p| p.color_hex.as_deref())),
            value: *value,
        })
        .collect();

    CourtCard {
        id: normalize_card_id(&card.id),
        agents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: &str = include_str!("../fixtures/sample_export.json");

    fn sample() -> RawExport {
        RawExport::from_json(SAMPLE).unwrap()
    }

    fn export(value: serde_json::Value) -> RawExport {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_sample_player_data() {
        let data = transform(&sample()).player_data;

        assert_eq!(data.player_count(), Some(4));
        assert_eq!(data.name, vec!["", "BlueChell", "", ""]);
        assert_eq!(
            data.fate,
            vec!["ARCS_FATE01", "ARCS_FATE07", "ARCS_FATE04", "ARCS_FATE06"]
        );
        assert_eq!(
            data.color,
            vec![
                PlayerColor::Blue,
                PlayerColor::Red,
                PlayerColor::Yellow,
                PlayerColor::White
            ]
        );
        assert_eq!(data.objective_progress, vec![0, 0, 18, 0]);
        assert_eq!(data.resources[1], vec!["psionic", "material", "", "", "", ""]);
        assert_eq!(data.supply.ships, vec![15, 15, 15, 12]);
        assert_eq!(data.supply.starports, vec![5, 5, 5, 5]);
        assert!(data.supply.favors.iter().all(Vec::is_empty));
        assert_eq!(data.outrage[0], [false; OUTRAGE_SLOTS]);
        assert_eq!(data.ambition_progress.tyrant, vec![0, 0, 4, 0]);
        assert_eq!(data.ambition_progress.blightkin, vec![0, 0, 0, 0]);
        assert_eq!(data.has_flagship, vec![false; 4]);
        assert_eq!(data.flagship_board[3], vec![String::new()]);
        assert_eq!(data.titles[0], vec!["ARCS-AID09A"]);
    }

    #[test]
    fn test_sample_general_data() {
        let _ = env_logger::builder().is_test(true).try_init();
        let data = transform(&sample()).general_data;

        assert!(data.is_campaign);
        assert!(!data.has_blightkin);
        assert!(!data.has_edenguard);
        assert_eq!(data.ambition_podium.tycoon, compute_podium(&[0, 0, 1, 0]));
        assert_eq!(data.ambition_podium.tycoon.winners, vec![2]);
        assert!(data.ambition_podium.tycoon.runners_up.is_empty());
        assert_eq!(data.ambition_podium.keeper.runners_up, vec![0, 1, 2, 3]);
        assert!(data.ambition_podium.blightkin.is_missing());
        assert!(data.ambition_declarations.edenguard.is_empty());
        assert_eq!(data.edicts, vec!["ARCS_AID05A"]);
        assert!(data.laws.is_empty());

        assert_eq!(data.court_cards.len(), 5);
        let cc07 = &data.court_cards[1];
        assert_eq!(cc07.id, "ARCS_CC07");
        assert_eq!(
            cc07.agents,
            vec![
                Agent { color: PlayerColor::Blue, value: 4 },
                Agent { color: PlayerColor::Yellow, value: 1 },
                Agent { color: PlayerColor::White, value: 1 },
            ]
        );
        assert!(data.court_cards[0].agents.is_empty());
    }

    #[test]
    fn test_court_agents_follow_seat_colors() {
        let raw = export(json!({
            "players": [
                {"color": "0095A9"},
                {"color": "E1533D"},
                {"color": "FFB700"},
                {"color": "D7D2CB"}
            ],
            "ambitions": [],
            "court": [{"id": "ARCS-CC07", "influence": [4, 0, 1, 1]}]
        }));
        let card = project_court_card(&raw.court[0], &raw.players);
        let json = serde_json::to_value(&card.agents).unwrap();
        assert_eq!(
            json,
            json!([
                {"color": "blue", "value": 4},
                {"color": "yellow", "value": 1},
                {"color": "white", "value": 1}
            ])
        );
    }

    #[test]
    fn test_court_influence_beyond_seats_is_white() {
        let raw = export(json!({
            "players": [{"color": "E1533D"}],
            "ambitions": [],
            "court": [{"id": "ARCS-CC01", "influence": [0, 2, -1]}]
        }));
        let card = project_court_card(&raw.court[0], &raw.players);
        assert_eq!(card.agents, vec![Agent { color: PlayerColor::White, value: 2 }]);
    }

    #[test]
    fn test_extract_fate() {
        let cards = |ids: &[&str]| ids.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(extract_fate(&cards(&["ARCS-BC01", "ARCS-FATE12", "ARCS-FATE03"])), "ARCS_FATE12");
        assert_eq!(extract_fate(&cards(&["ARCS-BC01"])), "ARCS_FATE01");
        assert_eq!(extract_fate(&[]), Fate::Steward.token());
    }

    #[test]
    fn test_normalize_outrage() {
        assert_eq!(normalize_outrage(&json!([])), [false; OUTRAGE_SLOTS]);
        assert_eq!(normalize_outrage(&json!(["material"])), [true; OUTRAGE_SLOTS]);
        assert_eq!(normalize_outrage(&json!([1, 2, 3, 4, 5, 6, 7])), [true; OUTRAGE_SLOTS]);
        assert_eq!(normalize_outrage(&serde_json::Value::Null), [false; OUTRAGE_SLOTS]);
        assert_eq!(normalize_outrage(&json!({"material": true})), [false; OUTRAGE_SLOTS]);
    }

    #[test]
    fn test_archetype_flags_follow_fates() {
        let raw = export(json!({
            "players": [
                {"color": "0095A9", "cards": ["ARCS-FATE21"]},
                {"color": "E1533D", "cards": ["ARCS-FATE20"]}
            ],
            "ambitions": [],
            "court": []
        }));
        let data = transform(&raw).general_data;
        assert!(data.has_blightkin);
        assert!(data.has_edenguard);

        let raw = export(json!({
            "players": [
                {"color": "0095A9", "cards": ["ARCS-FATE99"]},
                {"color": "E1533D", "cards": ["ARCS-FATE2"]}
            ],
            "ambitions": [],
            "court": []
        }));
        let data = transform(&raw).general_data;
        assert!(!data.has_blightkin);
        assert!(!data.has_edenguard);
    }

    #[test]
    fn test_declared_markers() {
        let raw = export(json!({
            "players": [{}, {}],
            "ambitions": [
                {"id": "tycoon", "declared": [9, 5], "ranking": [1, 0]},
                {"id": "warlord", "declared": [6, 7, 2], "ranking": [0, 0]}
            ],
            "court": []
        }));
        let data = transform(&raw).general_data;
        assert_eq!(
            data.ambition_declarations.tycoon,
            vec![MarkerLabel::FirstGold, MarkerLabel::FirstSilver]
        );
        assert_eq!(
            data.ambition_declarations.warlord,
            vec![MarkerLabel::SecondGold, MarkerLabel::ThirdSilver]
        );
        assert!(data.ambition_declarations.keeper.is_empty());
    }

    #[test]
    fn test_rankings_are_sized_to_players() {
        let raw = export(json!({
            "players": [{}, {}, {}],
            "ambitions": [
                {"id": "tycoon", "ranking": [3]},
                {"id": "tyrant", "ranking": [1, 2, 3, 4]},
                {"id": "Keeper", "ranking": [0, 2, 1]},
                {"id": "magnate", "ranking": [9, 9, 9]}
            ],
            "court": []
        }));
        let data = transform(&raw);
        let progress = &data.player_data.ambition_progress;
        assert_eq!(progress.tycoon, vec![3, 0, 0]);
        assert_eq!(progress.tyrant, vec![1, 2, 3]);
        assert_eq!(progress.keeper, vec![0, 2, 1]);
        assert_eq!(progress.empath, vec![0, 0, 0]);
        assert_eq!(data.player_data.player_count(), Some(3));
        assert_eq!(data.general_data.ambition_podium.keeper.winners, vec![1]);
        assert_eq!(data.general_data.ambition_podium.keeper.runners_up, vec![2]);
    }

    #[test]
    fn test_no_players() {
        let raw = export(json!({"players": [], "ambitions": [], "court": []}));
        let data = transform(&raw);
        assert_eq!(data.player_data.player_count(), Some(0));
        assert!(data.player_data.ambition_progress.tycoon.is_empty());
    }

    #[test]
    fn test_transform_is_repeatable() {
        let raw = sample();
        let before = raw.clone();
        let first = transform(&raw);
        let second = transform(&raw);
        assert_eq!(first, second);
        assert_eq!(raw, before);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_output_wire_keys() {
        let json = serde_json::to_value(transform(&sample())).unwrap();
        assert!(json["playerData"]["objectiveProgress"].is_array());
        assert!(json["playerData"]["supply"]["starports"].is_array());
        assert_eq!(json["playerData"]["color"][0], "blue");
        assert_eq!(json["gameData"]["isCampaign"], true);
        assert_eq!(json["gameData"]["ambitionPodium"]["tyrant"], json!([[2], []]));
        assert_eq!(json["gameData"]["ambitionPodium"]["edenguard"], json!([[-1], [-1]]));
        assert_eq!(json["gameData"]["ambitionDeclarations"]["tycoon"], json!([]));
    }
}
