//! Game data shape consumed by the overlay
//!
//! Per-player fields are column vectors index-aligned with the export's
//! `players` list. Wire names are camelCase to match the overlay client.

use crate::lookup::{Ambition, MarkerLabel, PlayerColor};
use crate::podium::Podium;
use serde::Serialize;

/// Number of outrage slots on a player board
pub const OUTRAGE_SLOTS: usize = 5;

/// Complete transformer output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub player_data: PlayerData,
    #[serde(rename = "gameData")]
    pub general_data: GeneralData,
}

/// Per-player projection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerData {
    pub name: Vec<String>,
    pub fate: Vec<String>,
    pub color: Vec<PlayerColor>,
    pub power: Vec<i64>,
    pub objective_progress: Vec<i64>,
    pub resources: Vec<Vec<String>>,
    pub supply: Supply,
    pub outrage: Vec<[bool; OUTRAGE_SLOTS]>,
    pub court_cards: Vec<Vec<String>>,
    pub ambition_progress: PerAmbition<Vec<i64>>,
    // Flagship boards are not exported by the game yet
    pub has_flagship: Vec<bool>,
    pub flagship_board: Vec<Vec<String>>,
    pub titles: Vec<Vec<String>>,
}

impl PlayerData {
    /// Length of every per-player column, or `None` if they disagree
    pub fn player_count(&self) -> Option<usize> {
        let n = self.name.len();
        let lengths = [
            self.fate.len(),
            self.color.len(),
            self.power.len(),
            self.objective_progress.len(),
            self.resources.len(),
            self.supply.cities.len(),
            self.supply.starports.len(),
            self.supply.ships.len(),
            self.supply.agents.len(),
            self.supply.favors.len(),
            self.outrage.len(),
            self.court_cards.len(),
            self.has_flagship.len(),
            self.flagship_board.len(),
            self.titles.len(),
        ];
        let rankings_aligned = self.ambition_progress.values().all(|r| r.len() == n);

        (lengths.iter().all(|len| *len == n) && rankings_aligned).then_some(n)
    }
}

/// Pieces remaining in each player's supply
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Supply {
    pub cities: Vec<i64>,
    pub starports: Vec<i64>,
    pub ships: Vec<i64>,
    pub agents: Vec<i64>,
    pub favors: Vec<Vec<String>>,
}

/// Table-wide projection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralData {
    pub is_campaign: bool,
    pub has_blightkin: bool,
    pub has_edenguard: bool,
    pub ambition_declarations: PerAmbition<Vec<MarkerLabel>>,
    pub ambition_podium: PerAmbition<Podium>,
    pub court_cards: Vec<CourtCard>,
    pub edicts: Vec<String>,
    pub laws: Vec<String>,
}

/// Court card with the agents placed on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourtCard {
    pub id: String,
    pub agents: Vec<Agent>,
}

/// Influence of one player on a court card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub color: PlayerColor,
    pub value: i64,
}

/// One value per ambition track, always carrying all seven keys
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PerAmbition<T> {
    pub tycoon: T,
    pub tyrant: T,
    pub warlord: T,
    pub keeper: T,
    pub empath: T,
    pub blightkin: T,
    pub edenguard: T,
}

impl<T> PerAmbition<T> {
    /// Build the table by evaluating `f` once per ambition, in overlay order
    pub fn from_fn(mut f: impl FnMut(Ambition) -> T) -> Self {
        Self {
            tycoon: f(Ambition::Tycoon),
            tyrant: f(Ambition::Tyrant),
            warlord: f(Ambition::Warlord),
            keeper: f(Ambition::Keeper),
            empath: f(Ambition::Empath),
            blightkin: f(Ambition::Blightkin),
            edenguard: f(Ambition::Edenguard),
        }
    }

    pub fn get(&self, ambition: Ambition) -> &T {
        match ambition {
            Ambition::Tycoon => &self.tycoon,
            Ambition::Tyrant => &self.tyrant,
            Ambition::Warlord => &self.warlord,
            Ambition::Keeper => &self.keeper,
            Ambition::Empath => &self.empath,
            Ambition::Blightkin => &self.blightkin,
            Ambition::Edenguard => &self.edenguard,
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        Ambition::ALL.into_iter().map(move |a| self.get(a))
    }
}
