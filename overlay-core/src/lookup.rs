//! Static lookup tables: player colors, ambitions, declaration markers, fates

use serde::Serialize;

/// Player color as named by the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Blue,
    Yellow,
    White,
    Red,
}

impl PlayerColor {
    /// Resolve an exported hex code. Unknown or missing codes are white.
    pub fn from_hex(hex: Option<&str>) -> Self {
        match hex {
            Some("0095A9") => PlayerColor::Blue,
            Some("FFB700") => PlayerColor::Yellow,
            Some("D7D2CB") => PlayerColor::White,
            Some("E1533D") => PlayerColor::Red,
            _ => PlayerColor::White,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerColor::Blue => "blue",
            PlayerColor::Yellow => "yellow",
            PlayerColor::White => "white",
            PlayerColor::Red => "red",
        }
    }
}

/// Resolve a hex color code to its color name
pub fn resolve_color(hex: &str) -> &'static str {
    PlayerColor::from_hex(Some(hex)).as_str()
}

/// The seven ambition tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ambition {
    Tycoon,
    Tyrant,
    Warlord,
    Keeper,
    Empath,
    Blightkin,
    Edenguard,
}

impl Ambition {
    /// All ambitions in overlay order
    pub const ALL: [Ambition; 7] = [
        Ambition::Tycoon,
        Ambition::Tyrant,
        Ambition::Warlord,
        Ambition::Keeper,
        Ambition::Empath,
        Ambition::Blightkin,
        Ambition::Edenguard,
    ];

    /// Parse an export ambition id (case-insensitive, surrounding whitespace ignored)
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "tycoon" => Some(Ambition::Tycoon),
            "tyrant" => Some(Ambition::Tyrant),
            "warlord" => Some(Ambition::Warlord),
            "keeper" => Some(Ambition::Keeper),
            "empath" => Some(Ambition::Empath),
            "blightkin" => Some(Ambition::Blightkin),
            "edenguard" => Some(Ambition::Edenguard),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Ambition::Tycoon => "tycoon",
            Ambition::Tyrant => "tyrant",
            Ambition::Warlord => "warlord",
            Ambition::Keeper => "keeper",
            Ambition::Empath => "empath",
            Ambition::Blightkin => "blightkin",
            Ambition::Edenguard => "edenguard",
        }
    }
}

impl std::fmt::Display for Ambition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label of a declared ambition marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerLabel {
    FirstGold,
    SecondGold,
    ThirdGold,
    FirstSilver,
    SecondSilver,
    ThirdSilver,
}

impl MarkerLabel {
    /// Map a marker's point value to its label
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            9 => Some(MarkerLabel::FirstGold),
            6 => Some(MarkerLabel::SecondGold),
            4 => Some(MarkerLabel::ThirdGold),
            5 => Some(MarkerLabel::FirstSilver),
            3 => Some(MarkerLabel::SecondSilver),
            2 => Some(MarkerLabel::ThirdSilver),
            _ => None,
        }
    }
}

/// Campaign fate cards, in deck order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fate {
    Steward,
    Founder,
    Magnate,
    Advocate,
    Caretaker,
    Partisan,
    Admiral,
    Believer,
    Pathfinder,
    Hegemon,
    PlanetBreaker,
    Pirate,
    BlightSpeaker,
    Pacifist,
    Peacekeeper,
    Warden,
    Overlord,
    Survivalist,
    Redeemer,
    Guardian,
    Naturalist,
    Gatekeeper,
    Conspirator,
    Judge,
}

impl Fate {
    const TOKENS: [(Fate, &'static str); 24] = [
        (Fate::Steward, "ARCS_FATE01"),
        (Fate::Founder, "ARCS_FATE02"),
        (Fate::Magnate, "ARCS_FATE03"),
        (Fate::Advocate, "ARCS_FATE04"),
        (Fate::Caretaker, "ARCS_FATE05"),
        (Fate::Partisan, "ARCS_FATE06"),
        (Fate::Admiral, "ARCS_FATE07"),
        (Fate::Believer, "ARCS_FATE08"),
        (Fate::Pathfinder, "ARCS_FATE09"),
        (Fate::Hegemon, "ARCS_FATE10"),
        (Fate::PlanetBreaker, "ARCS_FATE11"),
        (Fate::Pirate, "ARCS_FATE12"),
        (Fate::BlightSpeaker, "ARCS_FATE13"),
        (Fate::Pacifist, "ARCS_FATE14"),
        (Fate::Peacekeeper, "ARCS_FATE15"),
        (Fate::Warden, "ARCS_FATE16"),
        (Fate::Overlord, "ARCS_FATE17"),
        (Fate::Survivalist, "ARCS_FATE18"),
        (Fate::Redeemer, "ARCS_FATE19"),
        (Fate::Guardian, "ARCS_FATE20"),
        (Fate::Naturalist, "ARCS_FATE21"),
        (Fate::Gatekeeper, "ARCS_FATE22"),
        (Fate::Conspirator, "ARCS_FATE23"),
        (Fate::Judge, "ARCS_FATE24"),
    ];

    /// Normalized card token for this fate
    pub fn token(self) -> &'static str {
        // TOKENS is in declaration order
        Self::TOKENS[self as usize].1
    }

    /// Look up a fate by its normalized card token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::TOKENS
            .iter()
            .find(|(_, t)| *t == token)
            .map(|(fate, _)| *fate)
    }
}

/// Normalize a card identifier for the overlay: the first `-` becomes `_`
/// (`ARCS-CC07` -> `ARCS_CC07`).
pub fn normalize_card_id(id: &str) -> String {
    id.replacen('-', "_", 1)
}
