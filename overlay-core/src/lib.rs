//! Arcs overlay core
//!
//! Turns a game-state export from the tabletop table into the game data the
//! stream overlay renders.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │  Game export    │────▶│   transform()    │────▶│   GameData      │
//! │  (RawExport)    │JSON │  pure, stateless │     │ playerData +    │
//! └─────────────────┘     └──────────────────┘     │ gameData        │
//!                                                  └────────┬────────┘
//!                                                           │
//!                                                           ▼
//!                                                  ┌─────────────────┐
//!                                                  │ BroadcastPayload│  (gzip + base64)
//!                                                  └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`raw`] - Export input model
//! - [`lookup`] - Color, ambition, marker and fate tables
//! - [`podium`] - Ambition podium with tie handling
//! - [`game_data`] - Overlay output model
//! - [`transform`] - The export -> game data transformation
//! - [`envelope`] - Pub/sub broadcast encoding
//! - [`error`] - Error types

pub mod envelope;
pub mod error;
pub mod game_data;
pub mod lookup;
pub mod podium;
pub mod raw;
pub mod transform;

pub use envelope::{decode_game_data, encode_game_data, BroadcastPayload};
pub use error::{OverlayError, OverlayResult};
pub use game_data::{GameData, GeneralData, PerAmbition, PlayerData};
pub use lookup::{resolve_color, Ambition, Fate, MarkerLabel, PlayerColor};
pub use podium::{compute_podium, Podium};
pub use raw::{RawAmbition, RawCourtCard, RawExport, RawPlayer};
pub use transform::transform;
