//! Broadcast envelope for the extension pub/sub channel
//!
//! Game data is serialized to JSON, gzip-compressed and base64-encoded, then
//! wrapped in the message shape the extension backend expects. Delivery
//! (HTTP, tokens, retries) belongs to the caller.

use crate::error::{OverlayError, OverlayResult};
use crate::game_data::GameData;
use base64::{engine::general_purpose, Engine as _};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Pub/sub target for messages seen by every viewer
pub const BROADCAST_TARGET: &str = "broadcast";

/// Inner message carried as a JSON string in [`BroadcastPayload::message`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastMessage {
    pub compressed: bool,
    pub data: String,
}

/// Request body for the pub/sub endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastPayload {
    pub broadcaster_id: String,
    pub message: String,
    pub target: Vec<String>,
}

impl BroadcastPayload {
    /// Wrap game data for a channel's broadcast target
    pub fn new(broadcaster_id: impl Into<String>, game_data: &GameData) -> OverlayResult<Self> {
        let message = BroadcastMessage {
            compressed: true,
            data: encode_game_data(game_data)?,
        };

        Ok(Self {
            broadcaster_id: broadcaster_id.into(),
            message: serde_json::to_string(&message).map_err(OverlayError::Serialization)?,
            target: vec![BROADCAST_TARGET.to_string()],
        })
    }

    /// Recover the game data JSON carried by this payload
    pub fn game_data_json(&self) -> OverlayResult<serde_json::Value> {
        let message: BroadcastMessage =
            serde_json::from_str(&self.message).map_err(OverlayError::InvalidEnvelope)?;
        if !message.compressed {
            return Err(OverlayError::UncompressedMessage);
        }
        decode_game_data(&message.data)
    }
}

/// Serialize, gzip and base64-encode game data
pub fn encode_game_data(game_data: &GameData) -> OverlayResult<String> {
    let json = serde_json::to_vec(game_data).map_err(OverlayError::Serialization)?;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;

    Ok(general_purpose::STANDARD.encode(compressed))
}

/// Inverse of [`encode_game_data`], yielding the JSON value
pub fn decode_game_data(encoded: &str) -> OverlayResult<serde_json::Value> {
    let compressed = general_purpose::STANDARD.decode(encoded.trim())?;

    let mut json = Vec::new();
    GzDecoder::new(compressed.as_slice()).read_to_end(&mut json)?;

    serde_json::from_slice(&json).map_err(OverlayError::InvalidEnvelope)
}
