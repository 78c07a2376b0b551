//! Arcs overlay CLI library
//!
//! Command-line front end for the overlay transformer. It reads game-state
//! exports saved by the table, converts them with `arcs-overlay-core`, and
//! writes the game data the overlay consumes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │  export files   │────▶│  batch processor │────▶│ *.gamedata.json │
//! │  (*.json)       │     │  (rayon pool)    │     │ *.pubsub.json   │
//! └─────────────────┘     └──────────────────┘     └─────────────────┘
//!                                  │
//!                                  ▼
//!                         ┌──────────────────┐
//!                         │ arcs-overlay-core│  (transform, envelope)
//!                         └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`batch`] - Batch processing for export files
//! - [`error`] - Error types

pub mod batch;
pub mod error;

pub use batch::{process_exports, OutputFormat, ProcessOptions, ProcessingStats};
pub use error::{CliError, CliResult};
