//! Batch processing of game export files

mod processor;

pub use processor::{output_path_for, process_exports, OutputFormat, ProcessOptions, ProcessingStats};
