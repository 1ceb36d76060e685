//! Input/output operations, orchestration and error handling

/// Command-line parsing and command dispatch
pub mod cli;
/// Naming constants and defaults
pub mod configuration;
/// Error taxonomy and constructors
pub mod error;
/// Preview and generate operations
pub mod generate;
/// Source decoding and output encoding
pub mod image;
/// Status reporting for long-running operations
pub mod progress;
