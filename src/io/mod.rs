//! Input/output: configuration, CLI, logging, export and error handling

/// Command-line parsing and run orchestration
pub mod cli;
/// Drawing constants and runtime defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Layered exporter contract
pub mod export;
/// Log subscriber setup
pub mod logging;
/// SVG writer
pub mod svg;
