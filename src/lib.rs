//! new-component generates React component boilerplate.
//! It resolves layered configuration, fills a language template with the
//! component name, formats the result and writes it without overwriting
//! anything that already exists.

/// Command-line interface module
pub mod cli;

/// Layered configuration handling
/// Merges defaults, ~/.new-component-config.json and ./.new-component-config.json
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Formatting of generated source with Prettier or the built-in dprint engine
pub mod formatter;

/// Small filesystem helpers
pub mod ioutils;

/// Template loading from the tool's install location
pub mod loader;

/// Component materialization pipeline
pub mod processor;

/// User-facing progress output
pub mod reporter;
