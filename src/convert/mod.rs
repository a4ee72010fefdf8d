//! The conversion core: request model, input validation, per-element
//! rendering, and run orchestration.

/// Run orchestration (validate → parse → render → post-process).
pub mod engine;
/// Fail-fast per-element rendering over a parsed map.
pub mod render;
/// Conversion request model and its closed enumerations.
pub mod request;
/// Input-file checks and output-directory preparation.
pub mod validate;
