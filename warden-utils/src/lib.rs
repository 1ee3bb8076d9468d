/// Process environment helpers shared by configuration loaders.
pub mod env;
/// Shared formatting helpers (colors, day counts).
pub mod formatting;
/// Pure parser helpers.
pub mod parse;
/// Shared time helpers.
pub mod time;
