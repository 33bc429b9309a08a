//! Matching rules deciding which trim categories are active

pub mod matching;

pub use matching::{evaluate, MatchResult, TrimGroup};
