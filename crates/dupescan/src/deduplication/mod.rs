//! Duplicate contact detection
//!
//! This module provides field normalization, string similarity, pairwise
//! scoring and the pair enumeration that ties them together.

mod normalization;
mod orchestration;
mod scoring;
mod similarity;

pub use normalization::{
    full_name, normalize_email, normalize_name, normalize_phone, NormalizedFields,
};
pub use orchestration::{
    find_duplicates, find_duplicates_at, find_duplicates_with_config, DuplicatePair,
};
pub use scoring::{score, score_with_config, MatchResult, MatchSignal};
pub use similarity::{similarity, similarity_percent};
