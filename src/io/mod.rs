//! File adapters for persisting conditions.

pub mod conditions_json;
