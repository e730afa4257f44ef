// ShowReg - core/mod.rs
//
// Core business logic layer: data model, classification, ranking, and the
// pure export document builders.
// Must NOT depend on: app, platform, or any filesystem path handling.

pub mod catalog;
pub mod classify;
pub mod export;
pub mod model;
pub mod rank;
pub mod tags;
