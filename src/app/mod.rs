// ShowReg - app/mod.rs
//
// Application layer: record store, session persistence, registration
// commands, import, and export rendering.
// Dependencies: core layer.

pub mod excel;
pub mod import;
pub mod pdf;
pub mod registration;
pub mod session;
pub mod store;
