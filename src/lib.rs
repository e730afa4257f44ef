// ShowReg - lib.rs
//
// Library entry point, exposing all modules for integration testing and
// potential future programmatic use.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
