// ShowReg - platform/mod.rs
//
// Platform abstraction layer: directory resolution and config loading.
// Dependencies: standard library, directories crate.

pub mod config;
