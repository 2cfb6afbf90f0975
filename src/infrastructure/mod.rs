//! Infrastructure: configuration and wiring.

pub mod bootstrap;
pub mod config;
