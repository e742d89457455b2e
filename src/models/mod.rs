//! Boundary models: server configuration and wire-to-domain conversions for
//! the generated protobuf types.

pub mod cash_flow;
pub mod config;
pub mod fund;
pub mod returns;
pub mod shareholder;
