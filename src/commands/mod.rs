//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate list mutations to `services/store`.
//! - Keep behavior and output schema stable.

pub mod hotels;

pub use hotels::handle_hotel_commands;
