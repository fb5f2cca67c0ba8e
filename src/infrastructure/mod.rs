//! Infrastructure layer - Port implementations
//!
//! This module contains concrete implementations of the application layer ports
//! and the wiring between the settings state and the clock engine.

pub mod drivers;
pub mod services;
