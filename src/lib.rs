#![no_std]

//! Word clock firmware core
//!
//! Host-independent application layer around `wordclock-composer`:
//! - `config` - Defaults and buffer sizes
//! - `domain` - Settings entity, change intents and ports
//! - `app` - Usecases validating and applying settings
//! - `infrastructure` - Settings state service, drivers and clock wiring
//! - `controllers` - JSON settings endpoint

pub mod app;
pub mod config;
pub mod controllers;
pub mod domain;
pub mod infrastructure;

mod logging;
