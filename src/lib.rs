//! filmreel - a terminal browser for the Star Wars films API.
//!
//! The library exposes its modules for the binary and for integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod event_loop;
pub mod fetcher;
pub mod models;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
