//! Presentational components for the dashboard shell.

pub mod components;

pub use components::*;
