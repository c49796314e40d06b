//! Rickdex - Rick and Morty character browser
//!
//! The library exposes the app's modules for the binary and the tests.

pub mod action;
pub mod api;
pub mod cards;
pub mod components;
pub mod config;
pub mod dropdown;
pub mod effect;
pub mod filters;
pub mod logging;
pub mod pagination;
pub mod reducer;
pub mod state;
