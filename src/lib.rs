//! Terminal client for Startup Weekend Jaipur.
//!
//! Two views: the event registration information and the idea voting board,
//! which lists submitted ideas from the idea API, lets the user search and
//! page through them, and casts votes with a participant code.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;
pub mod utils;
