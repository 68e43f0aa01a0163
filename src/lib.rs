//! codexv
//!
//! Terminal viewer for game-data codex search results. Hits are grouped by
//! the type prefix of their id and shown as links; details and the quit
//! prompt are shown through a single exclusive modal dialog.

pub mod config;
pub mod logging;
pub mod modal;
pub mod model;
pub mod pages;
pub mod source;
pub mod state;
pub mod template;
pub mod view;
