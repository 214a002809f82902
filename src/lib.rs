//! navreplay replays browser-style navigation commands (visit a URL, `BACK`,
//! `FORWARD`) and produces the chronological log of routes the user viewed.
//!
//! # Modules
//!
//! - `history`: The navigation list, URL resolution and the navigator
//! - `file`: Reading command streams and writing route logs
//! - `config`: User configuration loaded from TOML

pub mod config;
pub mod file;
pub mod history;
