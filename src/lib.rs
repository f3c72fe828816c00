//! Globed menu - client settings and server switching
//!
//! Two cores drive the menu:
//!
//! 1. **Setting cells** ([`cell`]): one row type that reads, edits, validates
//!    and saves a setting whose kind (bool, bounded float, int, string or audio
//!    input device) is chosen by a type tag.
//!
//! 2. **Direct connect** ([`servers`]): validates a `host[:port]` address and
//!    switches the client to that standalone server.
//!
//! Settings live in a TOML file managed by [`config`]; [`gui`] binds the
//! cells and the server switcher to egui widgets.

pub mod cell;
pub mod config;
pub mod gui;
pub mod servers;
