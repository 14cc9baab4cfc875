//! godtrial - phase-driven card battles before the pantheon
//!
//! The core of a turn-structured card game that alternates between a
//! resource-gated drafting phase (Prayer), a board-assembly phase (Casting),
//! and a short real-time combat simulation (the Trial) resolved by autonomous
//! unit behavior. Rendering and input wiring live outside this crate: the
//! `Game` controller accepts named [`game::Action`]s and hands back read-only
//! [`game::Snapshot`]s.

pub mod catalog;
pub mod core;
pub mod game;
pub mod error;

pub use error::{GameError, Result};
