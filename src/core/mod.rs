//! Core game types and entities

pub mod card;
pub mod god;
pub mod unit;

pub use card::CardTemplate;
pub use god::{Affinity, God, GodName};
pub use unit::{Team, Unit};
