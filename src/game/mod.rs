//! Match state, phase machine, and Trial resolution

pub mod actions;
pub mod driver;
pub mod layout;
pub mod logger;
pub mod phase;
pub mod snapshot;
pub mod state;
pub mod trial;

pub use actions::Action;
pub use driver::TrialDriver;
pub use logger::{GameLogger, LogEntry, OutputMode, VerbosityLevel};
pub use phase::Phase;
pub use snapshot::{GodView, Snapshot, UnitView};
pub use state::Game;
pub use trial::{TrialEngine, TrialOutcome};
