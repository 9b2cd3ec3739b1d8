//! Scoring for golf side games.
//!
//! [`scoring`] holds the pure per-hole engines. [`round`] runs them over a
//! round file loaded by [`load`] with settings layered by [`config`].

pub mod config;
pub mod error;
pub mod load;
pub mod report;
pub mod round;
pub mod scoring;
pub mod types;

pub use error::{GolfError, Result};
pub use round::score_round;
pub use types::config::GameSettings;
pub use types::report::RoundReport;
pub use types::round::{GameFormat, Round};
