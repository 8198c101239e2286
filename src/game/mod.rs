//! Game state: candidate tracking and hidden-code sessions

mod session;
mod tracker;

pub use session::{Session, SessionState};
pub use tracker::{Tracker, TrackerError, Turn};
