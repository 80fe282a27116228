//! Pure data structures shared by the fork ring, the philosophers and the event log.

pub mod event;
pub mod philosopher;

pub use event::*;
pub use philosopher::*;
