//! Game state machine.
//!
//! ## Card states
//!
//! ```text
//! Hidden --reveal--> Revealed --match----> Matched
//!                        |
//!                        +--mismatch--> (settle delay) --> Hidden
//! ```
//!
//! ## Round states
//!
//! `NotStarted -> InProgress -> Completed`
//!
//! The engine is single-threaded and never blocks. The mismatch settle
//! delay is a [`Scheduler`] task that runs on the first `tick` or
//! `reveal_request` at or after its deadline.

mod events;
mod game;
mod round;
mod scheduler;

pub use events::GameEvent;
pub use game::{IgnoreReason, MemoryGame, RevealOutcome};
pub use round::{Round, RoundSnapshot, RoundStatus};
pub use scheduler::{Scheduler, TaskId};
