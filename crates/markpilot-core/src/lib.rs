//! # Markpilot Core
//!
//! The Executor lifecycle and its concrete marker-driven interaction
//! strategies: detect-and-click, click-until-gone, best-effort clicks,
//! presence/absence assertions, scroll-on-detect and two-state toggles.
//!
//! Every executor follows the same two-phase protocol: a precondition
//! check ("hit") gates a side-effecting action ("exec"), both bounded by
//! wall-clock timeouts. Detection and input injection are reached through
//! the [`DetectionCore`](markpilot_protocols::DetectionCore) collaborator;
//! this crate contains no pixel matching of its own.

pub mod click;
pub mod dismiss;
pub mod executor;
pub mod pacing;
pub mod probe;
pub mod scroll;
pub mod toggle;
pub mod try_click;

pub use click::ClickExecutor;
pub use dismiss::{ClickUntilGoneExecutor, TryClickUntilGoneExecutor};
pub use executor::{ExecResult, Executor, ExecutorBase};
pub use pacing::{Pacer, RandomPacer};
pub use probe::{AbsenceExecutor, AwaitAbsenceExecutor, PresenceExecutor, VanishExecutor};
pub use scroll::ScrollExecutor;
pub use toggle::ToggleExecutor;
pub use try_click::{TryClickExecutor, TryMultiClickExecutor};

#[cfg(test)]
pub(crate) mod testkit;
