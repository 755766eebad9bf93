//! Executor lifecycle: one-time init, precondition check, action.

use std::time::Instant;

use tracing::{debug, error};

use markpilot_protocols::{AutomationError, Ctx};

/// Hook outcome: `Ok(false)` means "goal not met" (expected, retryable by
/// the caller), `Err` means a collaborator failed (fatal for this run).
pub type ExecResult = Result<bool, AutomationError>;

/// State shared by every executor: a diagnostic label and the one-shot
/// initialization flag. Configuration lives in the concrete variants and
/// never changes after construction; this flag is the only mutable
/// lifecycle state, and it flips false to true exactly once.
#[derive(Debug)]
pub struct ExecutorBase {
    name: String,
    initialized: bool,
}

impl ExecutorBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initialized: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    fn mark_initialized(&mut self) {
        self.initialized = true;
    }
}

/// A single automation step with a two-phase run protocol.
///
/// Implementors must provide the action ([`Executor::act`]); the
/// init/precondition/reset hooks default to success. Instances are
/// re-entrant across calls but not across threads: `run` and `hit` take
/// `&mut self`, so access is serialized per instance by construction.
pub trait Executor {
    fn base(&self) -> &ExecutorBase;

    fn base_mut(&mut self) -> &mut ExecutorBase;

    /// Deferred one-time setup, invoked on first `run` or `hit`.
    fn on_init(&mut self, _ctx: &mut Ctx) -> ExecResult {
        Ok(true)
    }

    /// Precondition gate. `Ok(false)` aborts the run before the action.
    fn check(&mut self, _ctx: &mut Ctx) -> ExecResult {
        Ok(true)
    }

    /// The side-effecting step: click, scroll, wait.
    fn act(&mut self, ctx: &mut Ctx) -> ExecResult;

    /// Clears accumulated state between runs. Rarely overridden.
    fn reset(&mut self, _ctx: &mut Ctx) -> ExecResult {
        Ok(true)
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    /// Runs the one-time init hook if it has not run yet.
    ///
    /// The flag is set before the hook executes, so a hook that calls
    /// back into the executor cannot re-enter it. The hook's boolean is
    /// advisory; only collaborator errors abort.
    fn ensure_init(&mut self, ctx: &mut Ctx) -> Result<(), AutomationError> {
        if self.base().initialized() {
            return Ok(());
        }
        self.base_mut().mark_initialized();
        let _ = self.on_init(ctx)?;
        Ok(())
    }

    /// Evaluates the precondition without performing the action.
    fn hit(&mut self, ctx: &mut Ctx) -> ExecResult {
        self.ensure_init(ctx)?;
        self.check(ctx)
    }

    /// Full step: init once, precondition, then action.
    fn run(&mut self, ctx: &mut Ctx) -> ExecResult {
        let start = Instant::now();
        self.ensure_init(ctx)?;

        if !self.check(ctx)? {
            debug!(executor = self.name(), run_id = %ctx.run_id, "precondition failed");
            return Ok(false);
        }

        if !self.act(ctx)? {
            error!(executor = self.name(), run_id = %ctx.run_id, "mid-execution failure");
            return Ok(false);
        }

        debug!(
            executor = self.name(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "run succeeded"
        );
        Ok(true)
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
