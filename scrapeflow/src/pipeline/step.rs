//! Step contract and execution context.
//!
//! Steps are the units of work in a pipeline. Each is invoked with a
//! [`StepContext`] giving it the driver session, the shared mutable state,
//! and a bound notify operation that fans out to the runner's notifiers.

use super::PipelineState;
use crate::driver::WebDriver;
use crate::notify::{broadcast, Notifier};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// What a step sees while it runs.
pub struct StepContext<'a> {
    driver: &'a dyn WebDriver,
    state: &'a mut PipelineState,
    notifiers: &'a [Arc<dyn Notifier>],
}

impl<'a> StepContext<'a> {
    pub(crate) fn new(
        driver: &'a dyn WebDriver,
        state: &'a mut PipelineState,
        notifiers: &'a [Arc<dyn Notifier>],
    ) -> Self {
        Self {
            driver,
            state,
            notifiers,
        }
    }

    /// Returns the driver session.
    #[must_use]
    pub fn driver(&self) -> &dyn WebDriver {
        self.driver
    }

    /// Returns the shared state.
    #[must_use]
    pub fn state(&self) -> &PipelineState {
        self.state
    }

    /// Returns the shared state mutably.
    pub fn state_mut(&mut self) -> &mut PipelineState {
        self.state
    }

    /// Sends a message to every registered notifier, in order.
    ///
    /// Delivery failures are logged and swallowed.
    pub async fn notify(&self, message: &str) {
        broadcast(self.notifiers, message).await;
    }
}

/// A unit of work in the pipeline.
///
/// Implementations may fail with any error type; the runner treats every
/// error uniformly, stopping the run and dispatching failure hooks.
#[async_trait]
pub trait StepAction: Send + Sync {
    /// Executes the step.
    async fn run(&self, ctx: &mut StepContext<'_>) -> anyhow::Result<()>;
}

/// A synchronous closure-based step.
///
/// For step bodies that only touch the shared state; driver interaction
/// needs an async [`StepAction`] implementation.
pub struct FnStep<F>
where
    F: Fn(&mut StepContext<'_>) -> anyhow::Result<()> + Send + Sync,
{
    func: F,
}

impl<F> FnStep<F>
where
    F: Fn(&mut StepContext<'_>) -> anyhow::Result<()> + Send + Sync,
{
    /// Creates a new closure-based step.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> fmt::Debug for FnStep<F>
where
    F: Fn(&mut StepContext<'_>) -> anyhow::Result<()> + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStep").finish()
    }
}

#[async_trait]
impl<F> StepAction for FnStep<F>
where
    F: Fn(&mut StepContext<'_>) -> anyhow::Result<()> + Send + Sync,
{
    async fn run(&self, ctx: &mut StepContext<'_>) -> anyhow::Result<()> {
        (self.func)(ctx)
    }
}

/// A step that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpStep;

impl NoOpStep {
    /// Creates a no-op step.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StepAction for NoOpStep {
    async fn run(&self, _ctx: &mut StepContext<'_>) -> anyhow::Result<()> {
        Ok(())
    }
}

/// A named step in the pipeline's fixed execution order.
pub struct Step {
    name: String,
    action: Box<dyn StepAction>,
}

impl Step {
    pub(crate) fn new(name: impl Into<String>, action: Box<dyn StepAction>) -> Self {
        Self {
            name: name.into(),
            action,
        }
    }

    /// Returns the step's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn action(&self) -> &dyn StepAction {
        self.action.as_ref()
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step").field("name", &self.name).finish()
    }
}
