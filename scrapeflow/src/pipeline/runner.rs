//! Pipeline runner.

use super::state::PipelineState;
use super::step::{Step, StepContext};
use crate::driver::WebDriver;
use crate::errors::StepFailure;
use crate::hooks::FailureHook;
use crate::notify::Notifier;
use std::sync::Arc;
use tracing::{error, info, warn, Instrument};
use uuid::Uuid;

/// Executes the configured step sequence against the owned driver session.
///
/// The runner exclusively owns the session, the ordered step list, the
/// shared state, the failure hooks, and the notifiers. `run()` consumes the
/// runner: one instance, one run.
pub struct PipelineRunner {
    driver: Box<dyn WebDriver>,
    steps: Vec<Step>,
    hooks: Vec<Box<dyn FailureHook>>,
    notifiers: Vec<Arc<dyn Notifier>>,
    state: PipelineState,
}

impl PipelineRunner {
    pub(crate) fn new(
        driver: Box<dyn WebDriver>,
        steps: Vec<Step>,
        hooks: Vec<Box<dyn FailureHook>>,
        notifiers: Vec<Arc<dyn Notifier>>,
        state: PipelineState,
    ) -> Self {
        Self {
            driver,
            steps,
            hooks,
            notifiers,
            state,
        }
    }

    /// Returns the number of steps in the sequence.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the step names in execution order.
    #[must_use]
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(Step::name).collect()
    }

    /// Runs the pipeline to completion.
    ///
    /// Steps execute in order; the first step error stops the sequence,
    /// every failure hook is dispatched with it, and it is returned to the
    /// caller untouched. Whatever happens, the driver session is released
    /// exactly once before this method returns.
    ///
    /// # Errors
    ///
    /// Returns `StepFailure` carrying the failing step's original error.
    pub async fn run(mut self) -> Result<(), StepFailure> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("pipeline_run", %run_id, steps = self.steps.len());

        async move {
            let failure = self.execute_steps().await;

            if let Some(failure) = &failure {
                self.dispatch_hooks(&failure.source).await;
            }

            self.release_driver().await;

            match failure {
                Some(failure) => Err(failure),
                None => Ok(()),
            }
        }
        .instrument(span)
        .await
    }

    async fn execute_steps(&mut self) -> Option<StepFailure> {
        for (index, step) in self.steps.iter().enumerate() {
            info!(step = step.name(), index, "executing step");

            let mut ctx = StepContext::new(self.driver.as_ref(), &mut self.state, &self.notifiers);
            if let Err(source) = step.action().run(&mut ctx).await {
                error!(step = step.name(), error = %source, "step failed; aborting run");
                return Some(StepFailure::new(step.name(), index, source));
            }
        }

        None
    }

    /// Dispatches every failure hook, in registration order.
    ///
    /// A failing hook is logged and skipped; the remaining hooks still run.
    async fn dispatch_hooks(&self, source: &anyhow::Error) {
        for hook in &self.hooks {
            info!(hook = hook.name(), "dispatching failure hook");

            if let Err(err) = hook
                .handle(source, Some(self.driver.as_ref()), &self.notifiers)
                .await
            {
                warn!(
                    hook = hook.name(),
                    error = %err,
                    "failure hook failed; continuing with remaining hooks"
                );
            }
        }
    }

    /// Releases the driver session, swallowing release errors so the run's
    /// outcome is never replaced by a cleanup failure.
    async fn release_driver(&self) {
        info!("run finished; releasing driver session");

        if let Err(err) = self.driver.close().await {
            warn!(error = %err, "driver release failed");
        }
    }
}
