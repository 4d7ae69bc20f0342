//! Pipeline builder.

use super::runner::PipelineRunner;
use super::state::PipelineState;
use super::step::{Step, StepAction};
use crate::driver::{DriverBackend, DriverOptions};
use crate::errors::AcquisitionError;
use crate::hooks::FailureHook;
use crate::notify::Notifier;
use std::sync::Arc;

/// Accumulates pipeline configuration and produces exactly one runner.
///
/// Every `with_*` call consumes and returns the builder for chaining;
/// `build()` consumes it for good, moving the accumulated step, hook, and
/// notifier sequences into the runner, so a built pipeline's configuration
/// can never be mutated from the outside.
pub struct PipelineBuilder {
    backend: Box<dyn DriverBackend>,
    steps: Vec<Step>,
    hooks: Vec<Box<dyn FailureHook>>,
    notifiers: Vec<Arc<dyn Notifier>>,
    state: PipelineState,
    driver_options: Option<DriverOptions>,
}

impl PipelineBuilder {
    /// Creates a builder over the given driver backend.
    #[must_use]
    pub fn new(backend: impl DriverBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            steps: Vec::new(),
            hooks: Vec::new(),
            notifiers: Vec::new(),
            state: PipelineState::new(),
            driver_options: None,
        }
    }

    /// Appends a named step to the execution sequence.
    ///
    /// Steps run in the order they are added. Duplicate names are legal;
    /// steps are identified by position.
    #[must_use]
    pub fn with_step(mut self, name: impl Into<String>, action: impl StepAction + 'static) -> Self {
        self.steps.push(Step::new(name, Box::new(action)));
        self
    }

    /// Appends a failure hook.
    ///
    /// Hooks are dispatched in the order they are added.
    #[must_use]
    pub fn with_failure_hook(mut self, hook: impl FailureHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Appends a notifier.
    ///
    /// Notifiers receive messages in the order they are added.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifiers.push(Arc::new(notifier));
        self
    }

    /// Replaces the initial shared state. Last call wins.
    #[must_use]
    pub fn with_state(mut self, state: PipelineState) -> Self {
        self.state = state;
        self
    }

    /// Replaces the driver options. Last call wins; when never called,
    /// [`DriverOptions::default`] is used.
    #[must_use]
    pub fn with_driver_options(mut self, options: DriverOptions) -> Self {
        self.driver_options = Some(options);
        self
    }

    /// Returns the number of steps added so far.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Acquires the driver session and produces the runner.
    ///
    /// # Errors
    ///
    /// Returns `AcquisitionError` if the backend cannot start a session.
    /// This happens before any step executes, so no failure hooks are
    /// involved.
    pub async fn build(self) -> Result<PipelineRunner, AcquisitionError> {
        let options = self.driver_options.unwrap_or_default();
        let driver = self.backend.launch(&options).await?;

        Ok(PipelineRunner::new(
            driver,
            self.steps,
            self.hooks,
            self.notifiers,
            self.state,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::step::NoOpStep;
    use crate::testing::mocks::MockBackend;

    #[test]
    fn test_builder_accumulates_steps() {
        let builder = PipelineBuilder::new(MockBackend::new())
            .with_step("open", NoOpStep::new())
            .with_step("open", NoOpStep::new());

        // Duplicate names are legal.
        assert_eq!(builder.step_count(), 2);
    }

    #[tokio::test]
    async fn test_build_launches_with_default_options() {
        let backend = MockBackend::new();

        let runner = PipelineBuilder::new(backend.clone())
            .with_step("open", NoOpStep::new())
            .build()
            .await
            .unwrap();

        assert_eq!(runner.step_count(), 1);
        assert_eq!(backend.launched_options(), vec![DriverOptions::default()]);
    }

    #[tokio::test]
    async fn test_build_passes_configured_options_through() {
        let backend = MockBackend::new();
        let options = DriverOptions::default().with_headless(true);

        PipelineBuilder::new(backend.clone())
            .with_driver_options(DriverOptions::default())
            .with_driver_options(options.clone())
            .build()
            .await
            .unwrap();

        // Last call wins.
        assert_eq!(backend.launched_options(), vec![options]);
    }

    #[tokio::test]
    async fn test_build_surfaces_acquisition_failure() {
        let backend = MockBackend::new();
        backend.fail_launch();

        let result = PipelineBuilder::new(backend)
            .with_step("open", NoOpStep::new())
            .build()
            .await;

        assert!(result.is_err());
    }
}
