//! Notification fan-out on failure.

use super::FailureHook;
use crate::driver::WebDriver;
use crate::errors::HookError;
use crate::notify::{broadcast, Notifier};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// A failure hook that tells every notifier about the error.
///
/// Holds no notifier list of its own: it fans out through the list the
/// runner supplies at dispatch time.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationHook;

impl NotificationHook {
    /// Creates the hook.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FailureHook for NotificationHook {
    fn name(&self) -> &str {
        "notification"
    }

    async fn handle(
        &self,
        error: &anyhow::Error,
        _driver: Option<&dyn WebDriver>,
        notifiers: &[Arc<dyn Notifier>],
    ) -> Result<(), HookError> {
        let message = format!("An unexpected error occurred: {error}");
        warn!(notifiers = notifiers.len(), "sending failure notification");
        broadcast(notifiers, &message).await;
        Ok(())
    }
}
