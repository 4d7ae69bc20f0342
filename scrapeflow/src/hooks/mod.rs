//! Failure hook capability.
//!
//! A [`FailureHook`] reacts once to an unhandled step error before the
//! driver session is released: capture diagnostics, tell a human. Hooks run
//! in registration order and a failing hook is logged and skipped, never
//! allowed to mask the step error.

mod notification;
mod screenshot;

pub use notification::NotificationHook;
pub use screenshot::ScreenshotHook;

use crate::driver::WebDriver;
use crate::errors::HookError;
use crate::notify::Notifier;
use async_trait::async_trait;
use std::sync::Arc;

/// A pluggable reaction to an unhandled step error.
#[async_trait]
pub trait FailureHook: Send + Sync {
    /// Returns the hook's name, used in logs.
    fn name(&self) -> &str;

    /// Reacts to a step error.
    ///
    /// The runner passes the triggering error, the driver session when one
    /// is still held, and its full notifier list. Implementations must
    /// tolerate an absent driver.
    async fn handle(
        &self,
        error: &anyhow::Error,
        driver: Option<&dyn WebDriver>,
        notifiers: &[Arc<dyn Notifier>],
    ) -> Result<(), HookError>;
}
