//! Recording doubles for pipeline seams.

use crate::driver::{DriverBackend, DriverOptions, Locator, WebDriver};
use crate::errors::{AcquisitionError, DeliveryError, DriverError, HookError};
use crate::hooks::FailureHook;
use crate::notify::Notifier;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// One recorded driver operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCall {
    /// A navigation, with the target URL.
    Goto(String),
    /// A visibility probe, with the locator.
    IsVisible(String),
    /// A click, with the locator.
    Click(String),
    /// Typed text, with the locator and the text.
    TypeText(String, String),
    /// A text read, with the locator.
    TextOf(String),
    /// A current-URL read.
    CurrentUrl,
    /// A screenshot capture.
    Screenshot,
    /// A session close.
    Close,
}

#[derive(Debug, Default)]
struct MockDriverState {
    calls: Mutex<Vec<DriverCall>>,
    visible: Mutex<HashSet<String>>,
    screenshot_bytes: Mutex<Vec<u8>>,
    fail_screenshot: Mutex<bool>,
    fail_close: Mutex<bool>,
    close_count: Mutex<usize>,
    url: Mutex<String>,
}

/// A driver session that records every operation.
///
/// Clones share state, so a handle kept before boxing the driver into a
/// runner still observes everything the runner did.
#[derive(Debug, Clone, Default)]
pub struct MockDriver {
    state: Arc<MockDriverState>,
}

impl MockDriver {
    /// Creates a new mock session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an element as visible.
    pub fn set_visible(&self, locator: &Locator) {
        self.state.visible.lock().insert(locator.to_string());
    }

    /// Sets the bytes returned by `screenshot`.
    pub fn set_screenshot_bytes(&self, bytes: Vec<u8>) {
        *self.state.screenshot_bytes.lock() = bytes;
    }

    /// Makes `screenshot` fail.
    pub fn fail_screenshot(&self) {
        *self.state.fail_screenshot.lock() = true;
    }

    /// Makes `close` fail. The close is still counted.
    pub fn fail_close(&self) {
        *self.state.fail_close.lock() = true;
    }

    /// Returns every recorded operation, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<DriverCall> {
        self.state.calls.lock().clone()
    }

    /// Returns how many times the session was closed.
    #[must_use]
    pub fn close_count(&self) -> usize {
        *self.state.close_count.lock()
    }

    fn record(&self, call: DriverCall) {
        self.state.calls.lock().push(call);
    }
}

#[async_trait]
impl WebDriver for MockDriver {
    async fn goto(&self, url: &str) -> Result<(), DriverError> {
        self.record(DriverCall::Goto(url.to_string()));
        *self.state.url.lock() = url.to_string();
        Ok(())
    }

    async fn is_visible(&self, locator: &Locator) -> Result<bool, DriverError> {
        self.record(DriverCall::IsVisible(locator.to_string()));
        Ok(self.state.visible.lock().contains(&locator.to_string()))
    }

    async fn click(&self, locator: &Locator) -> Result<(), DriverError> {
        self.record(DriverCall::Click(locator.to_string()));
        if self.state.visible.lock().contains(&locator.to_string()) {
            Ok(())
        } else {
            Err(DriverError::element_not_found(locator))
        }
    }

    async fn type_text(&self, locator: &Locator, text: &str) -> Result<(), DriverError> {
        self.record(DriverCall::TypeText(locator.to_string(), text.to_string()));
        if self.state.visible.lock().contains(&locator.to_string()) {
            Ok(())
        } else {
            Err(DriverError::element_not_found(locator))
        }
    }

    async fn text_of(&self, locator: &Locator) -> Result<String, DriverError> {
        self.record(DriverCall::TextOf(locator.to_string()));
        if self.state.visible.lock().contains(&locator.to_string()) {
            Ok(String::new())
        } else {
            Err(DriverError::element_not_found(locator))
        }
    }

    async fn current_url(&self) -> Result<String, DriverError> {
        self.record(DriverCall::CurrentUrl);
        Ok(self.state.url.lock().clone())
    }

    async fn screenshot(&self) -> Result<Vec<u8>, DriverError> {
        self.record(DriverCall::Screenshot);
        if *self.state.fail_screenshot.lock() {
            return Err(DriverError::screenshot("mock screenshot failure"));
        }
        Ok(self.state.screenshot_bytes.lock().clone())
    }

    async fn close(&self) -> Result<(), DriverError> {
        self.record(DriverCall::Close);
        *self.state.close_count.lock() += 1;
        if *self.state.fail_close.lock() {
            return Err(DriverError::session("mock close failure"));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MockBackendState {
    driver: MockDriver,
    fail: Mutex<bool>,
    launched: Mutex<Vec<DriverOptions>>,
}

/// A backend that hands out shared-state [`MockDriver`] sessions.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    state: Arc<MockBackendState>,
}

impl MockBackend {
    /// Creates a new mock backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to the session this backend hands out.
    #[must_use]
    pub fn driver(&self) -> MockDriver {
        self.state.driver.clone()
    }

    /// Makes `launch` fail.
    pub fn fail_launch(&self) {
        *self.state.fail.lock() = true;
    }

    /// Returns the options passed to each `launch` call.
    #[must_use]
    pub fn launched_options(&self) -> Vec<DriverOptions> {
        self.state.launched.lock().clone()
    }
}

#[async_trait]
impl DriverBackend for MockBackend {
    async fn launch(&self, options: &DriverOptions) -> Result<Box<dyn WebDriver>, AcquisitionError> {
        self.state.launched.lock().push(options.clone());
        if *self.state.fail.lock() {
            return Err(AcquisitionError::new("mock backend configured to fail"));
        }
        Ok(Box::new(self.state.driver.clone()))
    }
}

#[derive(Debug, Default)]
struct CollectingNotifierState {
    messages: Mutex<Vec<String>>,
    fail: Mutex<bool>,
}

/// A notifier that records every message it is asked to deliver.
///
/// When configured to fail, delivery attempts are still recorded, matching
/// a transport that accepts the message but cannot deliver it.
#[derive(Debug, Clone, Default)]
pub struct CollectingNotifier {
    state: Arc<CollectingNotifierState>,
}

impl CollectingNotifier {
    /// Creates a new collecting notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every `send` fail after recording the attempt.
    pub fn fail_delivery(&self) {
        *self.state.fail.lock() = true;
    }

    /// Returns every message attempted, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.state.messages.lock().clone()
    }
}

#[async_trait]
impl Notifier for CollectingNotifier {
    fn name(&self) -> &str {
        "collecting"
    }

    async fn send(&self, message: &str) -> Result<(), DeliveryError> {
        self.state.messages.lock().push(message.to_string());
        if *self.state.fail.lock() {
            return Err(DeliveryError::Status { status: 503 });
        }
        Ok(())
    }
}

/// One recorded failure-hook invocation.
#[derive(Debug, Clone)]
pub struct HookInvocation {
    /// The triggering error, rendered to a string.
    pub error: String,
    /// Whether a driver session was supplied.
    pub driver_present: bool,
    /// How many notifiers were supplied.
    pub notifier_count: usize,
}

#[derive(Debug, Default)]
struct RecordingHookState {
    invocations: Mutex<Vec<HookInvocation>>,
    fail: Mutex<bool>,
}

/// A failure hook that records each invocation.
#[derive(Debug, Clone, Default)]
pub struct RecordingHook {
    state: Arc<RecordingHookState>,
}

impl RecordingHook {
    /// Creates a new recording hook.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `handle` fail after recording the invocation.
    pub fn fail_handling(&self) {
        *self.state.fail.lock() = true;
    }

    /// Returns every recorded invocation, in order.
    #[must_use]
    pub fn invocations(&self) -> Vec<HookInvocation> {
        self.state.invocations.lock().clone()
    }
}

#[async_trait]
impl FailureHook for RecordingHook {
    fn name(&self) -> &str {
        "recording"
    }

    async fn handle(
        &self,
        error: &anyhow::Error,
        driver: Option<&dyn WebDriver>,
        notifiers: &[Arc<dyn Notifier>],
    ) -> Result<(), HookError> {
        self.state.invocations.lock().push(HookInvocation {
            error: error.to_string(),
            driver_present: driver.is_some(),
            notifier_count: notifiers.len(),
        });

        if *self.state.fail.lock() {
            return Err(HookError::other("recording hook configured to fail"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_driver_records_operations_in_order() {
        let driver = MockDriver::new();
        let locator = Locator::css("#next");
        driver.set_visible(&locator);

        driver.goto("https://example.com").await.unwrap();
        driver.click(&locator).await.unwrap();
        driver.close().await.unwrap();

        assert_eq!(
            driver.calls(),
            vec![
                DriverCall::Goto("https://example.com".to_string()),
                DriverCall::Click("css='#next'".to_string()),
                DriverCall::Close,
            ]
        );
        assert_eq!(driver.close_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_driver_click_requires_visibility() {
        let driver = MockDriver::new();

        let result = driver.click(&Locator::id("hidden")).await;

        assert!(matches!(result, Err(DriverError::ElementNotFound { .. })));
    }

    #[tokio::test]
    async fn test_mock_backend_shares_driver_state() {
        let backend = MockBackend::new();
        let handle = backend.driver();

        let boxed = backend.launch(&DriverOptions::default()).await.unwrap();
        boxed.goto("https://example.com").await.unwrap();

        assert_eq!(
            handle.calls(),
            vec![DriverCall::Goto("https://example.com".to_string())]
        );
    }

    #[tokio::test]
    async fn test_collecting_notifier_records_failed_attempts() {
        let notifier = CollectingNotifier::new();
        notifier.fail_delivery();

        let result = notifier.send("hello").await;

        assert!(result.is_err());
        assert_eq!(notifier.messages(), vec!["hello"]);
    }
}
