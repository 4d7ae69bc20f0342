//! Locator-wait helpers.
//!
//! Poll the driver until an element becomes visible, then act on it. The
//! polling interval is fixed; only the overall deadline is configurable.

use crate::driver::{Locator, WebDriver};
use crate::errors::DriverError;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// The wait deadline used when callers have no stronger opinion.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Waits until an element matching the locator is visible.
///
/// # Errors
///
/// Returns `DriverError::WaitTimeout` when the deadline passes first, or
/// any error the driver raises while polling.
pub async fn wait_for_visible(
    driver: &dyn WebDriver,
    locator: &Locator,
    timeout: Duration,
) -> Result<(), DriverError> {
    debug!(%locator, ?timeout, "waiting for element");
    let deadline = Instant::now() + timeout;

    loop {
        if driver.is_visible(locator).await? {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(DriverError::wait_timeout(locator, timeout));
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Waits for an element to become visible, then clicks it.
///
/// # Errors
///
/// Returns the wait error or the click error.
pub async fn click_when_visible(
    driver: &dyn WebDriver,
    locator: &Locator,
    timeout: Duration,
) -> Result<(), DriverError> {
    debug!(%locator, "clicking element");
    wait_for_visible(driver, locator, timeout).await?;
    driver.click(locator).await
}

/// Waits for an element to become visible, then types into it.
///
/// # Errors
///
/// Returns the wait error or the typing error.
pub async fn type_when_visible(
    driver: &dyn WebDriver,
    locator: &Locator,
    text: &str,
    timeout: Duration,
) -> Result<(), DriverError> {
    debug!(%locator, "typing into element");
    wait_for_visible(driver, locator, timeout).await?;
    driver.type_text(locator, text).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mocks::{DriverCall, MockDriver};

    #[tokio::test]
    async fn test_wait_succeeds_for_visible_element() {
        let driver = MockDriver::new();
        let locator = Locator::id("login");
        driver.set_visible(&locator);

        wait_for_visible(&driver, &locator, DEFAULT_WAIT_TIMEOUT)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_wait_times_out_for_missing_element() {
        let driver = MockDriver::new();
        let locator = Locator::css("#never");

        let result = wait_for_visible(&driver, &locator, Duration::from_millis(10)).await;

        assert!(matches!(result, Err(DriverError::WaitTimeout { .. })));
    }

    #[tokio::test]
    async fn test_click_when_visible() {
        let driver = MockDriver::new();
        let locator = Locator::css("button.submit");
        driver.set_visible(&locator);

        click_when_visible(&driver, &locator, DEFAULT_WAIT_TIMEOUT)
            .await
            .unwrap();

        assert!(driver
            .calls()
            .contains(&DriverCall::Click(locator.to_string())));
    }

    #[tokio::test]
    async fn test_type_when_visible() {
        let driver = MockDriver::new();
        let locator = Locator::name("q");
        driver.set_visible(&locator);

        type_when_visible(&driver, &locator, "rust pipelines", DEFAULT_WAIT_TIMEOUT)
            .await
            .unwrap();

        assert!(driver.calls().contains(&DriverCall::TypeText(
            locator.to_string(),
            "rust pipelines".to_string()
        )));
    }
}
