//! Diagnostic screenshot capture on failure.

use super::FailureHook;
use crate::driver::WebDriver;
use crate::errors::HookError;
use crate::notify::Notifier;
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A failure hook that saves a screenshot of the driver's current page.
///
/// Files are named `<YYYYMMDD_HHMMSS>.png` (UTC, second precision) so a
/// directory listing sorts chronologically. The target directory is created,
/// including parents, when the hook is constructed.
#[derive(Debug, Clone)]
pub struct ScreenshotHook {
    dir: PathBuf,
}

impl ScreenshotHook {
    /// Creates the hook, creating `dir` and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, std::io::Error> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Returns the directory screenshots are written to.
    #[must_use]
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

#[async_trait]
impl FailureHook for ScreenshotHook {
    fn name(&self) -> &str {
        "screenshot"
    }

    async fn handle(
        &self,
        error: &anyhow::Error,
        driver: Option<&dyn WebDriver>,
        _notifiers: &[Arc<dyn Notifier>],
    ) -> Result<(), HookError> {
        let Some(driver) = driver else {
            debug!("no driver session available; skipping screenshot");
            return Ok(());
        };

        warn!(error = %error, "saving screenshot after step failure");

        let bytes = driver.screenshot().await?;
        let path = self
            .dir
            .join(format!("{}.png", Utc::now().format("%Y%m%d_%H%M%S")));
        tokio::fs::write(&path, &bytes).await?;

        info!(path = %path.display(), "screenshot saved");
        Ok(())
    }
}
