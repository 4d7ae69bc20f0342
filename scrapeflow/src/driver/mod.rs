//! The driver capability boundary.
//!
//! The pipeline is layered over an externally supplied browser-control
//! session. Two seams define the boundary: [`DriverBackend`] starts a
//! session from [`DriverOptions`], and [`WebDriver`] is the live session
//! steps act through. The pipeline itself only acquires the session, hands
//! it to steps and hooks, and releases it.

mod options;

pub use options::{
    DriverOptions, DEFAULT_USER_AGENT, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};

use crate::errors::{AcquisitionError, DriverError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A strategy for locating an element on the current page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locator {
    /// A CSS selector.
    Css(String),
    /// An XPath expression.
    XPath(String),
    /// An element id attribute.
    Id(String),
    /// An element name attribute.
    Name(String),
}

impl Locator {
    /// Creates a CSS selector locator.
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Creates an XPath locator.
    #[must_use]
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::XPath(expression.into())
    }

    /// Creates an id locator.
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Creates a name locator.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(s) => write!(f, "css='{s}'"),
            Self::XPath(s) => write!(f, "xpath='{s}'"),
            Self::Id(s) => write!(f, "id='{s}'"),
            Self::Name(s) => write!(f, "name='{s}'"),
        }
    }
}

/// A live browser-control session.
///
/// Exclusively owned by one `PipelineRunner` for the duration of a run.
/// Every operation may block on driver I/O; no timeout is imposed here
/// beyond what the underlying session enforces.
#[async_trait]
pub trait WebDriver: Send + Sync {
    /// Navigates to a URL.
    async fn goto(&self, url: &str) -> Result<(), DriverError>;

    /// Returns whether an element matching the locator is currently visible.
    async fn is_visible(&self, locator: &Locator) -> Result<bool, DriverError>;

    /// Clicks the element matching the locator.
    async fn click(&self, locator: &Locator) -> Result<(), DriverError>;

    /// Types text into the element matching the locator.
    async fn type_text(&self, locator: &Locator, text: &str) -> Result<(), DriverError>;

    /// Returns the text content of the element matching the locator.
    async fn text_of(&self, locator: &Locator) -> Result<String, DriverError>;

    /// Returns the URL of the current page.
    async fn current_url(&self) -> Result<String, DriverError>;

    /// Captures a screenshot of the current page as PNG bytes.
    async fn screenshot(&self) -> Result<Vec<u8>, DriverError>;

    /// Ends the session, releasing the underlying browser.
    async fn close(&self) -> Result<(), DriverError>;
}

/// The session-acquisition seam.
///
/// `PipelineBuilder::build()` calls [`DriverBackend::launch`] with the
/// configured (or default) options to obtain the session the runner will
/// own.
#[async_trait]
pub trait DriverBackend: Send + Sync {
    /// Starts a new driver session with the given options.
    async fn launch(&self, options: &DriverOptions) -> Result<Box<dyn WebDriver>, AcquisitionError>;
}
