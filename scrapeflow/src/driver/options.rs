//! Driver session configuration.

use serde::{Deserialize, Serialize};

/// The user-agent string used when none is configured.
///
/// A realistic desktop Firefox identity; sites that vary behavior by
/// user-agent see an ordinary browser.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:115.0) Gecko/20100101 Firefox/115.0";

/// Default browser window width in pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1920;

/// Default browser window height in pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 1080;

/// Pass-through configuration for the driver session.
///
/// These values carry no behavioral logic in the pipeline itself; the
/// backend applies them when starting the session. The defaults give a
/// fixed window size, a realistic user-agent, no extensions, masked
/// automation flags, and GPU acceleration disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverOptions {
    /// Browser window width in pixels.
    pub window_width: u32,
    /// Browser window height in pixels.
    pub window_height: u32,
    /// User-agent string reported by the browser.
    pub user_agent: String,
    /// Whether browser extensions may load.
    pub load_extensions: bool,
    /// Whether to mask automation markers such as the `navigator.webdriver`
    /// flag.
    pub mask_automation: bool,
    /// Whether to disable GPU hardware acceleration.
    pub disable_gpu_acceleration: bool,
    /// Whether to run the browser without a visible window.
    pub headless: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            load_extensions: false,
            mask_automation: true,
            disable_gpu_acceleration: true,
            headless: false,
        }
    }
}

impl DriverOptions {
    /// Creates options with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window size.
    #[must_use]
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Sets the user-agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enables or disables headless mode.
    #[must_use]
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Enables or disables automation-marker masking.
    #[must_use]
    pub fn with_mask_automation(mut self, mask: bool) -> Self {
        self.mask_automation = mask;
        self
    }
}
