//! Status line for long-running preview and generate operations

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static STATUS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} Status: {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static DONE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("Status: {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Reports what the current operation is doing before and after blocking work
///
/// A hidden reporter accepts the same calls and draws nothing.
pub struct StatusReporter {
    bar: ProgressBar,
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter {
    /// Create a reporter drawing a spinner on stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(STATUS_STYLE.clone());
        Self { bar }
    }

    /// Create a reporter that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Create a visible or hidden reporter
    pub fn with_visibility(visible: bool) -> Self {
        if visible { Self::new() } else { Self::hidden() }
    }

    /// Show a new status message and keep the spinner ticking
    pub fn begin(&self, message: &str) {
        self.bar.set_style(STATUS_STYLE.clone());
        self.bar.set_message(message.to_string());
        self.bar
            .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    }

    /// Update the status message without restarting the spinner
    pub fn update(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Stop the spinner and leave a final status line
    pub fn finish(&self, message: &str) {
        self.bar.disable_steady_tick();
        self.bar.set_style(DONE_STYLE.clone());
        self.bar.finish_with_message(message.to_string());
    }

    /// Current status message
    pub fn message(&self) -> String {
        self.bar.message()
    }
}
