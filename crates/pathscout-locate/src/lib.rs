//! Locate the artifacts a browser automation tool needs on the local machine:
//! the user's documents folder, browser executables, WebDriver binaries and
//! the Cursor IDE installation.
//!
//! Every lookup re-probes the filesystem (and the registry on Windows) and
//! returns `None` when nothing usable exists. Nothing is installed or launched.

mod browser;
mod cursor;
mod documents;
mod driver;
mod error;
mod locator;
mod platform;
mod profiles;
pub mod registry;
mod search;

pub use error::{Error, Result};
pub use locator::Locator;
pub use platform::Platform;
pub use profiles::{
    AppBundle, BrowserProfile, DEFAULT_DRIVER, LinuxLayout, MacLayout, WindowsLayout, driver_for,
};

use std::path::PathBuf;

/// The user's documents directory, verified to be an existing directory
pub fn user_documents_path() -> Option<PathBuf> {
    Locator::from_env().documents_dir()
}

/// WebDriver executable for `browser_type`; unknown types use chromedriver
pub fn default_driver_path(browser_type: &str) -> Option<PathBuf> {
    Locator::from_env().driver(browser_type)
}

/// Chrome driver executable, same as `default_driver_path("chrome")`
pub fn default_chrome_driver_path() -> Option<PathBuf> {
    default_driver_path("chrome")
}

/// Edge driver executable (msedgedriver)
pub fn default_edge_driver_path() -> Option<PathBuf> {
    default_driver_path("edge")
}

/// Firefox driver executable (geckodriver)
pub fn default_firefox_driver_path() -> Option<PathBuf> {
    default_driver_path("firefox")
}

/// Brave driver executable; Brave is driven by chromedriver
pub fn default_brave_driver_path() -> Option<PathBuf> {
    default_driver_path("brave")
}

/// Browser executable for `browser_type`; `None` if unknown or not installed
pub fn default_browser_path(browser_type: &str) -> Option<PathBuf> {
    Locator::from_env().browser(browser_type)
}

/// `resources/app` directory of a Cursor install
pub fn linux_cursor_path() -> Option<PathBuf> {
    Locator::from_env().cursor_resources()
}
