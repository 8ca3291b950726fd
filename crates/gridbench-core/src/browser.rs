use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Browsers a test session can be requested on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Chrome,
    Firefox,
    Safari,
    Edge,
    Ie,
}

impl Browser {
    /// Parse a browser name, case-insensitive with surrounding whitespace
    /// ignored
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "chrome" => Ok(Browser::Chrome),
            "firefox" => Ok(Browser::Firefox),
            "safari" => Ok(Browser::Safari),
            "edge" => Ok(Browser::Edge),
            "ie" => Ok(Browser::Ie),
            _ => Err(Error::UnknownBrowser(name.trim().to_string())),
        }
    }

    /// Canonical lowercase name, as used in browser-list encodings
    pub fn name(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Firefox => "firefox",
            Browser::Safari => "safari",
            Browser::Edge => "edge",
            Browser::Ie => "ie",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A requested browser configuration: name plus optional version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserCapability {
    pub browser: Browser,
    pub version: Option<String>,
}

impl BrowserCapability {
    pub fn new(browser: Browser) -> Self {
        Self {
            browser,
            version: None,
        }
    }

    pub fn with_version(browser: Browser, version: impl Into<String>) -> Self {
        Self {
            browser,
            version: Some(version.into()),
        }
    }
}
