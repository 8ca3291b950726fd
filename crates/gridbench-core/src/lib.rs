pub mod browser;
pub mod capabilities;
pub mod config;
pub mod error;

pub use browser::{Browser, BrowserCapability};
pub use config::{ConfigProvider, ProcessConfig, StaticConfig};
pub use error::{Error, Result};
