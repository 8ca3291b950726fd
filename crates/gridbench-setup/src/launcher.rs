use gridbench_core::Browser;

use crate::selector::DriverTarget;
use crate::Result;

/// Launches browser sessions for resolved targets.
///
/// Implemented outside this crate by the actual WebDriver integration;
/// network I/O, timeouts and retries live behind this seam.
pub trait DriverLauncher {
    type Handle;

    fn launch_local(&self, browser: Browser, version: Option<&str>) -> Result<Self::Handle>;

    fn launch_remote(&self, url: &str) -> Result<Self::Handle>;
}

impl DriverTarget {
    /// Dispatch this target to a launcher
    pub fn launch<L: DriverLauncher>(&self, launcher: &L) -> Result<L::Handle> {
        match self {
            DriverTarget::Local { browser, version } => {
                launcher.launch_local(*browser, version.as_deref())
            }
            DriverTarget::RemoteHub { url } => launcher.launch_remote(url),
            DriverTarget::FallbackLocal { browser } => launcher.launch_local(*browser, None),
        }
    }
}
