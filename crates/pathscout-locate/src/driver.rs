use crate::locator::Locator;
use crate::profiles::driver_for;
use crate::search::{SearchChain, is_file};
use std::path::{Path, PathBuf};

/// Directory holding drivers shipped next to pathscout
const DRIVERS_DIR: &str = "drivers";

impl Locator {
    /// WebDriver executable for a browser type.
    ///
    /// Unknown browser types get the Chrome driver. Only the search path and
    /// the `drivers/` directories of the bundle and install dir are checked.
    pub fn driver(&self, browser_type: &str) -> Option<PathBuf> {
        let name = self.platform().executable_name(driver_for(browser_type));

        SearchChain::new(name.clone())
            .then("search path", || self.find_in_search_path(&name))
            .then("bundle directory", || shipped_driver(self.bundle_dir()?, &name))
            .then("install directory", || shipped_driver(self.install_dir()?, &name))
            .resolve()
    }
}

fn shipped_driver(base: &Path, name: &str) -> Option<PathBuf> {
    let candidate = base.join(DRIVERS_DIR).join(name);
    is_file(&candidate).then_some(candidate)
}
