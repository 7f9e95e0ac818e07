use super::{Resolution, print_single};
use crate::OutputFormat;
use anyhow::Result;
use pathscout_locate::{Locator, driver_for};

pub fn execute(locator: &Locator, browser: &str, format: OutputFormat) -> Result<()> {
    let driver = driver_for(browser);
    tracing::info!("Locating {} for {}", driver, browser);

    let path = locator.driver(browser);
    print_single(Resolution::new(driver, path), format)
}
