use super::{Resolution, print_list, print_single};
use crate::OutputFormat;
use anyhow::Result;
use pathscout_locate::{BrowserProfile, Locator};

pub fn execute(locator: &Locator, name: &str, all: bool, format: OutputFormat) -> Result<()> {
    if all {
        tracing::info!("Locating all configured browsers on {}", locator.platform());
        let resolutions = resolve_all(locator);
        return print_list("Browsers", &resolutions, format);
    }

    // Report an unknown name as such rather than as "not found"
    let profile = BrowserProfile::find(name)?;
    tracing::info!("Locating {}", profile.display_name);

    let path = locator.browser_for(profile);
    print_single(Resolution::new(profile.display_name, path), format)
}

/// One resolution per configured browser, in table order
pub fn resolve_all(locator: &Locator) -> Vec<Resolution> {
    BrowserProfile::all()
        .iter()
        .map(|profile| Resolution::new(profile.name, locator.browser_for(profile)))
        .collect()
}
