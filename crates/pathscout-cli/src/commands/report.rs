use super::{Resolution, browser, print_list};
use crate::OutputFormat;
use anyhow::Result;
use pathscout_locate::{BrowserProfile, Locator};

/// Resolve every target pathscout knows about
pub fn collect(locator: &Locator) -> Vec<Resolution> {
    let mut resolutions = vec![Resolution::new("documents", locator.documents_dir())];

    resolutions.extend(browser::resolve_all(locator));

    // Several browsers share a driver; report each driver once
    let mut seen: Vec<&str> = Vec::new();
    for profile in BrowserProfile::all() {
        if !seen.contains(&profile.driver) {
            seen.push(profile.driver);
            resolutions.push(Resolution::new(profile.driver, locator.driver(profile.name)));
        }
    }

    resolutions.push(Resolution::new("cursor", locator.cursor_resources()));
    resolutions
}

pub fn execute(locator: &Locator, format: OutputFormat) -> Result<()> {
    tracing::info!("Resolving all targets on {}", locator.platform());

    let resolutions = collect(locator);
    let found = resolutions.iter().filter(|r| r.path.is_some()).count();
    tracing::info!("Found {} of {} targets", found, resolutions.len());

    print_list("pathscout report", &resolutions, format)
}
