use super::{Resolution, print_single};
use crate::OutputFormat;
use anyhow::Result;
use pathscout_locate::Locator;

pub fn execute(locator: &Locator, format: OutputFormat) -> Result<()> {
    tracing::info!("Locating Cursor installation");

    let path = locator.cursor_resources();
    print_single(Resolution::new("Cursor installation", path), format)
}
