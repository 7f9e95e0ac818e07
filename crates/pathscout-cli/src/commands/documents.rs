use super::{Resolution, print_single};
use crate::OutputFormat;
use anyhow::Result;
use pathscout_locate::Locator;

pub fn execute(locator: &Locator, format: OutputFormat) -> Result<()> {
    tracing::info!("Locating documents directory");

    let path = locator.documents_dir();
    print_single(Resolution::new("Documents directory", path), format)
}
