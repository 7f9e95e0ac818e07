pub mod browser;
pub mod completion;
pub mod cursor;
pub mod documents;
pub mod driver;
pub mod report;
pub mod wait;

use crate::OutputFormat;
use anyhow::{Result, anyhow};
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of a single lookup, as printed by the CLI
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub target: String,
    pub path: Option<PathBuf>,
}

impl Resolution {
    pub fn new(target: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self {
            target: target.into(),
            path,
        }
    }
}

/// Print one resolution; a missing path is an error so the exit status reflects it
pub fn print_single(resolution: Resolution, format: OutputFormat) -> Result<()> {
    let Some(path) = &resolution.path else {
        return Err(anyhow!("{} not found", resolution.target));
    };

    match format {
        OutputFormat::Pretty => println!("{}", path.display()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolution)?),
    }
    Ok(())
}

/// Print several resolutions, listing missing ones instead of failing
pub fn print_list(title: &str, resolutions: &[Resolution], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(resolutions)?),
        OutputFormat::Pretty => print!("{}", format_pretty(title, resolutions)),
    }
    Ok(())
}

fn format_pretty(title: &str, resolutions: &[Resolution]) -> String {
    use console::style;

    let mut output = String::new();
    output.push_str(&format!("\n{}\n\n", style(title).bold().cyan()));

    let width = resolutions
        .iter()
        .map(|r| r.target.len())
        .max()
        .unwrap_or(0);

    for resolution in resolutions {
        let location = match &resolution.path {
            Some(path) => style(path.display().to_string()).green().to_string(),
            None => style("not found").red().to_string(),
        };
        output.push_str(&format!(
            "  {:width$}  {}\n",
            resolution.target,
            location,
            width = width
        ));
    }
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_missing_is_error() {
        let result = print_single(Resolution::new("Cursor", None), OutputFormat::Pretty);
        assert!(result.unwrap_err().to_string().contains("Cursor not found"));
    }

    #[test]
    fn test_pretty_list_marks_missing() {
        console::set_colors_enabled(false);
        let output = format_pretty(
            "Browsers",
            &[
                Resolution::new("chrome", Some(PathBuf::from("/usr/bin/google-chrome"))),
                Resolution::new("operagx", None),
            ],
        );

        assert!(output.contains("Browsers"));
        assert!(output.contains("chrome   /usr/bin/google-chrome"));
        assert!(output.contains("operagx  not found"));
    }

    #[test]
    fn test_resolution_serializes_missing_as_null() {
        let json = serde_json::to_value(Resolution::new("documents", None)).unwrap();
        assert_eq!(json["target"], "documents");
        assert!(json["path"].is_null());
    }
}
