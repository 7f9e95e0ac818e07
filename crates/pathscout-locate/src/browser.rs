use crate::locator::Locator;
use crate::platform::Platform;
use crate::profiles::{BrowserProfile, LinuxLayout, MacLayout, WindowsLayout};
use crate::registry::{self, Hive, executable_from_value};
use crate::search::{SearchChain, first_match, is_executable, is_file};
use std::path::{Path, PathBuf};

const APP_PATHS_KEYS: [&str; 2] = [
    r"SOFTWARE\Microsoft\Windows\CurrentVersion\App Paths",
    r"SOFTWARE\WOW6432Node\Microsoft\Windows\CurrentVersion\App Paths",
];

const HIVES: [Hive; 2] = [Hive::LocalMachine, Hive::CurrentUser];

impl Locator {
    /// Executable of an installed browser.
    ///
    /// Returns `None` both when the browser type is not configured and when it
    /// is not installed; use [`BrowserProfile::find`] to tell the two apart.
    pub fn browser(&self, browser_type: &str) -> Option<PathBuf> {
        let Some(profile) = BrowserProfile::lookup(browser_type) else {
            tracing::debug!("Browser type '{}' is not configured", browser_type);
            return None;
        };
        self.browser_for(profile)
    }

    /// Executable for a known profile, using the strategy of the current platform
    pub fn browser_for(&self, profile: &BrowserProfile) -> Option<PathBuf> {
        match self.platform() {
            Platform::Windows => self.windows_browser(profile.display_name, &profile.windows),
            Platform::MacOs => self.macos_browser(profile.display_name, &profile.macos),
            Platform::Linux => self.linux_browser(profile.display_name, &profile.linux),
        }
    }

    fn windows_browser(&self, target: &str, layout: &WindowsLayout) -> Option<PathBuf> {
        SearchChain::new(target)
            .then("search path", || self.first_on_search_path(layout.search_names))
            .then("install directories", || {
                first_match(self.windows_install_candidates(layout), is_file)
            })
            .then("App Paths", || app_paths_lookup(layout.search_names))
            .then("vendor keys", || vendor_key_lookup(layout))
            .resolve()
    }

    fn macos_browser(&self, target: &str, layout: &MacLayout) -> Option<PathBuf> {
        SearchChain::new(target)
            .then("search path", || self.first_on_search_path(layout.executables))
            .then("/Applications", || {
                first_match(bundle_candidates(&self.rooted("/Applications"), layout), is_file)
            })
            .then("~/Applications", || {
                let applications = self.home()?.join("Applications");
                first_match(bundle_candidates(&applications, layout), is_file)
            })
            .resolve()
    }

    fn linux_browser(&self, target: &str, layout: &LinuxLayout) -> Option<PathBuf> {
        SearchChain::new(target)
            .then("search path", || self.first_on_search_path(layout.executables))
            .then("install directories", || {
                let candidates = layout.executables.iter().flat_map(|name| {
                    layout
                        .install_dirs
                        .iter()
                        .map(move |dir| self.rooted(dir).join(name))
                });
                first_match(candidates, is_executable)
            })
            .resolve()
    }

    /// Program Files and Program Files (x86), in that order
    fn program_files_dirs(&self) -> [PathBuf; 2] {
        let program_files = self
            .var("PROGRAMFILES")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(r"C:\Program Files"));
        let program_files_x86 = self
            .var("PROGRAMFILES(X86)")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(r"C:\Program Files (x86)"));
        [program_files, program_files_x86]
    }

    fn local_app_data(&self) -> Option<PathBuf> {
        self.var("LOCALAPPDATA")
            .map(PathBuf::from)
            .or_else(|| self.home().map(|home| home.join("AppData").join("Local")))
    }

    /// Candidates ordered by executable name, then fragment, then base directory.
    ///
    /// Machine-wide fragments are tried under Program Files, Program Files (x86)
    /// and Local AppData; per-user fragments only under Local AppData.
    fn windows_install_candidates(&self, layout: &WindowsLayout) -> Vec<PathBuf> {
        let local_app_data = self.local_app_data();
        let mut bases = self.program_files_dirs().to_vec();
        bases.extend(local_app_data.clone());

        let mut candidates = Vec::new();
        for name in layout.executables {
            for fragment in layout.install_dirs {
                for base in &bases {
                    candidates.push(join_fragment(base, fragment).join(name));
                }
            }
            if let Some(local) = &local_app_data {
                for fragment in layout.user_install_dirs {
                    candidates.push(join_fragment(local, fragment).join(name));
                }
            }
        }
        candidates
    }
}

/// Join an install fragment onto a base directory.
///
/// User-scoped installs carry a leading `Programs` segment; when the base
/// already ends in that segment it is not repeated.
fn join_fragment(base: &Path, fragment: &[&str]) -> PathBuf {
    let base_name = base.file_name().and_then(|name| name.to_str());
    let rest = match (fragment.split_first(), base_name) {
        (Some((first, rest)), Some(last)) if first.eq_ignore_ascii_case(last) => rest,
        _ => fragment,
    };
    rest.iter().fold(base.to_path_buf(), |path, part| path.join(part))
}

fn bundle_candidates(applications: &Path, layout: &MacLayout) -> Vec<PathBuf> {
    layout
        .bundles
        .iter()
        .map(|app| {
            applications
                .join(app.bundle)
                .join("Contents")
                .join("MacOS")
                .join(app.executable)
        })
        .collect()
}

fn app_paths_lookup(executables: &[&str]) -> Option<PathBuf> {
    for name in executables {
        for hive in HIVES {
            for root in APP_PATHS_KEYS {
                let key = format!(r"{}\{}", root, name);
                match registry::read_string(hive, &key, None) {
                    Ok(value) => {
                        let path = executable_from_value(&value);
                        if is_file(&path) {
                            return Some(path);
                        }
                        tracing::debug!("App Paths entry {} points at missing {}", key, path.display());
                    }
                    Err(e) => tracing::trace!("{}", e),
                }
            }
        }
    }
    None
}

fn vendor_key_lookup(layout: &WindowsLayout) -> Option<PathBuf> {
    for key in layout.vendor_keys {
        for hive in HIVES {
            match registry::string_values(hive, key) {
                Ok(values) => {
                    if let Some(path) = pick_vendor_value(&values, layout.executables) {
                        return Some(path);
                    }
                }
                Err(e) => tracing::trace!("{}", e),
            }
        }
    }
    None
}

/// First value naming one of `executables` that exists on disk
fn pick_vendor_value(values: &[(String, String)], executables: &[&str]) -> Option<PathBuf> {
    values.iter().find_map(|(_, data)| {
        let path = executable_from_value(data);
        let lowered = path.to_string_lossy().to_ascii_lowercase();
        let named = executables
            .iter()
            .any(|exe| lowered.ends_with(&exe.to_ascii_lowercase()));
        (named && is_file(&path)).then_some(path)
    })
}
