use crate::{Error, Result};

/// Where a browser lives on Windows
#[derive(Debug, Clone, Copy)]
pub struct WindowsLayout {
    /// Names distinctive enough to look up on the search path and in App Paths
    pub search_names: &'static [&'static str],
    /// Executable names inside an install directory, tried in order
    pub executables: &'static [&'static str],
    /// Install directories relative to Program Files / Local AppData
    pub install_dirs: &'static [&'static [&'static str]],
    /// Per-user install directories, relative to Local AppData only
    pub user_install_dirs: &'static [&'static [&'static str]],
    /// Vendor keys whose string values may point at the executable
    pub vendor_keys: &'static [&'static str],
}

/// A macOS application bundle and the executable inside `Contents/MacOS`
#[derive(Debug, Clone, Copy)]
pub struct AppBundle {
    pub bundle: &'static str,
    pub executable: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct MacLayout {
    /// Names looked up on the search path
    pub executables: &'static [&'static str],
    pub bundles: &'static [AppBundle],
}

#[derive(Debug, Clone, Copy)]
pub struct LinuxLayout {
    pub executables: &'static [&'static str],
    /// Absolute directories checked after the search path
    pub install_dirs: &'static [&'static str],
}

/// Static description of a supported browser
#[derive(Debug, Clone, Copy)]
pub struct BrowserProfile {
    /// Lowercase identifier used on the command line and in configs
    pub name: &'static str,
    pub display_name: &'static str,
    /// WebDriver executable used to automate this browser
    pub driver: &'static str,
    pub windows: WindowsLayout,
    pub macos: MacLayout,
    pub linux: LinuxLayout,
}

/// Driver used when the browser type is not recognized
pub const DEFAULT_DRIVER: &str = "chromedriver";

static PROFILES: &[BrowserProfile] = &[
    BrowserProfile {
        name: "chrome",
        display_name: "Google Chrome",
        driver: "chromedriver",
        windows: WindowsLayout {
            search_names: &["chrome.exe"],
            executables: &["chrome.exe"],
            install_dirs: &[
                &["Google", "Chrome", "Application"],
                &["Google", "Chrome Beta", "Application"],
                &["Google", "Chrome Dev", "Application"],
            ],
            user_install_dirs: &[],
            vendor_keys: &[],
        },
        macos: MacLayout {
            executables: &["google-chrome", "chromium"],
            bundles: &[
                AppBundle { bundle: "Google Chrome.app", executable: "Google Chrome" },
                AppBundle { bundle: "Google Chrome Beta.app", executable: "Google Chrome Beta" },
                AppBundle { bundle: "Google Chrome Dev.app", executable: "Google Chrome Dev" },
                AppBundle { bundle: "Chromium.app", executable: "Chromium" },
            ],
        },
        linux: LinuxLayout {
            executables: &[
                "google-chrome",
                "google-chrome-stable",
                "chrome",
                "chromium",
                "chromium-browser",
                "google-chrome-beta",
                "google-chrome-dev",
            ],
            install_dirs: &["/opt/google/chrome", "/opt/google/chrome-beta", "/opt/chromium", "/usr/bin", "/snap/bin"],
        },
    },
    BrowserProfile {
        name: "edge",
        display_name: "Microsoft Edge",
        driver: "msedgedriver",
        windows: WindowsLayout {
            search_names: &["msedge.exe"],
            executables: &["msedge.exe"],
            install_dirs: &[
                &["Microsoft", "Edge", "Application"],
                &["Microsoft", "Edge Beta", "Application"],
                &["Microsoft", "Edge Dev", "Application"],
            ],
            user_install_dirs: &[],
            vendor_keys: &[],
        },
        macos: MacLayout {
            executables: &["microsoft-edge"],
            bundles: &[
                AppBundle { bundle: "Microsoft Edge.app", executable: "Microsoft Edge" },
                AppBundle { bundle: "Microsoft Edge Beta.app", executable: "Microsoft Edge Beta" },
                AppBundle { bundle: "Microsoft Edge Dev.app", executable: "Microsoft Edge Dev" },
            ],
        },
        linux: LinuxLayout {
            executables: &["microsoft-edge", "microsoft-edge-stable", "microsoft-edge-beta", "microsoft-edge-dev"],
            install_dirs: &["/opt/microsoft/msedge", "/opt/microsoft/msedge-beta", "/opt/microsoft/msedge-dev", "/usr/bin"],
        },
    },
    BrowserProfile {
        name: "firefox",
        display_name: "Mozilla Firefox",
        driver: "geckodriver",
        windows: WindowsLayout {
            search_names: &["firefox.exe"],
            executables: &["firefox.exe"],
            install_dirs: &[&["Mozilla Firefox"], &["Firefox Developer Edition"]],
            user_install_dirs: &[],
            vendor_keys: &[
                r"SOFTWARE\Mozilla\Mozilla Firefox",
                r"SOFTWARE\Clients\StartMenuInternet\FIREFOX.EXE\shell\open\command",
            ],
        },
        macos: MacLayout {
            executables: &["firefox"],
            bundles: &[
                AppBundle { bundle: "Firefox.app", executable: "firefox" },
                AppBundle { bundle: "Firefox Developer Edition.app", executable: "firefox" },
            ],
        },
        linux: LinuxLayout {
            executables: &["firefox", "firefox-esr"],
            install_dirs: &["/opt/firefox", "/usr/lib/firefox", "/usr/bin", "/snap/bin"],
        },
    },
    BrowserProfile {
        name: "brave",
        display_name: "Brave",
        driver: "chromedriver",
        windows: WindowsLayout {
            search_names: &["brave.exe"],
            executables: &["brave.exe"],
            install_dirs: &[&["BraveSoftware", "Brave-Browser", "Application"]],
            user_install_dirs: &[],
            vendor_keys: &[],
        },
        macos: MacLayout {
            executables: &["brave-browser"],
            bundles: &[AppBundle { bundle: "Brave Browser.app", executable: "Brave Browser" }],
        },
        linux: LinuxLayout {
            executables: &["brave-browser", "brave", "brave-browser-stable"],
            install_dirs: &["/opt/brave.com/brave", "/opt/brave-bin", "/usr/bin", "/snap/bin"],
        },
    },
    BrowserProfile {
        name: "opera",
        display_name: "Opera",
        driver: "chromedriver",
        windows: WindowsLayout {
            search_names: &["opera.exe"],
            executables: &["opera.exe", "launcher.exe"],
            install_dirs: &[&["Opera"]],
            user_install_dirs: &[&["Programs", "Opera"]],
            vendor_keys: &[],
        },
        macos: MacLayout {
            executables: &["opera"],
            bundles: &[AppBundle { bundle: "Opera.app", executable: "Opera" }],
        },
        linux: LinuxLayout {
            executables: &["opera"],
            install_dirs: &["/usr/lib/x86_64-linux-gnu/opera", "/opt/opera", "/usr/bin", "/snap/bin"],
        },
    },
    BrowserProfile {
        name: "operagx",
        display_name: "Opera GX",
        driver: "chromedriver",
        windows: WindowsLayout {
            // A plain opera.exe on the search path belongs to regular Opera
            search_names: &[],
            // Installs vary between shipping the launcher and the browser binary
            executables: &["launcher.exe", "opera.exe"],
            install_dirs: &[&["Opera GX"]],
            user_install_dirs: &[&["Programs", "Opera GX"]],
            vendor_keys: &[],
        },
        macos: MacLayout {
            executables: &["opera-gx"],
            bundles: &[AppBundle { bundle: "Opera GX.app", executable: "Opera" }],
        },
        linux: LinuxLayout {
            executables: &["opera-gx"],
            install_dirs: &["/opt/opera-gx", "/usr/bin"],
        },
    },
];

impl BrowserProfile {
    /// Every configured browser, in table order
    pub fn all() -> &'static [BrowserProfile] {
        PROFILES
    }

    /// Profile for a browser type, case-insensitive. `None` means "not configured".
    pub fn lookup(name: &str) -> Option<&'static BrowserProfile> {
        let name = name.trim();
        PROFILES.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Like [`BrowserProfile::lookup`], with an error listing the supported names
    pub fn find(name: &str) -> Result<&'static BrowserProfile> {
        Self::lookup(name).ok_or_else(|| Error::UnknownBrowser {
            name: name.to_string(),
            supported: Self::supported_names().join(", "),
        })
    }

    pub fn supported_names() -> Vec<&'static str> {
        PROFILES.iter().map(|p| p.name).collect()
    }
}

/// Driver executable (without platform suffix) for a browser type
pub fn driver_for(browser_type: &str) -> &'static str {
    BrowserProfile::lookup(browser_type).map_or(DEFAULT_DRIVER, |p| p.driver)
}
