use std::fmt;

/// Operating system family that decides which search strategy runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Platform this binary was built for. Other unixes use the Linux layout.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Suffix appended to bare executable names
    pub const fn exe_suffix(self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::MacOs | Platform::Linux => "",
        }
    }

    /// `name` with the platform executable suffix, unless already present
    pub fn executable_name(self, name: &str) -> String {
        let suffix = self.exe_suffix();
        if suffix.is_empty() || name.to_ascii_lowercase().ends_with(suffix) {
            name.to_string()
        } else {
            format!("{}{}", name, suffix)
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executable_name() {
        assert_eq!(Platform::Windows.executable_name("chromedriver"), "chromedriver.exe");
        assert_eq!(Platform::Windows.executable_name("chrome.exe"), "chrome.exe");
        assert_eq!(Platform::Windows.executable_name("OPERA.EXE"), "OPERA.EXE");
        assert_eq!(Platform::Linux.executable_name("chromedriver"), "chromedriver");
        assert_eq!(Platform::MacOs.executable_name("geckodriver"), "geckodriver");
    }

    #[test]
    fn test_current_matches_target() {
        #[cfg(target_os = "windows")]
        assert_eq!(Platform::current(), Platform::Windows);

        #[cfg(target_os = "macos")]
        assert_eq!(Platform::current(), Platform::MacOs);

        #[cfg(target_os = "linux")]
        assert_eq!(Platform::current(), Platform::Linux);
    }
}
