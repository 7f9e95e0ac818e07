use crate::platform::Platform;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Snapshot of everything the resolvers read from the running process.
///
/// `Locator::from_env` captures the live values. The builder methods replace
/// individual pieces, which lets tests run a Windows or macOS search against a
/// temporary directory tree on any host.
#[derive(Debug, Clone)]
pub struct Locator {
    platform: Platform,
    home: Option<PathBuf>,
    search_path: Option<OsString>,
    cwd: PathBuf,
    vars: HashMap<String, OsString>,
    bundle_dir: Option<PathBuf>,
    install_dir: Option<PathBuf>,
    root: PathBuf,
}

impl Locator {
    /// Capture platform, home directory, `PATH` and environment of this process
    pub fn from_env() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| key.into_string().ok().map(|key| (key.to_uppercase(), value)))
            .collect();

        Self {
            platform: Platform::current(),
            home: dirs::home_dir(),
            search_path: std::env::var_os("PATH"),
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            vars,
            bundle_dir: std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf)),
            install_dir: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
            root: PathBuf::from("/"),
        }
    }

    /// A locator that knows nothing about its environment
    pub fn isolated(platform: Platform) -> Self {
        Self {
            platform,
            home: None,
            search_path: None,
            cwd: PathBuf::from("."),
            vars: HashMap::new(),
            bundle_dir: None,
            install_dir: None,
            root: PathBuf::from("/"),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Replace the executable search path with the given directories
    pub fn with_search_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let dirs: Vec<PathBuf> = dirs.into_iter().map(|d| d.as_ref().to_path_buf()).collect();
        self.search_path = std::env::join_paths(dirs).ok();
        self
    }

    /// Set an environment variable as seen by the resolvers. Names are case-insensitive.
    pub fn with_var(mut self, name: &str, value: impl Into<OsString>) -> Self {
        self.vars.insert(name.to_uppercase(), value.into());
        self
    }

    /// Directory a packaged build unpacks its bundled files into
    pub fn with_bundle_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.bundle_dir = Some(dir.into());
        self
    }

    /// Directory of the pathscout installation itself (development layout)
    pub fn with_install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.install_dir = Some(dir.into());
        self
    }

    /// Prefix for the fixed absolute install locations (`/opt/...`, `/Applications`)
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    pub fn bundle_dir(&self) -> Option<&Path> {
        self.bundle_dir.as_deref()
    }

    pub fn install_dir(&self) -> Option<&Path> {
        self.install_dir.as_deref()
    }

    /// Environment variable value, ignoring empty values
    pub fn var(&self, name: &str) -> Option<&OsStr> {
        self.vars
            .get(&name.to_uppercase())
            .map(OsString::as_os_str)
            .filter(|v| !v.is_empty())
    }

    /// A fixed absolute location, placed under the configured root
    pub fn rooted(&self, absolute: &str) -> PathBuf {
        self.root.join(absolute.trim_start_matches('/'))
    }

    /// First of `names` found on the search path
    pub fn first_on_search_path(&self, names: &[&str]) -> Option<PathBuf> {
        names.iter().find_map(|name| self.find_in_search_path(name))
    }

    /// Resolve a bare executable name against the search path
    pub fn find_in_search_path(&self, name: &str) -> Option<PathBuf> {
        let search_path = self.search_path.as_ref()?;
        match which::which_in(name, Some(search_path), &self.cwd) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::trace!("{} not on search path: {}", name, e);
                None
            }
        }
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_is_case_insensitive() {
        let locator = Locator::isolated(Platform::Windows).with_var("ProgramFiles", "C:\\Apps");
        assert_eq!(locator.var("PROGRAMFILES"), Some(OsStr::new("C:\\Apps")));
        assert_eq!(locator.var("programfiles"), Some(OsStr::new("C:\\Apps")));
    }

    #[test]
    fn test_empty_var_is_ignored() {
        let locator = Locator::isolated(Platform::Linux).with_var("LOCALAPPDATA", "");
        assert_eq!(locator.var("LOCALAPPDATA"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_find_in_search_path() {
        use crate::search::tests::make_executable;

        let temp = tempfile::tempdir().unwrap();
        let tool = temp.path().join("sometool");
        make_executable(&tool);

        let locator = Locator::isolated(Platform::Linux).with_search_dirs([temp.path()]);
        assert_eq!(locator.find_in_search_path("sometool"), Some(tool));
    }

    #[test]
    fn test_with_platform_switches_strategy() {
        let locator = Locator::from_env().with_platform(Platform::MacOs);
        assert_eq!(locator.platform(), Platform::MacOs);
        assert!(locator.install_dir().is_some());
    }

    #[test]
    fn test_no_search_path_finds_nothing() {
        let locator = Locator::isolated(Platform::current());
        assert_eq!(locator.find_in_search_path("sh"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_rooted_paths() {
        let locator = Locator::isolated(Platform::Linux);
        assert_eq!(locator.rooted("/opt/google/chrome"), PathBuf::from("/opt/google/chrome"));

        let locator = locator.with_root("/tmp/fake-root");
        assert_eq!(
            locator.rooted("/opt/google/chrome"),
            PathBuf::from("/tmp/fake-root/opt/google/chrome")
        );
    }

    #[test]
    fn test_from_env_captures_install_dir() {
        let locator = Locator::from_env();
        assert_eq!(locator.platform(), Platform::current());
        assert_eq!(
            locator.install_dir(),
            Some(Path::new(env!("CARGO_MANIFEST_DIR")))
        );
    }
}
