use crate::Result;
use crate::locator::Locator;
use crate::search::{SearchChain, first_match, is_dir};
use std::path::{Path, PathBuf};

/// Launcher command the Cursor packages put on the search path
const CURSOR_COMMAND: &str = "cursor";

/// Known system-wide installs, most common first
const SYSTEM_INSTALLS: &[&str] = &[
    "/opt/Cursor/resources/app",
    "/opt/cursor/resources/app",
    "/usr/share/cursor/resources/app",
    "/opt/cursor-bin/resources/app",
    "/usr/lib/cursor/resources/app",
];

/// Per-user installs, relative to the home directory
const USER_INSTALLS: &[&str] = &[".local/share/cursor/resources/app"];

impl Locator {
    /// The `resources/app` directory of a Cursor installation
    pub fn cursor_resources(&self) -> Option<PathBuf> {
        SearchChain::new("Cursor resources")
            .then("launcher", || self.cursor_from_launcher())
            .then("known installs", || {
                let system = SYSTEM_INSTALLS.iter().map(|dir| self.rooted(dir));
                let user = self
                    .home()
                    .into_iter()
                    .flat_map(|home| USER_INSTALLS.iter().map(move |dir| home.join(dir)));
                first_match(system.chain(user), is_dir)
            })
            .resolve()
    }

    fn cursor_from_launcher(&self) -> Option<PathBuf> {
        let launcher = self.find_in_search_path(CURSOR_COMMAND)?;
        match real_location(&launcher) {
            Ok(real) => first_match(launcher_layouts(&real), is_dir),
            Err(e) => {
                tracing::debug!("Cannot resolve {}: {}", launcher.display(), e);
                None
            }
        }
    }
}

fn real_location(launcher: &Path) -> Result<PathBuf> {
    Ok(std::fs::canonicalize(launcher)?)
}

/// `resources/app` two levels above the launcher, then next to it
fn launcher_layouts(real: &Path) -> Vec<PathBuf> {
    let Some(dir) = real.parent() else {
        return Vec::new();
    };

    let mut candidates = Vec::new();
    if let Some(install_root) = dir.parent() {
        candidates.push(install_root.join("resources").join("app"));
    }
    candidates.push(dir.join("resources").join("app"));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use crate::search::tests::make_executable;

    #[cfg(unix)]
    #[test]
    fn test_symlinked_launcher_two_levels_up() {
        let temp = tempfile::tempdir().unwrap();
        let install = temp.path().join("share/cursor");
        let real = install.join("bin/cursor");
        make_executable(&real);
        std::fs::create_dir_all(install.join("resources/app")).unwrap();

        let bin = temp.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::os::unix::fs::symlink(&real, bin.join("cursor")).unwrap();

        let locator = Locator::isolated(Platform::Linux).with_search_dirs([&bin]);
        let expected = std::fs::canonicalize(install.join("resources/app")).unwrap();
        assert_eq!(locator.cursor_resources(), Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn test_launcher_next_to_resources() {
        let temp = tempfile::tempdir().unwrap();
        let install = temp.path().join("Cursor");
        let launcher = install.join("cursor");
        make_executable(&launcher);
        std::fs::create_dir_all(install.join("resources/app")).unwrap();

        let locator = Locator::isolated(Platform::Linux).with_search_dirs([&install]);
        let expected = std::fs::canonicalize(install.join("resources/app")).unwrap();
        assert_eq!(locator.cursor_resources(), Some(expected));
    }

    #[test]
    fn test_known_install_fallback() {
        let root = tempfile::tempdir().unwrap();
        let resources = root.path().join("usr/share/cursor/resources/app");
        std::fs::create_dir_all(&resources).unwrap();

        let locator = Locator::isolated(Platform::Linux).with_root(root.path());
        assert_eq!(locator.cursor_resources(), Some(resources));
    }

    #[test]
    fn test_system_install_order() {
        let root = tempfile::tempdir().unwrap();
        let first = root.path().join("opt/Cursor/resources/app");
        std::fs::create_dir_all(&first).unwrap();
        std::fs::create_dir_all(root.path().join("usr/lib/cursor/resources/app")).unwrap();

        let locator = Locator::isolated(Platform::Linux).with_root(root.path());
        assert_eq!(locator.cursor_resources(), Some(first));
    }

    #[test]
    fn test_user_install_fallback() {
        let root = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let resources = home.path().join(".local/share/cursor/resources/app");
        std::fs::create_dir_all(&resources).unwrap();

        let locator = Locator::isolated(Platform::Linux)
            .with_root(root.path())
            .with_home(home.path());
        assert_eq!(locator.cursor_resources(), Some(resources));
    }

    #[cfg(unix)]
    #[test]
    fn test_launcher_without_resources_falls_back() {
        let root = tempfile::tempdir().unwrap();
        let bin = root.path().join("bin");
        make_executable(&bin.join("cursor"));
        let resources = root.path().join("opt/cursor-bin/resources/app");
        std::fs::create_dir_all(&resources).unwrap();

        let locator = Locator::isolated(Platform::Linux)
            .with_root(root.path())
            .with_search_dirs([&bin]);
        assert_eq!(locator.cursor_resources(), Some(resources));
    }

    #[test]
    fn test_nothing_installed() {
        let root = tempfile::tempdir().unwrap();
        let locator = Locator::isolated(Platform::Linux)
            .with_root(root.path())
            .with_home(root.path());
        assert_eq!(locator.cursor_resources(), None);
    }

    #[test]
    fn test_launcher_layouts() {
        let layouts = launcher_layouts(Path::new("/usr/share/cursor/bin/cursor"));
        assert_eq!(
            layouts,
            vec![
                PathBuf::from("/usr/share/cursor/resources/app"),
                PathBuf::from("/usr/share/cursor/bin/resources/app"),
            ]
        );
    }
}
