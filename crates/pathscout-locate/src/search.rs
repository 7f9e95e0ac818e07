use std::path::{Path, PathBuf};

type Step<'a> = Box<dyn FnOnce() -> Option<PathBuf> + 'a>;

/// Ordered list of lookup steps, evaluated lazily until one yields a path.
///
/// Each step is responsible for verifying its own candidate. A step that fails
/// for any reason returns `None` and the next step runs.
pub(crate) struct SearchChain<'a> {
    target: String,
    steps: Vec<(&'static str, Step<'a>)>,
}

impl<'a> SearchChain<'a> {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            steps: Vec::new(),
        }
    }

    pub fn then(mut self, label: &'static str, step: impl FnOnce() -> Option<PathBuf> + 'a) -> Self {
        self.steps.push((label, Box::new(step)));
        self
    }

    /// Run the steps in order and return the first hit
    pub fn resolve(self) -> Option<PathBuf> {
        for (label, step) in self.steps {
            if let Some(path) = step() {
                tracing::debug!("Found {} via {}: {}", self.target, label, path.display());
                return Some(path);
            }
            tracing::trace!("{}: nothing via {}", self.target, label);
        }

        tracing::debug!("{} not found", self.target);
        None
    }
}

/// First candidate accepted by `check`
pub(crate) fn first_match<I>(candidates: I, check: fn(&Path) -> bool) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    candidates.into_iter().find(|candidate| {
        let hit = check(candidate);
        if !hit {
            tracing::trace!("Rejected candidate: {}", candidate.display());
        }
        hit
    })
}

pub(crate) fn is_dir(path: &Path) -> bool {
    path.is_dir()
}

pub(crate) fn is_file(path: &Path) -> bool {
    path.is_file()
}

/// Existing regular file with an execute bit (any file on non-unix hosts)
pub(crate) fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }

    #[cfg(not(unix))]
    {
        true
    }
}
