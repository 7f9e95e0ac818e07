use crate::locator::Locator;
use crate::platform::Platform;
use crate::registry::{self, Hive};
use crate::search::is_dir;
use std::path::PathBuf;

const SHELL_FOLDERS_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Explorer\Shell Folders";
const PERSONAL_VALUE: &str = "Personal";

impl Locator {
    /// The user's documents directory, if it exists.
    ///
    /// On Windows the shell folder registered for the user wins; only a failed
    /// registry read falls back to `<home>\Documents`. Whichever path is chosen
    /// must be an existing directory, otherwise the result is `None`.
    pub fn documents_dir(&self) -> Option<PathBuf> {
        self.verified_documents(self.shell_folder_documents())
    }

    fn verified_documents(&self, shell_folder: Option<PathBuf>) -> Option<PathBuf> {
        let documents = match shell_folder {
            Some(path) => path,
            None => self.home()?.join("Documents"),
        };

        if is_dir(&documents) {
            tracing::debug!("Found documents directory at {}", documents.display());
            Some(documents)
        } else {
            tracing::debug!("Documents directory {} does not exist", documents.display());
            None
        }
    }

    fn shell_folder_documents(&self) -> Option<PathBuf> {
        if self.platform() != Platform::Windows {
            return None;
        }

        match registry::read_string(Hive::CurrentUser, SHELL_FOLDERS_KEY, Some(PERSONAL_VALUE)) {
            Ok(value) => Some(PathBuf::from(value)),
            Err(e) => {
                tracing::debug!("Shell folder lookup failed: {}", e);
                None
            }
        }
    }
}
