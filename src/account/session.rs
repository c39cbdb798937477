//! Who is signed in on this machine

use super::UserId;
use crate::persist::{self, PersistError};
use crate::stats::PlayerId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: UserId,
    pub username: String,
}

impl Session {
    pub const FILE_NAME: &'static str = "session.json";

    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(Self::FILE_NAME)
    }

    /// The signed-in session, if any
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the session file exists but is unreadable.
    pub fn load(data_dir: &Path) -> Result<Option<Self>, PersistError> {
        persist::read_json(&Self::path(data_dir))
    }

    /// # Errors
    ///
    /// Returns `PersistError` if the session file cannot be written.
    pub fn save(&self, data_dir: &Path) -> Result<(), PersistError> {
        persist::write_json(&Self::path(data_dir), self)
    }

    /// Sign out; returns whether anyone was signed in
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the session file cannot be removed.
    pub fn clear(data_dir: &Path) -> Result<bool, PersistError> {
        let path = Self::path(data_dir);
        persist::remove_if_exists(&path).map_err(|source| PersistError::Write { path, source })
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.user_id.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Session::load(dir.path()).unwrap(), None);

        let session = Session::new(UserId::generate(), "alice");
        session.save(dir.path()).unwrap();
        assert_eq!(Session::load(dir.path()).unwrap(), Some(session.clone()));
        assert_eq!(session.player().as_str(), session.user_id.to_string());

        assert!(Session::clear(dir.path()).unwrap());
        assert!(!Session::clear(dir.path()).unwrap());
        assert_eq!(Session::load(dir.path()).unwrap(), None);
    }
}
