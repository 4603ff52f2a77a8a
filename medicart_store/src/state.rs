//! Application state and its explicit load/save interface.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::{AuthDirectory, Cart, Result, StoreError, User};

/// Everything the shopper can change, passed to collaborators by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub cart: Cart,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<User>,
}

impl AppState {
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn require_user(&self) -> Result<&User> {
        self.user.as_ref().ok_or(StoreError::NotSignedIn)
    }

    pub fn login(&mut self, directory: &AuthDirectory, email: &str, password: &str) -> Result<&User> {
        let user = directory.login(email, password)?;
        Ok(&*self.user.insert(user))
    }

    pub fn register(
        &mut self,
        directory: &mut AuthDirectory,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<&User> {
        let user = directory.register(name, email, password)?;
        Ok(&*self.user.insert(user))
    }

    /// Sign out. Returns the user that was signed in, if any.
    pub fn logout(&mut self) -> Option<User> {
        let user = self.user.take();
        if let Some(user) = &user {
            info!("Logged out {}", user.email);
        }
        user
    }
}

/// JSON file holding an [`AppState`] between runs.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved state.
    ///
    /// A missing file means a fresh start. A file that no longer parses is
    /// logged and replaced by an empty state on the next save.
    pub fn load(&self) -> Result<AppState> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No saved state at {}, starting fresh", self.path.display());
                return Ok(AppState::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        match serde_json::from_str::<AppState>(&content) {
            Ok(state) => {
                debug!(
                    "Loaded state from {}: {} cart lines, signed in: {}",
                    self.path.display(),
                    state.cart.items().len(),
                    state.is_logged_in()
                );
                Ok(state)
            }
            Err(e) => {
                warn!(
                    "Failed to parse saved state at {}: {e}. Starting fresh.",
                    self.path.display()
                );
                Ok(AppState::default())
            }
        }
    }

    pub fn save(&self, state: &AppState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!("Saved state to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout() {
        let directory = AuthDirectory::demo();
        let mut state = AppState::default();
        assert!(matches!(state.require_user(), Err(StoreError::NotSignedIn)));

        assert!(state.login(&directory, "user@example.com", "nope").is_err());
        assert!(!state.is_logged_in());

        assert!(
            state
                .login(&directory, "user@example.com", "password123")
                .is_ok()
        );
        assert_eq!(state.current_user().map(|u| u.id.as_str()), Some("u1"));

        assert_eq!(state.logout().map(|u| u.id), Some("u1".to_string()));
        assert!(state.logout().is_none());
    }

    #[test]
    fn test_register_signs_in() {
        let mut directory = AuthDirectory::demo();
        let mut state = AppState::default();

        assert!(
            state
                .register(&mut directory, "Jane", "jane@example.com", "pw")
                .is_ok()
        );
        assert_eq!(
            state.current_user().map(|u| u.email.as_str()),
            Some("jane@example.com")
        );
    }
}
