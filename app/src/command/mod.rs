//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`. Shared setup lives in [`AppContext`], which is
//! built once before any command touches the catalog, the responder or the
//! saved state.

use medicart_config::Config;
use medicart_core::{Catalog, Medicine};
use medicart_store::{AppState, StateStore};
use tracing::debug;

mod account;
mod cart;
mod catalog;
mod chat;
mod info;
mod init;
mod version;

pub use account::{
    LoginInput, LoginStrategy, LogoutStrategy, ProfileStrategy, RegisterInput, RegisterStrategy,
};
pub use cart::{CartAction, CartInput, CartStrategy};
pub use catalog::{
    CategoriesStrategy, MedicinesInput, MedicinesStrategy, RecommendInput, RecommendStrategy,
    SymptomsStrategy,
};
pub use chat::{ChatInput, ChatStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
/// - **Extensibility**: Adding new commands requires only implementing this trait
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Everything a command needs, constructed up front.
pub struct AppContext {
    pub config: Config,
    pub catalog: Catalog,
    pub store: StateStore,
}

impl AppContext {
    pub fn init() -> anyhow::Result<Self> {
        let config = Config::load()?;

        let catalog = match &config.catalog.path {
            Some(path) => Catalog::from_json_file(path)?,
            None => Catalog::builtin(),
        };

        let store = StateStore::new(config.state_path()?);
        debug!("State file: {}", store.path().display());

        Ok(Self {
            config,
            catalog,
            store,
        })
    }

    /// Run `f` against the saved state and write it back afterwards.
    ///
    /// The state is saved even when `f` fails, so partial changes made
    /// before the failure are kept, as a UI would keep them.
    pub fn with_state<T>(
        &self,
        f: impl FnOnce(&mut AppState, &Catalog) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let mut state = self.store.load()?;
        let result = f(&mut state, &self.catalog);
        self.store.save(&state)?;
        result
    }

    pub fn lookup_medicine(&self, id: &str) -> anyhow::Result<&Medicine> {
        self.catalog
            .medicine_by_id(id)
            .ok_or_else(|| medicart_store::StoreError::UnknownMedicine(id.to_string()).into())
    }
}

/// One-line listing used by every command that prints medicines.
pub fn medicine_line(medicine: &Medicine) -> String {
    format!(
        "{:<4} {:<14} {:>8}  {:<6} {}",
        medicine.id,
        medicine.name,
        medicine.price,
        medicine.dosage,
        truncate(&medicine.description, 60)
    )
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
        assert_eq!(truncate("°C°C°C°C°C", 5), "°C...");
    }

    #[test]
    fn test_medicine_line_shows_price() {
        let catalog = Catalog::builtin();
        let Some(medicine) = catalog.medicine_by_id("m4") else {
            panic!("m4 should exist");
        };
        let line = medicine_line(medicine);
        assert!(line.starts_with("m4"));
        assert!(line.contains("$12.99"));
    }
}
