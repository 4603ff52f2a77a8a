//! Demo sign-in.
//!
//! Accounts are a hard-coded list plus whatever is registered during the
//! current process. Passwords are compared in plain text; this is a demo
//! login, not a credential store.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{Result, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

/// The signed-in user as the rest of the application sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub medical_history: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Account {
    pub user: User,
    password: String,
}

impl Account {
    #[must_use]
    pub const fn new(user: User, password: String) -> Self {
        Self { user, password }
    }
}

#[derive(Debug, Clone)]
pub struct AuthDirectory {
    accounts: Vec<Account>,
}

impl AuthDirectory {
    /// Directory holding the two demo accounts.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            accounts: vec![
                Account::new(
                    User {
                        id: "u1".to_string(),
                        name: "John Doe".to_string(),
                        email: "user@example.com".to_string(),
                        role: UserRole::User,
                        medical_history: vec![
                            "Allergy to peanuts".to_string(),
                            "Asthma".to_string(),
                        ],
                    },
                    "password123".to_string(),
                ),
                Account::new(
                    User {
                        id: "u2".to_string(),
                        name: "Admin User".to_string(),
                        email: "admin@example.com".to_string(),
                        role: UserRole::Admin,
                        medical_history: Vec::new(),
                    },
                    "admin123".to_string(),
                ),
            ],
        }
    }

    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        let Some(account) = self
            .accounts
            .iter()
            .find(|a| a.user.email == email && a.password == password)
        else {
            warn!("Login failed for {email}");
            return Err(StoreError::InvalidCredentials);
        };

        info!("Welcome back, {}!", account.user.name);
        Ok(account.user.clone())
    }

    /// Create an account with the next `u{n}` id and role `user`.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<User> {
        if self.accounts.iter().any(|a| a.user.email == email) {
            return Err(StoreError::EmailTaken(email.to_string()));
        }

        let user = User {
            id: format!("u{}", self.accounts.len() + 1),
            name: name.to_string(),
            email: email.to_string(),
            role: UserRole::User,
            medical_history: Vec::new(),
        };
        self.accounts
            .push(Account::new(user.clone(), password.to_string()));

        info!("Registered account {} for {}", user.id, user.email);
        Ok(user)
    }
}

impl Default for AuthDirectory {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_login() {
        let directory = AuthDirectory::demo();

        let user = directory
            .login("user@example.com", "password123")
            .unwrap_or_else(|e| panic!("demo login should succeed: {e}"));
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.medical_history.len(), 2);

        let admin = directory
            .login("admin@example.com", "admin123")
            .unwrap_or_else(|e| panic!("admin login should succeed: {e}"));
        assert_eq!(admin.role, UserRole::Admin);
    }

    #[test]
    fn test_login_rejects_bad_credentials() {
        let directory = AuthDirectory::demo();
        assert!(matches!(
            directory.login("user@example.com", "wrong"),
            Err(StoreError::InvalidCredentials)
        ));
        assert!(matches!(
            directory.login("nobody@example.com", "password123"),
            Err(StoreError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_register() {
        let mut directory = AuthDirectory::demo();

        let user = directory
            .register("Jane Roe", "jane@example.com", "secret")
            .unwrap_or_else(|e| panic!("registration should succeed: {e}"));
        assert_eq!(user.id, "u3");
        assert_eq!(user.role, UserRole::User);
        assert!(directory.login("jane@example.com", "secret").is_ok());

        assert!(matches!(
            directory.register("Someone", "user@example.com", "x"),
            Err(StoreError::EmailTaken(email)) if email == "user@example.com"
        ));
        assert_eq!(directory.accounts().len(), 3);
    }
}
