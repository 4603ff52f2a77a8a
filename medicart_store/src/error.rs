use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Unknown medicine: {0}")]
    UnknownMedicine(String),

    #[error("Medicine {0} is not in the cart")]
    NotInCart(String),

    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Please enter your delivery address")]
    AddressRequired,

    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,

    #[error("This email is already registered: {0}. Try logging in instead.")]
    EmailTaken(String),

    #[error("You are not signed in")]
    NotSignedIn,
}
