#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Shopper state that outlives a single command.
//!
//! Everything a screen may mutate lives in one [`AppState`] value that is
//! handed to collaborators by reference. [`StateStore`] loads it once at
//! startup and saves it once at shutdown; nothing is written implicitly.

mod auth;
mod cart;
mod error;
mod profile;
mod state;

pub use auth::{Account, AuthDirectory, User, UserRole};
pub use cart::{Cart, CartItem, OrderReceipt};
pub use error::{Result, StoreError};
pub use profile::{Order, OrderItem, OrderLine, OrderStatus, order_history, order_lines};
pub use state::{AppState, StateStore};
