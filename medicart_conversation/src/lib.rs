#![warn(
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

//! Chat with the rule-based doctor.
//!
//! The responder itself is stateless; this crate owns the transcript and the
//! presentation details around it, such as the simulated typing pause.
//!
//! # Key Features
//! - Transcript that opens with the doctor's greeting
//! - Configurable typing delay (randomised within a range, or disabled)
//! - Interactive stdin/stdout loop

mod manager;
mod session;

pub use manager::{ConversationConfig, ConversationError, ConversationManager, TurnResult};
pub use session::ChatSession;
