//! medisense-storage
//!
//! S3 helpers, the saved-analysis store, the expiring key-value store and
//! the one-time-code and session services built on top of it.

pub mod client;
pub mod error;
pub mod expiring;
pub mod objects;
pub mod otp;
pub mod persistence;
pub mod session;
pub mod state;
