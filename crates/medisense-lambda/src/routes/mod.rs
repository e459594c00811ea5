pub mod auth;
pub mod health;
pub mod lexicons;
pub mod reports;
pub mod voice;
