pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod requests;
pub mod responses;

pub use auth::PersonalAccessToken;
pub use client::{Authentication, GhClient};
pub use config::ClientConfig;
pub use error::Error;
