pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub use client::{GithubApi, GithubClient, fetch_snapshot, validate_username};
pub use error::FetchError;
pub use models::*;
