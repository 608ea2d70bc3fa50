//! Typed client SDK for the schema registry system API.
//!
//! The entry point is [`RegistryClient`]; per-endpoint request builders
//! hang off it and delegate transport, retry and deserialization to the
//! shared [`http::HttpAdapter`].

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod system;

pub use client::RegistryClient;
pub use config::Config;
pub use error::ClientError;
pub use models::{ApiError, Limits, SystemInfo};
