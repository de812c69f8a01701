mod account;
mod ai;
pub mod api;
mod client;
pub mod config;
mod jobs;
#[cfg(test)]
mod stub;

pub use api::{Error, Result};
pub use client::Client;
pub use config::ClientConfig;
