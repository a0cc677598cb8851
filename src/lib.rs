pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod render;

pub use error::{Error, Result};
