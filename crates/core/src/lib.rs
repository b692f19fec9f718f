//! Core types for the product catalog API.
//!
//! Holds the catalog snapshot and the query processor shared by the HTTP
//! server and the CLI.

mod catalog;
mod constants;
mod env_config;
mod error;
mod product;
mod query;

pub use catalog::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use product::*;
pub use query::*;
