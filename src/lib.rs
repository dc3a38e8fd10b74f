pub mod actions;
pub mod branch;
pub mod bump;
pub mod config;
pub mod error;
pub mod git;
pub mod logger;
pub mod provider;
pub mod resolver;

pub use error::{AffectedBaseError, Result};
