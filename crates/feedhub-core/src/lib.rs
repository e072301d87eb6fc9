//! Feedhub Core
//!
//! Target-independent building blocks of the Feedhub front-end:
//! - domain: entities and triage enumerations
//! - storage: JSON persistence over a key-value backend
//! - repository: typed read/write access per collection
//! - query / analytics: derived views over collections
//! - api: REST client for the remote service
//! - service: one facade over the local and remote sources of truth

pub mod analytics;
pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod query;
pub mod repository;
pub mod service;
pub mod storage;

pub use config::{Config, DataSource};
pub use error::{Error, Result};
