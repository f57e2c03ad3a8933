//! Connection target resolution and connector plumbing.
//! Used by the select-db CLI.

pub mod config;
pub mod error;
pub mod infra;

pub use config::env::TargetSettings;
pub use config::target::{ConnectionTarget, DEFAULT_DB_NAME, DEFAULT_HOST, DEFAULT_PORT};
pub use error::DbSelectError;
pub use infra::db::{ConnectionFactory, Connector, MongoConnector};
