use async_trait::async_trait;
use mongodb::{Client, Database};

use crate::config::target::ConnectionTarget;
use crate::infra::db::connector::Connector;

/// Connector backed by the MongoDB driver.
///
/// The driver connects lazily, so a returned [`Database`] does not prove the
/// server is reachable. Run a command (e.g. `ping`) to find out.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

#[async_trait]
impl Connector for MongoConnector {
    type Handle = Database;
    type Error = mongodb::error::Error;

    async fn connect(&self, target: &ConnectionTarget) -> Result<Database, mongodb::error::Error> {
        let client = Client::with_uri_str(target.mongo_uri()).await?;
        Ok(client.database(target.db_name()))
    }
}
