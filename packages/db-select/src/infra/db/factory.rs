use tracing::debug;

use crate::config::target::ConnectionTarget;
use crate::infra::db::connector::Connector;

/// Resolves optional port and database name into a [`ConnectionTarget`] and
/// hands it to the wrapped connector.
///
/// Stateless apart from the connector. Each call resolves a fresh target and
/// requests a fresh handle, which is returned to the caller and not kept.
#[derive(Debug, Clone, Default)]
pub struct ConnectionFactory<C> {
    connector: C,
}

impl<C: Connector> ConnectionFactory<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Connect to `localhost:<port>/<db_name>`.
    ///
    /// A missing or zero port becomes 27017, a missing or empty name becomes
    /// `test_1`. Connector errors are returned untouched.
    pub async fn connect(
        &self,
        port: Option<u16>,
        db_name: Option<&str>,
    ) -> Result<C::Handle, C::Error> {
        let target = ConnectionTarget::resolve(port, db_name);

        debug!(
            host = target.host(),
            port = target.port(),
            db_name = target.db_name(),
            "connection target resolved"
        );

        self.connector.connect(&target).await
    }
}
