use std::fmt;

/// Host used for every connection target.
pub const DEFAULT_HOST: &str = "localhost";

/// Port used when none is given, or when the given port is zero.
pub const DEFAULT_PORT: u16 = 27017;

/// Database used when none is given, or when the given name is empty.
pub const DEFAULT_DB_NAME: &str = "test_1";

/// Resolved `host:port/db_name` triple handed to a connector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionTarget {
    host: String,
    port: u16,
    db_name: String,
}

impl ConnectionTarget {
    /// Apply the defaults to the optional inputs.
    ///
    /// Zero and the empty string count as absent, so an explicit port `0`
    /// resolves to [`DEFAULT_PORT`]. The name is otherwise used verbatim.
    pub fn resolve(port: Option<u16>, db_name: Option<&str>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: resolve_port(port),
            db_name: resolve_db_name(db_name).to_string(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    /// Server address without the database segment, e.g. `localhost:27017`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Driver URI for the server. The database is selected on the client,
    /// not in the URI path.
    pub fn mongo_uri(&self) -> String {
        format!("mongodb://{}", self.address())
    }
}

impl Default for ConnectionTarget {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.host, self.port, self.db_name)
    }
}

fn resolve_port(port: Option<u16>) -> u16 {
    port.filter(|p| *p != 0).unwrap_or(DEFAULT_PORT)
}

fn resolve_db_name(db_name: Option<&str>) -> &str {
    db_name.filter(|name| !name.is_empty()).unwrap_or(DEFAULT_DB_NAME)
}
