pub mod connector;
pub mod factory;
pub mod mongo;

pub use connector::Connector;
pub use factory::ConnectionFactory;
pub use mongo::MongoConnector;
