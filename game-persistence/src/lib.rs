pub mod config;
pub mod connection;
pub mod entities;
pub mod repositories;
pub mod sqlite_store;

pub use config::PersistenceConfig;
pub use connection::{connect_to_database, connect_to_memory_database};
pub use repositories::BlobRepository;
pub use sqlite_store::SqliteBlobStore;
