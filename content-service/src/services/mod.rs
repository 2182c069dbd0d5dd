pub mod content;
pub mod database;
pub mod memory;
pub mod metrics;
pub mod transform;

pub use content::{fetch_recent, Fetched};
pub use database::{
    CollectionHandle, DocumentStore, FindOptions, FindQuery, MongoDb, SortDirection, StoreHandle,
};
pub use memory::MemoryStore;
pub use self::metrics::{get_metrics, init_metrics, record_degraded};
pub use transform::{project, to_public};
