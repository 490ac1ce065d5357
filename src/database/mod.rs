pub mod db;
pub mod memory_store;
pub mod mongo_store;
pub mod store;

pub use db::connect_to_mongo;
pub use memory_store::MemoryStore;
pub use mongo_store::MongoStore;
pub use store::{PostStore, ProfileStore, StoreError};
