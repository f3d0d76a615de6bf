// Service exports
pub mod media;
pub mod memory;
pub mod postgres;
pub mod store;

pub use media::PictureUrls;
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use store::{EventStore, StoreError};
