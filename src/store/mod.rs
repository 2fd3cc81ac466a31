pub mod blob;
pub mod service;

pub use blob::{BlobClient, BlobEntry, StoreError};
pub use service::PriceStore;
