pub mod connection;
pub mod repositories;
pub mod store;

pub use store::{JsonProfileStore, MemoryProfileStore, ProfileStore};
