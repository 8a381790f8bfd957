//! Vector search domain types and the store trait

pub mod document;
pub mod store;

pub use document::{RetrievedDocument, SearchParams};
pub use store::VectorSearchStore;

#[cfg(test)]
pub use store::mock::MockVectorSearchStore;
