/// Database model definitions.
pub mod models;
/// Score log storage and retrieval operations.
pub mod score_store;
/// Storage abstraction layer for database operations.
pub mod storage;
