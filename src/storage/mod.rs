pub mod database;
pub mod seed;

pub use database::{Store, StoreError, StoreResult};
pub use seed::load_or_seed;
