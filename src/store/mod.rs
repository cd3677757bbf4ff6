//! Storage layer for user records

mod user_store;
mod user_db;

pub use user_store::UserStore;
pub use user_db::SqliteUserStore;
