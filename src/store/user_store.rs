//! Data-access seam between the HTTP layer and the persistent store

use crate::error::Result;
use crate::types::{NewUser, UserId};

/// Write interface for user records.
///
/// Handlers only see this trait through `AppState`, so tests can hand the
/// router a fake that fails or records calls.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Insert one user and return its store-assigned id.
    ///
    /// Returns `Error::EmailTaken` when the store already holds the email and
    /// `Error::Database` for every other store failure.
    async fn create_user(&self, user: NewUser) -> Result<UserId>;
}
