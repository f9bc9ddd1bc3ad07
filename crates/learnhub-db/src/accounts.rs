//! Read-only view of the `students` table used by the request gate.

use async_trait::async_trait;
use learnhub_auth::IdentityId;
use sqlx::PgPool;
use thiserror::Error;
use tracing::instrument;

/// Whether a student account is allowed to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Inactive,
    /// No row for this id.
    Unknown,
}

impl AccountStatus {
    /// `is_active` is nullable; only an explicit `false` deactivates.
    pub fn from_row(row: Option<Option<bool>>) -> Self {
        match row {
            None => AccountStatus::Unknown,
            Some(Some(false)) => AccountStatus::Inactive,
            Some(_) => AccountStatus::Active,
        }
    }
}

#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("account lookup failed: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn account_status(&self, id: &IdentityId) -> Result<AccountStatus, AccountStoreError>;
}

#[derive(Clone, Debug)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    #[instrument(skip(self), fields(db.system = "postgresql", db.sql.table = "students"))]
    async fn account_status(&self, id: &IdentityId) -> Result<AccountStatus, AccountStoreError> {
        let row: Option<Option<bool>> = match id {
            IdentityId::Int(id) => {
                sqlx::query_scalar::<_, Option<bool>>("SELECT is_active FROM students WHERE id = $1")
                    .bind(*id)
                    .fetch_optional(&self.pool)
                    .await?
            }
            // Non-numeric ids are matched on the key's text form so uuid and
            // varchar keys work without knowing the column type.
            IdentityId::Text(id) => {
                sqlx::query_scalar::<_, Option<bool>>("SELECT is_active FROM students WHERE id::text = $1")
                    .bind(id.as_str())
                    .fetch_optional(&self.pool)
                    .await?
            }
        };

        Ok(AccountStatus::from_row(row))
    }
}
