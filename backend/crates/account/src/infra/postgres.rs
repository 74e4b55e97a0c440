//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::{AccountId, ResetId};
use platform::password::PasswordHash;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{AccountStatus, ActivationCode, Email};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> AccountResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                email,
                password_hash,
                status,
                activation_code,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.status.as_str())
        .bind(account.activation_code.as_ref().map(|c| c.as_str()))
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            // Unique index on email backstops the pre-insert check
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                AccountError::EmailTaken
            }
            _ => AccountError::Database(e),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                email,
                password_hash,
                status,
                activation_code,
                created_at,
                updated_at
            FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                email,
                password_hash,
                status,
                activation_code,
                created_at,
                updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn activate_with_code(
        &self,
        account_id: &AccountId,
        code: &ActivationCode,
    ) -> AccountResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE accounts SET
                status = 'active',
                activation_code = NULL,
                updated_at = now()
            WHERE account_id = $1
              AND status = 'pending'
              AND activation_code = $2
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(code.as_str())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn activate_pending(&self, account_id: &AccountId) -> AccountResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE accounts SET
                status = 'active',
                activation_code = NULL,
                updated_at = now()
            WHERE account_id = $1
              AND status = 'pending'
            "#,
        )
        .bind(account_id.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn rotate_activation_code(
        &self,
        account_id: &AccountId,
        code: &ActivationCode,
    ) -> AccountResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE accounts SET
                activation_code = $2,
                updated_at = now()
            WHERE account_id = $1
              AND status = 'pending'
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(code.as_str())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn upsert_reset_marker(&self, account_id: &AccountId) -> AccountResult<ResetId> {
        // One marker per account; a new request rotates the id, killing any
        // previously mailed token.
        let reset_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO account_resets (reset_id, account_id, created_at)
            VALUES (gen_random_uuid(), $1, now())
            ON CONFLICT (account_id)
            DO UPDATE SET reset_id = gen_random_uuid(), created_at = now()
            RETURNING reset_id
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(ResetId::from_uuid(reset_id))
    }

    async fn consume_reset_marker(
        &self,
        reset_id: &ResetId,
        password_hash: &PasswordHash,
    ) -> AccountResult<Option<Email>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, (Uuid, String)>(
            r#"
            UPDATE accounts SET
                password_hash = $2,
                updated_at = now()
            FROM account_resets
            WHERE account_resets.reset_id = $1
              AND accounts.account_id = account_resets.account_id
            RETURNING accounts.account_id, accounts.email
            "#,
        )
        .bind(reset_id.as_uuid())
        .bind(password_hash.as_phc_string())
        .fetch_optional(&mut *tx)
        .await?;

        let Some((account_id, email)) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("DELETE FROM account_resets WHERE account_id = $1")
            .bind(account_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(Email::from_db(email)))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    email: String,
    password_hash: String,
    status: String,
    activation_code: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AccountResult<Account> {
        let password_hash = PasswordHash::from_phc_string(self.password_hash)
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            email: Email::from_db(self.email),
            password_hash,
            status: AccountStatus::from_db(&self.status)?,
            activation_code: self.activation_code.map(ActivationCode::from_db),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
