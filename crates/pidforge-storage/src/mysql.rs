use async_trait::async_trait;
use jiff::Timestamp;
use pidforge_core::store::{Store, StoreResult, StoreTx};
use pidforge_core::{Pid, PidKind, StoreError};
use sqlx::{MySql, MySqlPool, Row, Transaction};

/// MySQL implementation of the store contract.
///
/// The seed row is read with `SELECT ... FOR UPDATE`, so two concurrent
/// mints of the same kind serialize on the backend's row lock. The engine
/// holds no process-local lock, and multiple service instances can share
/// one database.
///
/// `minted.created` holds epoch microseconds; conversion to and from
/// `jiff::Timestamp` happens at this boundary.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Creates a store from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a store by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StoreError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StoreError::InvalidData(message),
        _ => StoreError::Query(message),
    }
}

fn decode_created(micros: i64) -> StoreResult<Timestamp> {
    Timestamp::from_microsecond(micros)
        .map_err(|e| StoreError::InvalidData(format!("invalid created timestamp '{micros}': {e}")))
}

/// Open transaction over a [`MySqlStore`]. Dropping it without commit rolls
/// the underlying sqlx transaction back.
pub struct MySqlStoreTx {
    tx: Transaction<'static, MySql>,
}

#[async_trait]
impl Store for MySqlStore {
    type Tx = MySqlStoreTx;

    async fn begin(&self) -> StoreResult<Self::Tx> {
        let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        Ok(MySqlStoreTx { tx })
    }

    async fn has_pid(&self, kind: PidKind, pid: &Pid) -> StoreResult<bool> {
        let row = sqlx::query(
            r#"
            SELECT 1
            FROM minted
            WHERE type = ? AND value = ?
            LIMIT 1
            "#,
        )
        .bind(kind.as_str())
        .bind(pid.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.is_some())
    }
}

#[async_trait]
impl StoreTx for MySqlStoreTx {
    async fn seed(&mut self, kind: PidKind) -> StoreResult<Option<u64>> {
        let row = sqlx::query(
            r#"
            SELECT value
            FROM seed
            WHERE type = ?
            FOR UPDATE
            "#,
        )
        .bind(kind.as_str())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        row.map(|row| row.try_get::<u64, _>("value").map_err(map_sqlx_error))
            .transpose()
    }

    async fn init_seed(&mut self, kind: PidKind, value: u64) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO seed (type, value)
            VALUES (?, ?)
            "#,
        )
        .bind(kind.as_str())
        .bind(value)
        .execute(&mut *self.tx)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => Err(StoreError::Conflict(kind.to_string())),
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn set_seed(&mut self, kind: PidKind, value: u64) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE seed
            SET value = ?
            WHERE type = ?
            "#,
        )
        .bind(value)
        .bind(kind.as_str())
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::InvalidData(format!(
                "no seed row to update for kind {kind}"
            )));
        }
        Ok(())
    }

    async fn minted_at(&mut self, kind: PidKind, pid: &Pid) -> StoreResult<Option<Timestamp>> {
        let row = sqlx::query(
            r#"
            SELECT created
            FROM minted
            WHERE type = ? AND value = ?
            LIMIT 1
            "#,
        )
        .bind(kind.as_str())
        .bind(pid.as_str())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let micros: i64 = row.try_get("created").map_err(map_sqlx_error)?;
        decode_created(micros).map(Some)
    }

    async fn add_pid(&mut self, kind: PidKind, pid: &Pid, created: Timestamp) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO minted (type, value, created)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(kind.as_str())
        .bind(pid.as_str())
        .bind(created.as_microsecond())
        .execute(&mut *self.tx)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => Err(StoreError::Conflict(pid.to_string())),
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn commit(self) -> StoreResult<()> {
        self.tx.commit().await.map_err(map_sqlx_error)
    }
}
