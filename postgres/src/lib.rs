//! PostgreSQL request repository for SupportApp.
//!
//! Persists support requests in a single `support_requests` table whose
//! `BIGSERIAL` primary key provides the one-based, never-reused identifier
//! sequence the domain requires.
//!
//! # Example
//!
//! ```no_run
//! use sqlx::PgPool;
//! use support_app_postgres::PostgresRequestRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = PgPool::connect("postgres://localhost/support_app").await?;
//! let repository = PostgresRequestRepository::new(pool);
//! repository.migrate().await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use support_app_core::{RequestError, RequestId, RequestRepository, Result, SupportRequest};

/// PostgreSQL request repository.
#[derive(Clone)]
pub struct PostgresRequestRepository {
    /// PostgreSQL connection pool.
    pool: PgPool,
}

/// Row shape of the `support_requests` table.
#[derive(Debug, sqlx::FromRow)]
struct RequestRow {
    id: i64,
    request_name: String,
    subject: String,
    description: String,
    request_date: DateTime<Utc>,
}

impl From<RequestRow> for SupportRequest {
    fn from(row: RequestRow) -> Self {
        Self {
            id: Some(RequestId::new(row.id)),
            request_name: row.request_name,
            subject: row.subject,
            description: row.description,
            request_date: Some(row.request_date),
        }
    }
}

impl PostgresRequestRepository {
    /// Create a new PostgreSQL request repository.
    ///
    /// # Arguments
    ///
    /// * `pool` - PostgreSQL connection pool
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run database migrations.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Database`] if migrations fail.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations");

        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| RequestError::Database(format!("Migration failed: {e}")))?;

        Ok(())
    }

    async fn insert(&self, request: SupportRequest) -> Result<SupportRequest> {
        let request_date = request.request_date.unwrap_or_else(Utc::now);

        let row = sqlx::query_as::<_, RequestRow>(
            "INSERT INTO support_requests (request_name, subject, description, request_date)
             VALUES ($1, $2, $3, $4)
             RETURNING id, request_name, subject, description, request_date",
        )
        .bind(&request.request_name)
        .bind(&request.subject)
        .bind(&request.description)
        .bind(request_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RequestError::Database(format!("Failed to insert request: {e}")))?;

        Ok(row.into())
    }

    async fn update_row(&self, id: RequestId, request: SupportRequest) -> Result<SupportRequest> {
        let request_date = request.request_date.unwrap_or_else(Utc::now);

        let result = sqlx::query(
            "UPDATE support_requests
             SET request_name = $1, subject = $2, description = $3, request_date = $4
             WHERE id = $5",
        )
        .bind(&request.request_name)
        .bind(&request.subject)
        .bind(&request.description)
        .bind(request_date)
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| RequestError::Database(format!("Failed to update request: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(RequestError::NotFound(id));
        }

        Ok(SupportRequest {
            id: Some(id),
            request_date: Some(request_date),
            ..request
        })
    }
}

#[async_trait]
impl RequestRepository for PostgresRequestRepository {
    async fn find_all(&self) -> Result<Vec<SupportRequest>> {
        let rows = sqlx::query_as::<_, RequestRow>(
            "SELECT id, request_name, subject, description, request_date
             FROM support_requests
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RequestError::Database(format!("Failed to list requests: {e}")))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: RequestId) -> Result<Option<SupportRequest>> {
        let row = sqlx::query_as::<_, RequestRow>(
            "SELECT id, request_name, subject, description, request_date
             FROM support_requests
             WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RequestError::Database(format!("Failed to get request: {e}")))?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, request: SupportRequest) -> Result<SupportRequest> {
        match request.id {
            Some(id) => self.update_row(id, request).await,
            None => self.insert(request).await,
        }
    }

    async fn exists_by_id(&self, id: RequestId) -> Result<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM support_requests WHERE id = $1)")
                .bind(id.as_i64())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| RequestError::Database(format!("Failed to check request: {e}")))?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: RequestId) -> Result<()> {
        sqlx::query("DELETE FROM support_requests WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| RequestError::Database(format!("Failed to delete request: {e}")))?;

        Ok(())
    }
}
