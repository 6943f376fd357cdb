use sqlx::{migrate::Migrator, sqlite::SqliteConnectOptions, SqlitePool};

mod feedback;
pub mod models;

#[cfg(test)]
mod tests;

const FEEDBACK_TABLE: &str = "feedback";
const PENDING_FEEDBACK_TABLE: &str = "pending_feedback";

static MIGRATOR: Migrator = sqlx::migrate!();

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to run query: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone)]
pub struct DB {
    pool: SqlitePool,
}

impl DB {
    pub async fn init(path: &str) -> Result<Self> {
        let pool = SqlitePool::connect_with(SqliteConnectOptions::new().filename(path).create_if_missing(true)).await?;

        MIGRATOR.run(&pool).await?;
        log::debug!("migrations applied to {path}");

        Ok(Self { pool })
    }
}

// Stats
impl DB {
    /// Aggregate counts over all stored feedback. Computed on every call
    pub async fn get_feedback_stats(&self) -> Result<models::Stats> {
        log::debug!("select feedback stats");
        Ok(sqlx::query_as::<_, models::Stats>(&format!(
            "select count(*) as total,
                    count(case when kind = ? then 1 end) as likes,
                    count(case when kind = ? then 1 end) as improvements
             from {FEEDBACK_TABLE}"
        ))
        .bind(models::FeedbackKind::Like)
        .bind(models::FeedbackKind::Improvement)
        .fetch_one(&self.pool)
        .await?)
    }
}
