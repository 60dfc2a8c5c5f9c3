use crate::Injectable;
use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::model::Teacher;
use crate::store::{ScopedConnection, load_roster};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// Every teacher with courses and each course's students, eagerly loaded.
    async fn find_all_with_courses(&self) -> Result<Vec<Teacher>>;
}

/// Reads the roster through sea-orm, one connection per call.
#[derive(Injectable)]
pub struct SeaOrmTeacherRepository {
    config: Arc<DatabaseConfig>,
}

impl SeaOrmTeacherRepository {
    pub fn new(config: Arc<DatabaseConfig>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl TeacherRepository for SeaOrmTeacherRepository {
    async fn find_all_with_courses(&self) -> Result<Vec<Teacher>> {
        let scoped = ScopedConnection::open(&self.config).await?;
        let loaded = load_roster(scoped.conn()).await;
        let released = scoped.release().await;

        let teachers = loaded?;
        if let Err(e) = released {
            // The rows are already in memory
            tracing::warn!(error = %e, "Failed to close roster connection");
        }
        Ok(teachers)
    }
}
