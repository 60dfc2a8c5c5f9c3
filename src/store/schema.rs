use crate::error::Result;
use sea_orm::ConnectionTrait;

/// Tables read by the roster query, oldest dependency first.
pub const SCHEMA: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS teachers (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS courses (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        teacher_id INTEGER NOT NULL REFERENCES teachers (id)
    )",
    "CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS enrollments (
        course_id INTEGER NOT NULL REFERENCES courses (id),
        student_id INTEGER NOT NULL REFERENCES students (id),
        PRIMARY KEY (course_id, student_id)
    )",
];

/// Create any missing roster tables. Idempotent.
pub async fn create_schema<C: ConnectionTrait>(conn: &C) -> Result<()> {
    for statement in SCHEMA {
        conn.execute_unprepared(statement).await?;
    }
    tracing::debug!(tables = SCHEMA.len(), "Schema ensured");
    Ok(())
}
