use anyhow::{Context, Result};
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// DbConnection manages the SQLite pool shared by every repository
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str, max_connections: u32) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url)
                .await
                .with_context(|| format!("Failed to create database at {}", url))?;
        }

        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid database url: {}", url))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to {}", url))?;

        Self::setup_schema(&pool).await?;
        info!("Database ready at {}", url);

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Open a private in-memory database, used by tests
    pub async fn in_memory() -> Result<Self> {
        let db_id = uuid::Uuid::new_v4().simple().to_string();
        let db_url = format!("sqlite:file:memdb_{}?mode=memory&cache=shared", db_id);

        Self::new(&db_url, 5).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS children (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                date_of_birth TEXT
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS caregivers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                full_name TEXT
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS caregiver_children (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                caregiver_id INTEGER NOT NULL,
                child_id INTEGER NOT NULL,
                FOREIGN KEY (caregiver_id) REFERENCES caregivers (id) ON DELETE CASCADE,
                FOREIGN KEY (child_id) REFERENCES children (id) ON DELETE CASCADE
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS symptoms (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT,
                date_logged TEXT NOT NULL,
                child_id INTEGER NOT NULL,
                FOREIGN KEY (child_id) REFERENCES children (id) ON DELETE CASCADE
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                content TEXT,
                child_id INTEGER NOT NULL,
                FOREIGN KEY (child_id) REFERENCES children (id) ON DELETE CASCADE
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS milestones (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT,
                description TEXT,
                child_id INTEGER NOT NULL,
                FOREIGN KEY (child_id) REFERENCES children (id) ON DELETE CASCADE
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS appointments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                location TEXT,
                doctor TEXT,
                date TEXT NOT NULL,
                child_id INTEGER NOT NULL,
                FOREIGN KEY (child_id) REFERENCES children (id) ON DELETE CASCADE
            );
            "#,
            "CREATE INDEX IF NOT EXISTS idx_symptoms_child_id ON symptoms(child_id);",
            "CREATE INDEX IF NOT EXISTS idx_notes_child_id ON notes(child_id);",
            "CREATE INDEX IF NOT EXISTS idx_milestones_child_id ON milestones(child_id);",
            "CREATE INDEX IF NOT EXISTS idx_appointments_child_id ON appointments(child_id);",
            "CREATE INDEX IF NOT EXISTS idx_caregiver_children_child_id ON caregiver_children(child_id);",
            "CREATE INDEX IF NOT EXISTS idx_caregiver_children_caregiver_id ON caregiver_children(caregiver_id);",
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(pool)
                .await
                .context("Failed to set up database schema")?;
        }

        Ok(())
    }
}
