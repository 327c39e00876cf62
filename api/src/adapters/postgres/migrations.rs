//! PostgreSQL schema migrations
//!
//! Migrations are embedded in the binary and applied in ascending version
//! order. Each applied version is recorded in `schema_migrations`, so running
//! the migrator again only applies what is new.

use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, Statement, TransactionTrait, Value,
};

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: i64,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        sql: include_str!("../../../migrations/0001_create_pos.sql"),
    },
    Migration {
        version: 2,
        sql: include_str!("../../../migrations/0002_create_users.sql"),
    },
];

const CREATE_VERSION_TABLE: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version    BIGINT PRIMARY KEY,
    applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// Latest migration version known by this binary
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Apply all pending migrations, returning how many ran
pub async fn run_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    db.execute_unprepared(CREATE_VERSION_TABLE).await?;

    let current = current_version(db).await?;
    let pending: Vec<&Migration> = MIGRATIONS
        .iter()
        .filter(|migration| migration.version > current)
        .collect();

    if pending.is_empty() {
        tracing::debug!("Schema is up to date at version {}", current);
        return Ok(0);
    }

    let backend = db.get_database_backend();
    let tx = db.begin().await?;
    for migration in &pending {
        tracing::info!("Applying schema migration {}", migration.version);
        tx.execute_unprepared(migration.sql).await?;
        tx.execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO schema_migrations (version) VALUES ($1)",
            [Value::from(migration.version)],
        ))
        .await?;
    }
    tx.commit().await?;

    Ok(pending.len())
}

async fn current_version(db: &DatabaseConnection) -> Result<i64, DbErr> {
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT COALESCE(MAX(version), 0) AS version FROM schema_migrations",
        ))
        .await?;

    match row {
        Some(row) => row.try_get("", "version"),
        None => Ok(0),
    }
}
