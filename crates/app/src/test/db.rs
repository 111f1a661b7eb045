//! Per-test databases inside one shared Postgres container

use std::{
    process,
    sync::atomic::{AtomicU64, Ordering},
};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool, query};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};

const USER: &str = "dispensary_test";
const PASSWORD: &str = "dispensary_test_password";
const ADMIN_DATABASE: &str = "postgres";

static CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Databases queued for dropping once their `TestDb` goes away.
static DROP_QUEUE: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

static NEXT_DATABASE: AtomicU64 = AtomicU64::new(0);

/// Only generated names reach `CREATE`/`DROP DATABASE`, which cannot bind identifiers.
fn is_generated_name(name: &str) -> bool {
    name.starts_with("medications_test_")
        && name.len() <= 63
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn next_database_name() -> String {
    format!(
        "medications_test_{}_{}",
        process::id(),
        NEXT_DATABASE.fetch_add(1, Ordering::Relaxed)
    )
}

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name(ADMIN_DATABASE)
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("failed to start postgres container")
}

async fn database_url(database: &str) -> String {
    let container = CONTAINER.get_or_init(start_container).await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("failed to read container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{database}")
}

async fn drop_database(name: &str) -> Result<(), sqlx::Error> {
    if !is_generated_name(name) {
        return Ok(());
    }

    let mut conn = PgConnection::connect(&database_url(ADMIN_DATABASE).await).await?;

    query(&format!("DROP DATABASE IF EXISTS \"{name}\""))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

async fn start_drop_worker() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if let Err(error) = drop_database(&name).await {
                eprintln!("failed to drop test database {name}: {error}");
            }
        }
    });

    sender
}

/// A freshly migrated database owned by one test.
///
/// Service calls commit normally; isolation comes from every test getting its
/// own database, which is dropped in the background when this value is.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(queue) = DROP_QUEUE.get() {
            let _queued = queue.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub async fn new() -> Self {
        DROP_QUEUE.get_or_init(start_drop_worker).await;

        let name = next_database_name();

        let mut admin = PgConnection::connect(&database_url(ADMIN_DATABASE).await)
            .await
            .expect("failed to connect to admin database");

        query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("failed to create test database");

        admin.close().await.expect("failed to close admin connection");

        let pool = PgPool::connect(&database_url(&name).await)
            .await
            .expect("failed to connect to test database");

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("failed to run migrations");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use sqlx::query_scalar;

    use crate::database::Db;

    use super::*;

    const INSERT_PARACETAMOL: &str = "INSERT INTO medications \
        (name, manufacturer, active_ingredient, price, expiration_date) \
        VALUES ('Paracetamol', 'Acme', 'Paracetamol', 9.90, '2026-01-01')";

    #[test]
    fn generated_names_are_safe_identifiers() {
        let first = next_database_name();
        let second = next_database_name();

        assert!(is_generated_name(&first), "{first} should be accepted");
        assert_ne!(first, second);
    }

    #[test]
    fn foreign_names_are_never_dropped() {
        assert!(!is_generated_name("postgres"));
        assert!(!is_generated_name("medications_test_1\"; DROP"));
    }

    #[tokio::test]
    async fn migrations_create_empty_medications_table() {
        let test_db = TestDb::new().await;

        let count: i64 = query_scalar("SELECT COUNT(*) FROM medications")
            .fetch_one(test_db.pool())
            .await
            .expect("medications table should exist");

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn uncommitted_insert_is_invisible_to_other_transactions() {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        let mut writer = db.begin_transaction().await.expect("writer transaction");

        query(INSERT_PARACETAMOL)
            .execute(&mut *writer)
            .await
            .expect("insert inside writer");

        let mut reader = db.begin_transaction().await.expect("reader transaction");

        let before: i64 = query_scalar("SELECT COUNT(*) FROM medications")
            .fetch_one(&mut *reader)
            .await
            .expect("count before commit");

        writer.commit().await.expect("commit writer");

        let after: i64 = query_scalar("SELECT COUNT(*) FROM medications")
            .fetch_one(&mut *reader)
            .await
            .expect("count after commit");

        assert_eq!(before, 0);
        assert_eq!(after, 1, "read committed sees rows committed mid-transaction");
    }
}
