// tests/common/mod.rs

#![allow(dead_code)] // Not every test binary uses every field.

//! Postgres test databases.
//!
//! One container is started per test binary. Each `TestDb` gets its own freshly
//! migrated database inside it, so tests never see each other's rows.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::OnceCell;
use uuid::Uuid;

const DB_USER: &str = "storefront_test";
const DB_PASSWORD: &str = "storefront_test_password";

struct SharedPostgres {
  // Held so the container lives as long as the test binary.
  _container: ContainerAsync<PostgresImage>,
  host: String,
  port: u16,
}

static POSTGRES: Lazy<OnceCell<SharedPostgres>> = Lazy::new(OnceCell::new);

async fn start_postgres() -> SharedPostgres {
  let container = PostgresImage::default()
    .with_user(DB_USER)
    .with_password(DB_PASSWORD)
    .with_db_name("storefront_test")
    .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
    .start()
    .await
    .expect("Failed to start PostgreSQL container");

  // Resolved once; later tests run on other runtimes and never call the Docker API.
  let port = container
    .get_host_port_ipv4(5432)
    .await
    .expect("Failed to get container port");
  let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

  SharedPostgres {
    _container: container,
    host,
    port,
  }
}

#[derive(Debug, Clone)]
pub struct TestDb {
  pub pool: PgPool,
  pub name: String,
}

impl TestDb {
  /// Creates a uniquely named database and applies the server migrations to it.
  pub async fn new() -> Self {
    let pg = POSTGRES.get_or_init(start_postgres).await;
    let name = format!("storefront_test_{}", Uuid::new_v4().simple());
    let url_for = |db: &str| format!("postgresql://{DB_USER}:{DB_PASSWORD}@{}:{}/{db}", pg.host, pg.port);

    let mut admin = PgConnection::connect(&url_for("postgres"))
      .await
      .expect("Failed to connect to postgres database");
    sqlx::query(&format!("CREATE DATABASE \"{name}\""))
      .execute(&mut admin)
      .await
      .expect("Failed to create test database");
    admin.close().await.expect("Failed to close admin connection");

    let pool = PgPool::connect(&url_for(&name))
      .await
      .expect("Failed to create pool for database");
    sqlx::migrate!("./migrations")
      .run(&pool)
      .await
      .expect("Failed to run migrations on database");

    Self { pool, name }
  }
}
