//! Database Test Utilities
//!
//! Integration tests get a PostgreSQL pool from `TEST_DATABASE_URL` when it is
//! set, otherwise from a throwaway container. When neither is available the
//! helpers return `None` and the test is expected to skip itself.
//!
//! Schema setup is left to the caller (`infra_db::run_migrations`), so this
//! crate does not depend on the adapters under test.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

/// Environment variable naming an existing test database
pub const TEST_DATABASE_URL_ENV: &str = "TEST_DATABASE_URL";

const POSTGRES_IMAGE: &str = "postgres";
const POSTGRES_TAG: &str = "16-alpine";
const POSTGRES_USER: &str = "test_user";
const POSTGRES_PASSWORD: &str = "test_password";
const POSTGRES_DB: &str = "car_insurance_test";

pub type TestResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Configuration for a containerized test database
#[derive(Debug, Clone)]
pub struct TestDatabaseConfig {
    pub user: String,
    pub password: String,
    pub database: String,
    pub host: String,
    pub port: u16,
}

impl Default for TestDatabaseConfig {
    fn default() -> Self {
        Self {
            user: POSTGRES_USER.to_string(),
            password: POSTGRES_PASSWORD.to_string(),
            database: POSTGRES_DB.to_string(),
            host: "localhost".to_string(),
            port: 5432,
        }
    }
}

impl TestDatabaseConfig {
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

/// A PostgreSQL database for one test run
pub struct TestDatabase {
    _container: Option<ContainerAsync<GenericImage>>,
    pub url: String,
    pub pool: PgPool,
}

impl TestDatabase {
    /// Connects to `TEST_DATABASE_URL`, or starts a container
    pub async fn start() -> TestResult<Self> {
        match std::env::var(TEST_DATABASE_URL_ENV) {
            Ok(url) => {
                let pool = connect(&url).await?;
                Ok(Self {
                    _container: None,
                    url,
                    pool,
                })
            }
            Err(_) => Self::start_container().await,
        }
    }

    /// Like [`TestDatabase::start`], but logs and returns `None` on failure
    pub async fn try_start() -> Option<Self> {
        match Self::start().await {
            Ok(db) => Some(db),
            Err(e) => {
                eprintln!("Skipping database test, no PostgreSQL available: {}", e);
                None
            }
        }
    }

    async fn start_container() -> TestResult<Self> {
        let container = GenericImage::new(POSTGRES_IMAGE, POSTGRES_TAG)
            .with_exposed_port(5432.tcp())
            .with_wait_for(WaitFor::message_on_stderr(
                "database system is ready to accept connections",
            ))
            .with_env_var("POSTGRES_USER", POSTGRES_USER)
            .with_env_var("POSTGRES_PASSWORD", POSTGRES_PASSWORD)
            .with_env_var("POSTGRES_DB", POSTGRES_DB)
            .start()
            .await?;

        let config = TestDatabaseConfig {
            host: container.get_host().await?.to_string(),
            port: container.get_host_port_ipv4(5432).await?,
            ..TestDatabaseConfig::default()
        };
        let url = config.connection_url();
        let pool = connect(&url).await?;

        Ok(Self {
            _container: Some(container),
            url,
            pool,
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

async fn connect(url: &str) -> TestResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect(url)
        .await?;
    Ok(pool)
}

static SHARED_TEST_DB: tokio::sync::OnceCell<Option<Arc<TestDatabase>>> =
    tokio::sync::OnceCell::const_new();

/// One database shared by every test in the binary, started on first use
pub async fn shared_test_database() -> Option<Arc<TestDatabase>> {
    SHARED_TEST_DB
        .get_or_init(|| async { TestDatabase::try_start().await.map(Arc::new) })
        .await
        .clone()
}
