/// This module contains the macros used in the crate.
#[macro_use]
mod macros;

/// This module contains the query templating engine.
pub mod db;

/// This module contains the prelude for the crate.
pub mod prelude;

/// This module contains the argument values accepted by templates.
pub mod types;

pub mod config;
mod error;
mod utils;

pub use config::Config;
pub use db::query::builder::{build, QueryBuilder};
pub use db::{skip, SKIP};
pub use error::{Error, Result};
pub use types::Value;

use db::query::Syntax;
use tracing::{debug, error};

pub type Connection = sqlx::Pool<sqlx::Any>;

/// Represents a database.
///
/// It owns the connection pool handed to the code that runs queries, and builds those queries
/// from templates. It never executes them itself.
pub struct Database {
    pub conn: Connection,
    builder: QueryBuilder,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::connect(&Config::new(database_url)).await
    }

    /// Connects with the settings found in the environment, see [`Config::from_env`].
    pub async fn from_env() -> Result<Self> {
        Self::connect(&Config::from_env()?).await
    }

    pub async fn connect(config: &Config) -> Result<Self> {
        sqlx::any::install_default_drivers();
        let conn = sqlx::any::AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        debug!(
            max_connections = config.max_connections,
            "Connected database pool"
        );
        Ok(Self::from_pool(conn))
    }

    pub fn from_pool(conn: Connection) -> Self {
        Self {
            conn,
            builder: QueryBuilder::new(),
        }
    }

    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.builder = QueryBuilder::with_syntax(syntax);
        self
    }

    pub fn builder(&self) -> &QueryBuilder {
        &self.builder
    }

    /// Builds a literal query from `template`, see [`QueryBuilder::build`].
    pub fn build_query<I>(&self, template: &str, args: I) -> Result<String>
    where
        I: IntoIterator<Item = Value>,
    {
        match self.builder.build(template, args) {
            Ok(query) => {
                log_query(&query);
                Ok(query)
            }
            Err(e) => {
                error!("Failed to build query from template {template:?}: {e}");
                Err(e)
            }
        }
    }

    /// The sentinel argument: omits its placeholder and the conditional block around it.
    pub fn skip(&self) -> Value {
        skip()
    }
}

fn log_query(query: &str) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    #[cfg(debug_assertions)]
    {
        let formatted_sql = sqlformat::format(
            query,
            &sqlformat::QueryParams::None,
            &sqlformat::FormatOptions::default(),
        );
        debug!("Built query:\n{formatted_sql}");
    }

    #[cfg(not(debug_assertions))]
    debug!("Built query: {query}");
}
