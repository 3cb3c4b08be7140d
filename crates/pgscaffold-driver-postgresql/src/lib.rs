mod queries;

use pgscaffold_core::{
    async_trait,
    catalog::{Catalog, ColumnRow, ConstraintRow, IndexRow, TableRow},
    Error, Result,
};
use std::str::FromStr;
use tokio_postgres::{tls::MakeTlsConnect, Client, Config, Row, Socket};
use tracing::debug;
use url::Url;

/// A [`Catalog`] backed by a live PostgreSQL connection.
#[derive(Debug)]
pub struct PostgreSQL {
    /// The PostgreSQL client.
    client: Client,
}

impl PostgreSQL {
    /// Wraps an already connected client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connects using either a `postgres://` URL or a libpq key/value string
    /// such as `host=localhost user=app dbname=app`.
    pub async fn connect(conn_str: &str) -> Result<Self> {
        let config = parse_config(conn_str)?;
        Self::connect_with_config(config, tokio_postgres::NoTls).await
    }

    /// Connects to a PostgreSQL database using a [`tokio_postgres::Config`].
    pub async fn connect_with_config<T>(config: Config, tls: T) -> Result<Self>
    where
        T: MakeTlsConnect<Socket> + 'static,
        T::Stream: Send,
    {
        let (client, connection) = config.connect(tls).await.map_err(Error::connectivity)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("connection error: {e}");
            }
        });

        Ok(Self::new(client))
    }
}

impl From<Client> for PostgreSQL {
    fn from(client: Client) -> Self {
        Self { client }
    }
}

/// Builds a client config from a connection string.
fn parse_config(conn_str: &str) -> Result<Config> {
    let conn_str = conn_str.trim();

    if !conn_str.contains("://") {
        return Config::from_str(conn_str)
            .map_err(|e| Error::invalid_connection_url(format!("{e}")));
    }

    let url = Url::parse(conn_str).map_err(|e| Error::invalid_connection_url(format!("{e}")))?;

    if !matches!(url.scheme(), "postgres" | "postgresql") {
        return Err(Error::invalid_connection_url(format!(
            "scheme must be `postgres` or `postgresql`, got `{}`",
            url.scheme()
        )));
    }

    let host = url
        .host_str()
        .ok_or_else(|| Error::invalid_connection_url("missing host"))?;

    let dbname = url.path().trim_start_matches('/');
    if dbname.is_empty() {
        return Err(Error::invalid_connection_url(
            "no database specified - missing path",
        ));
    }

    let mut config = Config::new();
    config.host(host);
    config.dbname(dbname);

    if let Some(port) = url.port() {
        config.port(port);
    }

    if !url.username().is_empty() {
        config.user(url.username());
    }

    if let Some(password) = url.password() {
        config.password(password);
    }

    for (key, value) in url.query_pairs() {
        if key == "application_name" {
            config.application_name(&*value);
        }
    }

    Ok(config)
}

#[async_trait]
impl Catalog for PostgreSQL {
    async fn ping(&self) -> Result<()> {
        self.client
            .simple_query("SELECT 1")
            .await
            .map_err(Error::connectivity)?;
        Ok(())
    }

    async fn tables(&self, schema: &str, include_views: bool) -> Result<Vec<TableRow>> {
        debug!(schema, include_views, "querying tables");

        let rows = self
            .client
            .query(queries::TABLES, &[&schema, &include_views])
            .await
            .map_err(Error::query)?;

        rows.iter()
            .map(|row| {
                Ok(TableRow {
                    name: get(row, 0)?,
                    table_type: get(row, 1)?,
                    is_insertable_into: get::<Option<String>>(row, 2)?.unwrap_or_default(),
                    comment: get(row, 3)?,
                })
            })
            .collect()
    }

    async fn columns(&self, schema: &str, table: &str) -> Result<Vec<ColumnRow>> {
        debug!(schema, table, "querying columns");

        let rows = self
            .client
            .query(queries::COLUMNS, &[&schema, &table])
            .await
            .map_err(Error::query)?;

        rows.iter()
            .map(|row| {
                Ok(ColumnRow {
                    position: get(row, 0)?,
                    name: get(row, 1)?,
                    is_nullable: get(row, 2)?,
                    data_type: get(row, 3)?,
                    max_len: get(row, 4)?,
                    default: get(row, 5)?,
                    numeric_precision: get(row, 6)?,
                    comment: get(row, 7)?,
                })
            })
            .collect()
    }

    async fn constraints(&self, schema: &str, table: &str) -> Result<Vec<ConstraintRow>> {
        debug!(schema, table, "querying constraints");

        let rows = self
            .client
            .query(queries::CONSTRAINTS, &[&schema, &table])
            .await
            .map_err(Error::query)?;

        rows.iter()
            .map(|row| {
                Ok(ConstraintRow {
                    name: get(row, 0)?,
                    column_name: get(row, 1)?,
                    constraint_type: get(row, 2)?,
                    ref_table: get(row, 3)?,
                    ref_column: get(row, 4)?,
                })
            })
            .collect()
    }

    async fn indexes(&self, schema: &str, table: &str) -> Result<Vec<IndexRow>> {
        debug!(schema, table, "querying indexes");

        let rows = self
            .client
            .query(queries::INDEXES, &[&schema, &table])
            .await
            .map_err(Error::query)?;

        rows.iter()
            .map(|row| {
                Ok(IndexRow {
                    name: get(row, 0)?,
                    key: get(row, 1)?,
                    is_primary: get(row, 2)?,
                    is_unique: get(row, 3)?,
                })
            })
            .collect()
    }
}

fn get<'a, T>(row: &'a Row, idx: usize) -> Result<T>
where
    T: tokio_postgres::types::FromSql<'a>,
{
    row.try_get(idx).map_err(Error::query)
}
