use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{options::ClientOptions, Client, Collection};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::{Config, RowStoreConfig};
use crate::error::StoreError;
use crate::models::records::{FullTextRecord, SummaryRecord};

pub const DATABASE_NAME: &str = "blogs";
pub const FULLTEXT_COLLECTION: &str = "fulltexts";
pub const SUMMARY_TABLE: &str = "summaries";

#[async_trait]
pub trait FullTextStore: Send + Sync {
    async fn insert_full_text(&self, record: &FullTextRecord) -> Result<(), StoreError>;

    async fn close(&self) {}
}

#[async_trait]
pub trait SummaryStore: Send + Sync {
    async fn insert_summary(&self, record: &SummaryRecord) -> Result<(), StoreError>;

    async fn close(&self) {}
}

pub struct MongoFullTextStore {
    client: Client,
}

impl MongoFullTextStore {
    pub async fn connect(uri: &str) -> Result<Self, StoreError> {
        let options = ClientOptions::parse(uri).await?;
        let client = Client::with_options(options)?;
        Ok(Self { client })
    }

    fn full_texts(&self) -> Collection<FullTextRecord> {
        self.client
            .database(DATABASE_NAME)
            .collection(FULLTEXT_COLLECTION)
    }
}

#[async_trait]
impl FullTextStore for MongoFullTextStore {
    async fn insert_full_text(&self, record: &FullTextRecord) -> Result<(), StoreError> {
        self.full_texts().insert_one(record).await?;
        Ok(())
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
    }
}

/// PostgREST-style insert, as exposed by Supabase at `{url}/rest/v1/{table}`.
pub struct RestSummaryStore {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl RestSummaryStore {
    pub fn new(url: &str, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/rest/v1/{SUMMARY_TABLE}", url.trim_end_matches('/')),
            api_key,
        }
    }
}

#[async_trait]
impl SummaryStore for RestSummaryStore {
    async fn insert_summary(&self, record: &SummaryRecord) -> Result<(), StoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected(format!("{status}: {body}")));
        }

        Ok(())
    }
}

pub struct PgSummaryStore {
    pool: PgPool,
}

impl PgSummaryStore {
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
        ensure_table(&pool).await?;
        Ok(Self { pool })
    }
}

async fn ensure_table(pool: &PgPool) -> Result<(), StoreError> {
    const SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS summaries (
      id     bigserial PRIMARY KEY,
      "time" text NOT NULL,
      text   text NOT NULL
    )
    "#;

    sqlx::query(SQL).execute(pool).await?;
    Ok(())
}

#[async_trait]
impl SummaryStore for PgSummaryStore {
    async fn insert_summary(&self, record: &SummaryRecord) -> Result<(), StoreError> {
        sqlx::query(r#"INSERT INTO summaries ("time", text) VALUES ($1, $2)"#)
            .bind(&record.time)
            .bind(&record.text)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// Opens both stores. Called once at startup; `close` both on shutdown.
pub async fn init_stores(
    config: &Config,
) -> Result<(Arc<dyn FullTextStore>, Arc<dyn SummaryStore>), StoreError> {
    let full_texts = Arc::new(MongoFullTextStore::connect(&config.mongodb_uri).await?);

    let summaries: Arc<dyn SummaryStore> = match &config.row_store {
        RowStoreConfig::Rest { url, api_key } => {
            Arc::new(RestSummaryStore::new(url, api_key.clone()))
        }
        RowStoreConfig::Postgres { url } => Arc::new(PgSummaryStore::connect(url).await?),
    };

    Ok((full_texts, summaries))
}
