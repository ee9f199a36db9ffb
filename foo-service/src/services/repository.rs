//! Document storage for foo records.
//!
//! [`FooRepository`] is the only way the rest of the service reaches the store.
//! Absence is never an error here: lookups return `Option` or simply omit
//! records, and every `Err` means the store itself misbehaved.

use crate::models::{FooData, FooDocument, FOO_COLLECTION};
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use mongodb::{
    bson::doc, options::ReplaceOptions, Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Single-pass stream of records produced by a multi-get.
pub type FooStream = BoxStream<'static, Result<FooData, AppError>>;

#[async_trait]
pub trait FooRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<FooData>, AppError>;

    /// Records whose id appears in `ids`, in no particular order. Each
    /// matching record is yielded once even if its id is repeated.
    async fn find_all_by_id_in(&self, ids: &[String]) -> Result<FooStream, AppError>;

    /// Inserts or replaces the record with the same id.
    async fn save(&self, record: FooData) -> Result<FooData, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct MongoFooRepository {
    client: MongoClient,
    collection: Collection<FooDocument>,
}

impl MongoFooRepository {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self::new(client, &db))
    }

    pub fn new(client: MongoClient, db: &Database) -> Self {
        Self {
            client,
            collection: db.collection(FOO_COLLECTION),
        }
    }
}

#[async_trait]
impl FooRepository for MongoFooRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<FooData>, AppError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(foo_id = %id, "Failed to find foo record: {}", e);
                AppError::from(e)
            })?;

        Ok(document.map(FooData::from))
    }

    async fn find_all_by_id_in(&self, ids: &[String]) -> Result<FooStream, AppError> {
        if ids.is_empty() {
            return Ok(stream::empty().boxed());
        }

        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids } }, None)
            .await
            .map_err(|e| {
                tracing::error!(requested = ids.len(), "Failed to query foo records: {}", e);
                AppError::from(e)
            })?;

        Ok(cursor
            .map_ok(FooData::from)
            .map_err(|e| {
                tracing::error!("Failed to read foo record from cursor: {}", e);
                AppError::from(e)
            })
            .boxed())
    }

    async fn save(&self, record: FooData) -> Result<FooData, AppError> {
        let document = FooDocument::from(record);
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(doc! { "_id": document.id.clone() }, &document, options)
            .await
            .map_err(|e| {
                tracing::error!(foo_id = %document.id, "Failed to save foo record: {}", e);
                AppError::from(e)
            })?;

        Ok(FooData::from(document))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }
}

/// Process-local store for dev runs without MongoDB and for tests.
#[derive(Default)]
pub struct InMemoryFooRepository {
    records: RwLock<BTreeMap<String, FooData>>,
    multi_get_count: AtomicU64,
}

impl InMemoryFooRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = FooData>) -> Self {
        let repository = Self::new();
        if let Ok(mut map) = repository.records.write() {
            map.extend(records.into_iter().map(|r| (r.id.clone(), r)));
        }
        repository
    }

    /// Number of `find_all_by_id_in` calls served so far.
    pub fn multi_get_count(&self) -> u64 {
        self.multi_get_count.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> AppError {
    AppError::DatabaseError(anyhow::anyhow!("In-memory store lock poisoned: {}", e))
}

#[async_trait]
impl FooRepository for InMemoryFooRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<FooData>, AppError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(id).cloned())
    }

    async fn find_all_by_id_in(&self, ids: &[String]) -> Result<FooStream, AppError> {
        self.multi_get_count.fetch_add(1, Ordering::SeqCst);

        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let matches: Vec<FooData> = self
            .records
            .read()
            .map_err(poisoned)?
            .values()
            .filter(|r| wanted.contains(r.id.as_str()))
            .cloned()
            .collect();

        Ok(stream::iter(matches.into_iter().map(Ok)).boxed())
    }

    async fn save(&self, record: FooData) -> Result<FooData, AppError> {
        self.records
            .write()
            .map_err(poisoned)?
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        let _records = self.records.read().map_err(poisoned)?;
        Ok(())
    }
}
