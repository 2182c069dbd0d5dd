use crate::config::DatabaseConfig;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{options::FindOptions as MongoFindOptions, Client as MongoClient, Database};
use service_core::error::AppError;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_i32(self) -> i32 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

/// Cursor modifiers applied to a `find`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindOptions {
    pub sort: Option<(String, SortDirection)>,
    /// Non-positive values mean no limit.
    pub limit: Option<i64>,
}

/// Read access to a document database.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    fn name(&self) -> &str;

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        options: FindOptions,
    ) -> Result<Vec<Document>, AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

/// The database as resolved once at startup.
///
/// Anything other than `Ready` means there is nothing to query; callers
/// treat that as an answer, not as an error.
#[derive(Clone)]
pub enum StoreHandle {
    /// No connection string configured.
    Disabled,
    /// Connection string present, database name missing.
    Uninitialized,
    /// The client could not be built from the configuration.
    Failed(String),
    Ready(Arc<dyn DocumentStore>),
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreHandle::Disabled => f.write_str("Disabled"),
            StoreHandle::Uninitialized => f.write_str("Uninitialized"),
            StoreHandle::Failed(reason) => f.debug_tuple("Failed").field(reason).finish(),
            StoreHandle::Ready(store) => f.debug_tuple("Ready").field(&store.name()).finish(),
        }
    }
}

impl StoreHandle {
    pub async fn connect(config: &DatabaseConfig) -> Self {
        let (Some(uri), Some(name)) = (config.url.as_deref(), config.name.as_deref()) else {
            if config.url_is_set() {
                tracing::warn!(
                    "{} is set but {} is not; document store left uninitialized",
                    DatabaseConfig::URL_VAR,
                    DatabaseConfig::NAME_VAR
                );
                return StoreHandle::Uninitialized;
            }
            tracing::info!(
                "{} not set; content endpoints will answer with empty lists",
                DatabaseConfig::URL_VAR
            );
            return StoreHandle::Disabled;
        };

        match MongoDb::connect(uri, name).await {
            Ok(db) => StoreHandle::Ready(Arc::new(db)),
            Err(e) => {
                tracing::error!(error = %e, "Document store unavailable");
                StoreHandle::Failed(e.to_string())
            }
        }
    }

    pub fn ready(store: impl DocumentStore + 'static) -> Self {
        StoreHandle::Ready(Arc::new(store))
    }

    pub fn store(&self) -> Option<&Arc<dyn DocumentStore>> {
        match self {
            StoreHandle::Ready(store) => Some(store),
            _ => None,
        }
    }

    pub fn collection(&self, name: &str) -> Option<CollectionHandle<'_>> {
        self.store().map(|store| CollectionHandle {
            store: store.as_ref(),
            name: name.to_string(),
        })
    }
}

/// A named collection in a ready store.
pub struct CollectionHandle<'a> {
    store: &'a dyn DocumentStore,
    name: String,
}

impl<'a> CollectionHandle<'a> {
    pub fn find(self, filter: Document) -> FindQuery<'a> {
        FindQuery {
            store: self.store,
            collection: self.name,
            filter,
            options: FindOptions::default(),
        }
    }
}

/// A read cursor being composed: `find(filter).sort(..).limit(..)`.
pub struct FindQuery<'a> {
    store: &'a dyn DocumentStore,
    collection: String,
    filter: Document,
    options: FindOptions,
}

impl FindQuery<'_> {
    pub fn sort(mut self, field: &str, direction: SortDirection) -> Self {
        self.options.sort = Some((field.to_string(), direction));
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.options.limit = Some(limit);
        self
    }

    pub async fn fetch(self) -> Result<Vec<Document>, AppError> {
        self.store
            .find(&self.collection, self.filter, self.options)
            .await
    }
}

#[derive(Clone)]
pub struct MongoDb {
    db: Database,
}

impl MongoDb {
    /// Builds the client. The driver connects lazily, so an unreachable
    /// server only shows up on the first query.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        Ok(Self { db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl DocumentStore for MongoDb {
    fn name(&self) -> &str {
        self.db.name()
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        options: FindOptions,
    ) -> Result<Vec<Document>, AppError> {
        let sort = options.sort.map(|(field, direction)| {
            let mut sort = Document::new();
            sort.insert(field, direction.as_i32());
            sort
        });
        let find_options = MongoFindOptions::builder()
            .sort(sort)
            .limit(options.limit.filter(|limit| *limit > 0))
            .build();

        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter, find_options)
            .await
            .map_err(|e| {
                tracing::debug!(collection = %collection, "find failed: {}", e);
                AppError::from(e)
            })?;

        let records: Vec<Document> = cursor.try_collect().await?;
        Ok(records)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.db.list_collection_names(None).await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB ping failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
