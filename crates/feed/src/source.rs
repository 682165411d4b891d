use async_trait::async_trait;
use folio_client::{ContentClient, QueryParams, Result};
use folio_model::Entity;
use serde::de::DeserializeOwned;

/// Where a feed's collection comes from. The seam exists so drivers can be
/// exercised against scripted sources in tests, and so screens depend on an
/// injected source rather than a global client.
#[async_trait(?Send)]
pub trait ContentSource<T> {
    async fn fetch(&self) -> Result<Vec<T>>;
}

/// A CMS collection endpoint bound to fixed query parameters.
pub struct CollectionSource<'a> {
    client: &'a ContentClient,
    path: String,
    params: QueryParams,
}

impl<'a> CollectionSource<'a> {
    pub fn new(client: &'a ContentClient, path: impl Into<String>, params: QueryParams) -> Self {
        Self {
            client,
            path: path.into(),
            params,
        }
    }
}

#[async_trait(?Send)]
impl<'a, T> ContentSource<Entity<T>> for CollectionSource<'a>
where
    T: DeserializeOwned + Default,
{
    async fn fetch(&self) -> Result<Vec<Entity<T>>> {
        let envelope = self
            .client
            .fetch_collection::<T>(&self.path, &self.params)
            .await?;
        Ok(envelope.data)
    }
}
