use crate::config::ApiConfig;
use crate::error::{ClientError, Result};
use crate::params::QueryParams;
use crate::retry::with_retry;
use folio_model::{Entity, Envelope};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Mutex;

/// Mutation bodies are wrapped as `{ "data": ... }` per the CMS convention.
#[derive(Serialize)]
struct DataBody<T> {
    data: T,
}

/// HTTP client for the headless CMS.
///
/// Attaches the cached bearer token to every request and drops it on a 401
/// so a stale token cannot wedge the session. GET fetches retry transient
/// failures per the configured policy; mutations are issued once, since a
/// retried create could duplicate content.
pub struct ContentClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Mutex<Option<String>>,
}

impl ContentClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            config,
            token: Mutex::new(None),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env())
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.lock().expect("token mutex poisoned") = Some(token.into());
    }

    pub fn clear_token(&self) {
        *self.token.lock().expect("token mutex poisoned") = None;
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch a collection, e.g. `portfolio-items`, decoding the standard
    /// envelope. Transient failures retry with backoff.
    pub async fn fetch_collection<T>(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<Envelope<Vec<Entity<T>>>>
    where
        T: DeserializeOwned + Default,
    {
        let pairs = params.to_pairs();
        let raw = with_retry(&self.config.retry, || {
            self.send(Method::GET, path, &pairs, None)
        })
        .await?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Fetch a single resource by identifier. A 404 maps to `NotFound` so
    /// detail screens can distinguish a missing record from a server fault.
    pub async fn fetch_one<T>(
        &self,
        path: &str,
        id: u64,
        params: &QueryParams,
    ) -> Result<Envelope<Entity<T>>>
    where
        T: DeserializeOwned + Default,
    {
        let detail_path = format!("{path}/{id}");
        let pairs = params.to_pairs();
        let raw = with_retry(&self.config.retry, || {
            self.send(Method::GET, &detail_path, &pairs, None)
        })
        .await
        .map_err(|err| match err {
            ClientError::Http { status: 404 } => ClientError::NotFound {
                resource: path.to_string(),
                id,
            },
            other => other,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub async fn create<T, R>(&self, path: &str, data: &T) -> Result<Envelope<Entity<R>>>
    where
        T: Serialize,
        R: DeserializeOwned + Default,
    {
        let body = serde_json::to_string(&DataBody { data })?;
        let raw = self.send(Method::POST, path, &[], Some(body)).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub async fn update<T, R>(&self, path: &str, id: u64, data: &T) -> Result<Envelope<Entity<R>>>
    where
        T: Serialize,
        R: DeserializeOwned + Default,
    {
        let body = serde_json::to_string(&DataBody { data })?;
        let raw = self
            .send(Method::PUT, &format!("{path}/{id}"), &[], Some(body))
            .await?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub async fn delete<R>(&self, path: &str, id: u64) -> Result<Envelope<Entity<R>>>
    where
        R: DeserializeOwned + Default,
    {
        let raw = self
            .send(Method::DELETE, &format!("{path}/{id}"), &[], None)
            .await?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        pairs: &[(String, String)],
        body: Option<String>,
    ) -> Result<String> {
        let mut request = self.http.request(method, self.url(path)).query(pairs);
        let token = self.token.lock().expect("token mutex poisoned").clone();
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.as_u16() == 401 {
            log::warn!("CMS rejected cached auth token, clearing it");
            self.clear_token();
        }
        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(ClientError::Network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn url_join_normalizes_slashes() {
        let client = ContentClient::new(
            ApiConfig::default().with_base_url("http://localhost:1337/api/"),
        )
        .unwrap();
        assert_eq!(
            client.url("/portfolio-items"),
            "http://localhost:1337/api/portfolio-items"
        );
        assert_eq!(
            client.url("blog-posts/3"),
            "http://localhost:1337/api/blog-posts/3"
        );
    }

    #[test]
    fn mutation_body_wraps_data() {
        let body = serde_json::to_string(&DataBody {
            data: serde_json::json!({ "title": "New" }),
        })
        .unwrap();
        assert_eq!(body, r#"{"data":{"title":"New"}}"#);
    }
}
