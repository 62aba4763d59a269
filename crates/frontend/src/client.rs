use models::{NewPost, Post, PostPatch};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API url: {0}")]
    InvalidUrl(String),
    #[error("request to {url} failed: {source}")]
    Network {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered {status}")]
    Status { url: Url, status: reqwest::StatusCode },
    #[error("cannot decode response from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client for the posts API.
///
/// Non-2xx answers are errors, like every other failure. No timeouts or
/// retries are configured.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    /// `<base>/posts[/<id>]`, with the id percent-encoded as one segment.
    fn posts_url(&self, id: Option<&str>) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push("posts");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(&self, url: Url, req: RequestBuilder) -> Result<T, ClientError> {
        let resp = req.send().await.map_err(|source| ClientError::Network {
            url: url.clone(),
            source,
        })?;
        let status = resp.status();
        debug!(%url, %status, "api response");
        if !status.is_success() {
            return Err(ClientError::Status { url, status });
        }
        resp.json::<T>()
            .await
            .map_err(|source| ClientError::Decode { url, source })
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        let url = self.posts_url(None)?;
        self.execute(url.clone(), self.http.get(url)).await
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, ClientError> {
        let url = self.posts_url(Some(id))?;
        self.execute(url.clone(), self.http.get(url)).await
    }

    pub async fn create_post(&self, input: &NewPost) -> Result<Post, ClientError> {
        let url = self.posts_url(None)?;
        self.execute(url.clone(), self.http.post(url).json(input)).await
    }

    pub async fn update_post(&self, id: &str, patch: &PostPatch) -> Result<Post, ClientError> {
        let url = self.posts_url(Some(id))?;
        self.execute(url.clone(), self.http.patch(url).json(patch)).await
    }

    /// Returns the API's confirmation body.
    pub async fn delete_post(&self, id: &str) -> Result<Value, ClientError> {
        let url = self.posts_url(Some(id))?;
        self.execute(url.clone(), self.http.delete(url)).await
    }
}
