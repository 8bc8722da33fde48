use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, Response, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::activity::Catalog;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog request returned {status}")]
    FetchFailed { status: StatusCode },

    #[error("request rejected: {}", detail.as_deref().unwrap_or("no detail"))]
    Rejected { detail: Option<String> },

    #[error("server url cannot hold path segments")]
    InvalidBaseUrl,
}

/// The activities server as seen by the client: one read endpoint and two
/// mutation endpoints. Mutations resolve to the server's confirmation message.
#[automock]
#[async_trait]
pub trait ActivitiesApi: Send + Sync {
    async fn fetch_activities(&self) -> Result<Catalog, ApiError>;
    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError>;
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Default, Deserialize)]
struct DetailBody {
    #[serde(default)]
    detail: Option<String>,
}

pub struct HttpActivitiesApi {
    client: Client,
    base_url: Url,
}

impl HttpActivitiesApi {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn catalog_url(&self) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl)?
            .pop_if_empty()
            .push("activities");
        Ok(url)
    }

    /// Builds `/activities/{name}/{action}?email={email}` with both the name
    /// and the email percent-encoded.
    fn mutation_url(&self, activity: &str, action: &str, email: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl)?
            .pop_if_empty()
            .push("activities")
            .push(activity)
            .push(action);
        url.query_pairs_mut().append_pair("email", email);
        Ok(url)
    }

    async fn into_message(response: Response) -> Result<String, ApiError> {
        if response.status().is_success() {
            let body: MessageBody = response.json().await?;
            Ok(body.message)
        } else {
            // The detail body is optional; a missing or malformed one still
            // yields a Rejected error.
            let detail = response
                .json::<DetailBody>()
                .await
                .unwrap_or_default()
                .detail;
            Err(ApiError::Rejected { detail })
        }
    }
}

#[async_trait]
impl ActivitiesApi for HttpActivitiesApi {
    async fn fetch_activities(&self) -> Result<Catalog, ApiError> {
        let url = self.catalog_url()?;
        debug!(url = %url, "fetching activity catalog");
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::FetchFailed {
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = self.mutation_url(activity, "signup", email)?;
        debug!(url = %url, "submitting signup");
        let response = self.client.post(url).send().await?;
        Self::into_message(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = self.mutation_url(activity, "unregister", email)?;
        debug!(url = %url, "submitting unregister");
        let response = self.client.delete(url).send().await?;
        Self::into_message(response).await
    }
}
