//! reqwest-backed JSON:API client for the workspace/tag endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ClientError;
use super::types::{TagPage, Workspace};
use super::wire::{ErrorDocument, TagListDocument, TagRelationshipBody, WorkspaceDocument};
use super::TagApi;
use crate::config::ProviderConfig;

const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";
const API_PATH: &str = "api/v2";

/// HTTP client for the remote workspace/tag API.
///
/// Requests carry a bearer token and the JSON:API media type. Every request is
/// bounded by the configured timeout; dropping the returned future aborts the
/// request in flight.
#[derive(Debug, Clone)]
pub struct HttpTagClient {
    client: Client,
    base_url: Url,
    page_size: u32,
}

impl HttpTagClient {
    /// Build a client for the host in `config`, authenticating with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the hostname does not form a valid URL, the token is
    /// not a valid header value, or the HTTP client cannot be created.
    pub fn new(config: &ProviderConfig, token: &str) -> Result<Self, ClientError> {
        let base_url = api_base_url(&config.hostname)?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ClientError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_API_MEDIA_TYPE));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("workspace-tags/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(config.ssl_skip_verify)
            .build()?;

        Ok(Self {
            client,
            base_url,
            page_size: config.page_size,
        })
    }

    /// The API root every endpoint is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_document<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        debug!(url = %url, "GET");
        let response = self.client.get(url.clone()).query(query).send().await?;
        let response = check_status(response, &url).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn tags_endpoint(&self, workspace_id: &str) -> Result<Url, ClientError> {
        self.endpoint(&["workspaces", workspace_id, "relationships", "tags"])
    }
}

#[async_trait]
impl TagApi for HttpTagClient {
    async fn read_workspace(&self, workspace_id: &str) -> Result<Workspace, ClientError> {
        let url = self.endpoint(&["workspaces", workspace_id])?;
        let doc: WorkspaceDocument = self.get_document(url, &[]).await?;
        Ok(doc.into())
    }

    async fn read_workspace_by_name(
        &self,
        organization: &str,
        workspace: &str,
    ) -> Result<Workspace, ClientError> {
        let url = self.endpoint(&["organizations", organization, "workspaces", workspace])?;
        let doc: WorkspaceDocument = self.get_document(url, &[]).await?;
        let mut ws = Workspace::from(doc);
        if ws.organization.is_none() {
            ws.organization = Some(organization.to_string());
        }
        Ok(ws)
    }

    async fn list_tags(&self, workspace_id: &str, page: u32) -> Result<TagPage, ClientError> {
        let url = self.tags_endpoint(workspace_id)?;
        let query = [
            ("page[number]", page.to_string()),
            ("page[size]", self.page_size.to_string()),
        ];
        let doc: TagListDocument = self.get_document(url, &query).await?;
        Ok(doc.into())
    }

    async fn add_tags(&self, workspace_id: &str, names: &[String]) -> Result<(), ClientError> {
        let url = self.tags_endpoint(workspace_id)?;
        debug!(url = %url, count = names.len(), "POST tags");
        let response = self
            .client
            .post(url.clone())
            .json(&TagRelationshipBody::new(names))
            .send()
            .await?;
        check_status(response, &url).await?;
        Ok(())
    }

    async fn remove_tags(&self, workspace_id: &str, names: &[String]) -> Result<(), ClientError> {
        let url = self.tags_endpoint(workspace_id)?;
        debug!(url = %url, count = names.len(), "DELETE tags");
        let response = self
            .client
            .delete(url.clone())
            .json(&TagRelationshipBody::new(names))
            .send()
            .await?;
        check_status(response, &url).await?;
        Ok(())
    }
}

/// Resolve the API root for a hostname. A bare hostname is served over
/// HTTPS; an address that already carries a scheme is used as given.
fn api_base_url(hostname: &str) -> Result<Url, ClientError> {
    let hostname = hostname.trim().trim_end_matches('/');
    let address = if hostname.contains("://") {
        hostname.to_string()
    } else {
        format!("https://{hostname}")
    };

    Url::parse(&format!("{address}/{API_PATH}"))
        .map_err(|e| ClientError::InvalidUrl(format!("{address}: {e}")))
}

/// Pass a successful response through; turn anything else into an error.
async fn check_status(response: Response, url: &Url) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            debug!(
                url = %url,
                status = status.as_u16(),
                error = %e,
                "Failed to read error response body"
            );
            String::new()
        }
    };
    Err(status_error(status, url.path(), &body))
}

/// Map a non-success status and its body onto the error taxonomy.
fn status_error(status: StatusCode, path: &str, body: &str) -> ClientError {
    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(path.to_string()),
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        _ => {
            let message = serde_json::from_str::<ErrorDocument>(body)
                .ok()
                .and_then(|doc| doc.message())
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected response")
                        .to_string()
                });
            ClientError::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}
