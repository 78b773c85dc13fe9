//! HTTP client implementation

use std::time::Duration;

use reqwest::{header, Client, RequestBuilder};
use secrecy::SecretString;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use url::Url;

use crate::authn::bearer::authorization_value;
use crate::errors::ClientError;

/// Raw outcome of one backend call, before it is turned into a result
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    /// HTTP status code
    pub status: u16,

    /// Decoded body of a successful response; `None` when it was empty
    pub body: Option<T>,

    /// Raw body of an unsuccessful response
    pub error_body: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn is_successful(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client for backend communication
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Resolve an endpoint path, appending each extra segment percent-encoded.
    /// Empty, `.` and `..` segments are rejected since they would address a
    /// different resource.
    pub fn endpoint(&self, path: &str, segments: &[&str]) -> Result<Url, ClientError> {
        if let Some(bad) = segments
            .iter()
            .find(|s| matches!(s.trim(), "" | "." | ".."))
        {
            return Err(ClientError::ValidationError(format!(
                "Invalid path segment: {:?}",
                bad
            )));
        }

        let mut url = self.base_url.join(path)?;
        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| {
                    ClientError::ConfigError(format!("Base URL cannot take a path: {}", self.base_url))
                })?
                .pop_if_empty()
                .extend(segments);
        }
        Ok(url)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        token: &SecretString,
    ) -> Result<ApiResponse<T>, ClientError> {
        debug!("GET {}", url);

        let request = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, authorization_value(token));

        self.send(request).await
    }

    /// Make a POST request
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: Url,
        token: Option<&SecretString>,
        body: &B,
    ) -> Result<ApiResponse<T>, ClientError> {
        debug!("POST {}", url);

        let mut request = self.client.post(url).json(body);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, authorization_value(token));
        }

        self.send(request).await
    }

    /// Make a PUT request
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: Url,
        token: &SecretString,
        body: &B,
    ) -> Result<ApiResponse<T>, ClientError> {
        debug!("PUT {}", url);

        let request = self
            .client
            .put(url)
            .header(header::AUTHORIZATION, authorization_value(token))
            .json(body);

        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>, ClientError> {
        let response = request
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!("Response status: {}, body length: {}", status, text.len());

        if !status.is_success() {
            return Ok(ApiResponse {
                status: status.as_u16(),
                body: None,
                error_body: (!text.trim().is_empty()).then_some(text),
            });
        }

        let body = match text.trim() {
            "" | "null" => None,
            trimmed => Some(serde_json::from_str(trimmed)?),
        };

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
            error_body: None,
        })
    }
}

/// Parse the base URL, making sure it ends with a slash so endpoint paths
/// resolve beneath it
pub fn normalize_base_url(base_url: &str) -> Result<Url, ClientError> {
    let trimmed = base_url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&with_slash)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::ConfigError(format!(
            "Unsupported URL scheme: {}",
            other
        ))),
    }
}
