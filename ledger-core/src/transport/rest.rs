//! # Textual Transport
//!
//! An HTTP GET client for the node's REST surface.
//!
//! The shared `reqwest::Client` sits behind a `tokio` mutex and the guard is held for the
//! whole request, from sending it to reading the body. At most one textual request is in
//! flight at a time; concurrent callers queue on the lock in arrival order. The guard is
//! released on every exit path, including when the caller drops the future.
//!
//! A successful response body is already JSON and is handed back unmodified.
use super::{BLOCK_HEIGHT_HEADER, CallContext};
use base64::Engine;
use ledger_proto::base::PageRequest;
use reqwest::StatusCode;
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum RestRequestError {
    #[error("request to '{url}' failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("'{url}' responded with {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
}

impl RestRequestError {
    /// The HTTP status the server answered with, if it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RestRequestError::Http { source, .. } => source.status(),
            RestRequestError::Status { status, .. } => Some(*status),
        }
    }
}

/// A REST route: the path below the server root plus its query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestPath {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl RestPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds `value` under `key` only when it is not empty.
    pub fn param_if(self, key: impl Into<String>, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.param(key, value)
        }
    }

    /// Appends the `pagination.*` parameters that differ from their zero value.
    pub fn paginate(mut self, page: Option<&PageRequest>) -> Self {
        let Some(page) = page else {
            return self;
        };

        if !page.key.is_empty() {
            let key = base64::engine::general_purpose::STANDARD.encode(&page.key);
            self = self.param("pagination.key", key);
        }
        if page.offset > 0 {
            self = self.param("pagination.offset", page.offset.to_string());
        }
        if page.limit > 0 {
            self = self.param("pagination.limit", page.limit.to_string());
        }
        if page.count_total {
            self = self.param("pagination.count_total", "true");
        }
        if page.reverse {
            self = self.param("pagination.reverse", "true");
        }
        self
    }
}

/// HTTP client for the REST surface, serialized through a single lock.
#[derive(Debug)]
pub struct RestClient {
    base_url: String,
    client: Mutex<reqwest::Client>,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Mutex::new(client),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a GET on `route` and returns the response body.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The body of a 2xx response, untouched.
    /// * `Err(RestRequestError)` - The request could not be sent, timed out, or the server
    ///   answered with a non-success status.
    pub async fn get(&self, route: &RestPath, ctx: &CallContext) -> Result<String, RestRequestError> {
        let url = format!("{}{}", self.base_url, route.path);

        let client = self.client.lock().await;

        let mut request = client.get(&url).query(&route.query);
        if let Some(timeout) = ctx.timeout {
            request = request.timeout(timeout);
        }
        if let Some(height) = ctx.height {
            request = request.header(BLOCK_HEIGHT_HEADER, height.to_string());
        }

        let http_error = |source| RestRequestError::Http {
            url: url.clone(),
            source,
        };

        let response = request.send().await.map_err(http_error)?;
        let status = response.status();
        let body = response.text().await.map_err(http_error)?;

        drop(client);

        if !status.is_success() {
            return Err(RestRequestError::Status { url, status, body });
        }

        Ok(body)
    }
}
