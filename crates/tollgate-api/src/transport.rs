// Request execution shared by every sub-client.
//
// `TransportConfig` builds the `reqwest::Client`; `Executor` pairs that
// client with one `Configuration` snapshot and owns URL construction,
// bearer auth, and response decoding.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::configuration::Configuration;
use crate::error::Error;

const USER_AGENT: &str = concat!("tollgate-rs/", env!("CARGO_PKG_VERSION"));

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

// ── TransportConfig ──────────────────────────────────────────────────

/// Settings for building the HTTP client shared by all sub-clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: USER_AGENT.to_owned(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?;
        Ok(client)
    }
}

// ── Executor ─────────────────────────────────────────────────────────

/// One HTTP client bound to one configuration snapshot.
///
/// Cloning is cheap: `reqwest::Client` and the configuration are both
/// reference counted.
#[derive(Debug, Clone)]
pub(crate) struct Executor {
    http: reqwest::Client,
    configuration: Arc<Configuration>,
}

impl Executor {
    pub(crate) fn new(http: reqwest::Client, configuration: Arc<Configuration>) -> Self {
        Self {
            http,
            configuration,
        }
    }

    pub(crate) fn configuration(&self) -> &Arc<Configuration> {
        &self.configuration
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append path segments to the base path, percent-encoding each one.
    ///
    /// `https://host/v1` and `https://host/v1/` both yield
    /// `https://host/v1/links` for `["links"]`.
    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = Url::parse(self.configuration.base_path())?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(self.configuration.api_token().expose_secret())
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("GET {url}");

        let resp = self.request(Method::GET, url).send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn get_with_params<T, Q>(
        &self,
        segments: &[&str],
        params: &Q,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        debug!("GET {url}");

        let resp = self.request(Method::GET, url).query(params).send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn post<T, B>(&self, segments: &[&str], body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        debug!("POST {url}");

        let resp = self.request(Method::POST, url).json(body).send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn patch<T, B>(&self, segments: &[&str], body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        debug!("PATCH {url}");

        let resp = self.request(Method::PATCH, url).json(body).send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<(), Error> {
        let url = self.url(segments)?;
        debug!("DELETE {url}");

        let resp = self.request(Method::DELETE, url).send().await?;
        handle_empty(resp).await
    }
}

// ── Response handling ────────────────────────────────────────────────

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    if status.is_success() {
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    } else {
        Err(parse_error(status, resp).await)
    }
}

async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(parse_error(status, resp).await)
    }
}

async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Error::Unauthorized;
    }

    let raw = resp.text().await.unwrap_or_default();

    if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
        Error::Api {
            status: status.as_u16(),
            message: err
                .message
                .or(err.error)
                .unwrap_or_else(|| status.to_string()),
            code: err.code,
        }
    } else {
        Error::Api {
            status: status.as_u16(),
            message: if raw.is_empty() {
                status.to_string()
            } else {
                raw
            },
            code: None,
        }
    }
}
