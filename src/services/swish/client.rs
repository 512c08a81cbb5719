use std::time::Duration;

use reqwest::{
    header::{HeaderMap, LOCATION},
    Client, Response, StatusCode,
};
use serde::Serialize;

use super::ClientCertificate;
use crate::config::{SwishConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{RawResponse, SwishResult, TransportError, ValidationError};
use crate::models::SwishResponse;

#[derive(Clone)]
pub struct SwishClient {
    http_client: Client,
    payee_alias: String,
    api_base_url: String,
}

impl SwishClient {
    /// Client with the default timeout. `base_url` falls back to the production API.
    pub fn new(
        payee_alias: impl Into<String>,
        certificate: Option<ClientCertificate>,
        base_url: Option<&str>,
    ) -> SwishResult<Self> {
        let mut builder = Self::builder(payee_alias);
        if let Some(certificate) = certificate {
            builder = builder.certificate(certificate);
        }
        if let Some(base_url) = base_url {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    pub fn builder(payee_alias: impl Into<String>) -> SwishClientBuilder {
        SwishClientBuilder {
            payee_alias: payee_alias.into(),
            certificate: None,
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_config(config: &SwishConfig) -> SwishResult<Self> {
        let mut builder = Self::builder(config.payee_alias.clone())
            .base_url(config.api_base_url.clone())
            .timeout(config.timeout());

        if let Some(cert_path) = &config.cert_path {
            let certificate = ClientCertificate::from_files(cert_path, config.key_path.as_deref())?;
            builder = builder.certificate(certificate);
        }

        builder.build()
    }

    pub fn payee_alias(&self) -> &str {
        &self.payee_alias
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), endpoint)
    }

    pub(crate) async fn post<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> SwishResult<SwishResponse> {
        let url = self.endpoint_url(endpoint);

        tracing::debug!(url = %url, "Sending Swish request");

        let response = self.http_client.post(&url).json(body).send().await?;

        self.handle_created(response).await
    }

    pub(crate) async fn get(&self, url: &str) -> SwishResult<serde_json::Value> {
        tracing::debug!(url = %url, "Fetching Swish status");

        let response = self.http_client.get(url).send().await?;
        let raw = read_raw(response).await?;

        if raw.status != StatusCode::OK {
            tracing::error!("Swish API error: {} - {}", raw.status, raw.body);
            return Err(TransportError::from_response("HTTP Error", raw).into());
        }

        serde_json::from_str(&raw.body).map_err(|e| {
            tracing::error!("Failed to parse Swish response: {} - Body: {}", e, raw.body);
            TransportError::from_response(format!("Failed to parse response: {}", e), raw).into()
        })
    }

    async fn handle_created(&self, response: Response) -> SwishResult<SwishResponse> {
        let status = response.status();

        match status {
            StatusCode::CREATED => {
                let location = location_header(response.headers());

                tracing::info!(location = ?location, "Swish resource created");

                Ok(SwishResponse::new(location, None))
            }
            StatusCode::UNPROCESSABLE_ENTITY => {
                let raw = read_raw(response).await?;

                let error = ValidationError::from_response(raw);

                if error.errors.is_empty() {
                    tracing::warn!(
                        body = ?error.response.as_ref().map(|r| r.body.as_str()),
                        "Swish rejected request without readable error codes"
                    );
                } else {
                    tracing::warn!(
                        codes = ?error.errors.iter().map(|e| e.error_code.as_str()).collect::<Vec<_>>(),
                        "Swish rejected request"
                    );
                }

                Err(error.into())
            }
            _ => {
                let raw = read_raw(response).await?;
                tracing::error!("Swish API error: {} - {}", raw.status, raw.body);
                Err(TransportError::from_response("HTTP Error", raw).into())
            }
        }
    }
}

impl std::fmt::Debug for SwishClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwishClient")
            .field("payee_alias", &self.payee_alias)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

fn location_header(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(LOCATION)?;

    match value.to_str() {
        Ok(location) => Some(location.to_string()),
        Err(e) => {
            tracing::warn!(location = ?value, "Ignoring Location header that is not valid UTF-8: {}", e);
            None
        }
    }
}

async fn read_raw(response: Response) -> SwishResult<RawResponse> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.text().await?;

    Ok(RawResponse {
        status,
        headers,
        body,
    })
}

pub struct SwishClientBuilder {
    payee_alias: String,
    certificate: Option<ClientCertificate>,
    base_url: String,
    timeout: Duration,
}

impl SwishClientBuilder {
    pub fn certificate(mut self, certificate: ClientCertificate) -> Self {
        self.certificate = Some(certificate);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> SwishResult<SwishClient> {
        let mut http_client = Client::builder().timeout(self.timeout);

        if let Some(certificate) = &self.certificate {
            http_client = http_client.identity(certificate.identity());
        }

        Ok(SwishClient {
            http_client: http_client.build()?,
            payee_alias: self.payee_alias,
            api_base_url: self.base_url,
        })
    }
}
