use crate::config::toml_config::SourceConfig;
use crate::domain::ports::Transport;
use crate::utils::error::{EtlError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use std::time::Duration;

/// Cookie deposu açık, sabit başlıklı reqwest oturumu. ASP.NET oturum
/// cookie'si ilk GET'te alınır ve sonraki tüm POST'larda geri gönderilir.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(source: &SourceConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &source.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                EtlError::InvalidConfigValueError {
                    field: "source.headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| EtlError::InvalidConfigValueError {
                    field: format!("source.headers.{}", name),
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder()
            .cookie_store(true)
            .user_agent(source.user_agent.clone())
            .default_headers(headers);

        if let Some(timeout) = source.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    async fn read_body(url: &str, response: Response) -> Result<String> {
        let status = response.status();
        tracing::debug!("Response status {} from {}", status, url);

        if !status.is_success() {
            return Err(EtlError::HttpStatusError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(body)
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::read_body(url, response).await
    }

    async fn post(&self, url: &str, fields: &[(String, String)]) -> Result<String> {
        tracing::debug!("POST {} ({} form fields)", url, fields.len());
        let response = self.client.post(url).form(fields).send().await?;
        Self::read_body(url, response).await
    }
}
