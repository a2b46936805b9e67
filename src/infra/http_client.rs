use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

use crate::app::ports::OverpassPort;
use crate::config::OverpassConfig;
use crate::error::{HarvestError, Result};
use crate::types::OverpassResponse;

/// Overpass API client. The query travels as the raw POST body.
pub struct ReqwestOverpass {
    client: reqwest::Client,
    url: String,
}

impl ReqwestOverpass {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &OverpassConfig) -> Result<Self> {
        Self::new(config.url.clone(), config.http_timeout())
    }
}

/// Map an Overpass HTTP status to the harvester's error taxonomy.
pub fn classify_status(status: StatusCode, body: &str) -> Option<HarvestError> {
    match status.as_u16() {
        200 => None,
        400 => Some(HarvestError::BadRequest(body.trim().to_string())),
        429 => Some(HarvestError::TooManyRequests),
        504 => Some(HarvestError::GatewayTimeout),
        other => Some(HarvestError::Status { status: other }),
    }
}

/// Overpass reports query-time failures with HTTP 200 and a `remark`.
pub fn check_remark(response: &OverpassResponse) -> Result<()> {
    match &response.remark {
        Some(remark) if remark.trim_start().starts_with("runtime error") => {
            Err(HarvestError::Remark(remark.trim().to_string()))
        }
        _ => Ok(()),
    }
}

#[async_trait]
impl OverpassPort for ReqwestOverpass {
    async fn query(&self, query: &str) -> Result<OverpassResponse> {
        tracing::debug!("Overpass POST to: {}", self.url);
        let resp = self
            .client
            .post(&self.url)
            .body(query.to_string())
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!("Overpass response: status={}, size={} bytes", status, body.len());

        if let Some(err) = classify_status(status, &body) {
            return Err(err);
        }
        let parsed: OverpassResponse = serde_json::from_str(&body)?;
        check_remark(&parsed)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(classify_status(StatusCode::OK, "").is_none());
        assert!(classify_status(StatusCode::TOO_MANY_REQUESTS, "")
            .unwrap()
            .is_rate_limited());
        assert!(matches!(
            classify_status(StatusCode::GATEWAY_TIMEOUT, ""),
            Some(HarvestError::GatewayTimeout)
        ));
        assert!(matches!(
            classify_status(StatusCode::BAD_REQUEST, " parse error \n"),
            Some(HarvestError::BadRequest(msg)) if msg == "parse error"
        ));
        assert!(matches!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR, ""),
            Some(HarvestError::Status { status: 500 })
        ));
    }

    #[test]
    fn test_runtime_remark_is_an_error() {
        let resp = OverpassResponse {
            elements: Vec::new(),
            remark: Some("runtime error: Query timed out in \"query\" at line 4".into()),
        };
        assert!(matches!(check_remark(&resp), Err(HarvestError::Remark(_))));

        let ok = OverpassResponse {
            elements: Vec::new(),
            remark: Some("informational".into()),
        };
        assert!(check_remark(&ok).is_ok());
    }
}
