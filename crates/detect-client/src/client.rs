use std::future::Future;

use reqwest::{Client as HttpClient, StatusCode};
use serde_json::json;
use tokio::time::sleep;
use tracing::warn;

use crate::errors::{ClientError, ClientResult};
use crate::retry::RetryPolicy;
use crate::types::{FetchedArtifact, PlatformTag, Session, PROTOCOL_VERSION};

const PATH_REGISTER: &str = "/detect/endpoint";

/// HTTP client for the control service. Holds the API base URL and the
/// platform tag; the session credential is owned by the caller and passed
/// per fetch.
#[derive(Debug, Clone)]
pub struct Client {
    api: String,
    platform: PlatformTag,
    retry: RetryPolicy,
    http: HttpClient,
}

impl Client {
    pub fn new(api: String) -> Self {
        Self::with_retry_policy(api, RetryPolicy::default())
    }

    pub fn with_retry_policy(api: String, retry: RetryPolicy) -> Self {
        Self {
            api,
            platform: PlatformTag::current(),
            retry,
            http: HttpClient::new(),
        }
    }

    pub fn api(&self) -> &str {
        &self.api
    }

    pub fn platform(&self) -> &PlatformTag {
        &self.platform
    }

    /// Exchange account credentials for a session token.
    ///
    /// `POST {api}/detect/endpoint` with `account`/`token` headers and an
    /// `{"id": "{hostname}:0"}` body. An HTTP 200 response carries the raw
    /// session token as its body; any other status carries the service's
    /// error message and is fatal to the probe.
    pub async fn register(
        &self,
        account_id: &str,
        account_token: &str,
        hostname: &str,
    ) -> ClientResult<Session> {
        let url = format!("{}{}", self.api.trim_end_matches('/'), PATH_REGISTER);
        let body = json!({ "id": format!("{}:0", hostname) });

        let response = self
            .with_transport_retry("register", || {
                let url = url.clone();
                let body = body.clone();
                async move {
                    self.http
                        .post(url.as_str())
                        .header("account", account_id)
                        .header("token", account_token)
                        .json(&body)
                        .send()
                        .await
                }
            })
            .await?;

        let status = response.status();
        let text = response.text().await?;
        // Exactly 200: only then is the body the session token. Any other
        // status, 2xx included, carries the service's error message.
        if status != StatusCode::OK {
            return Err(ClientError::Registration {
                status: Some(status.as_u16()),
                body: text,
            });
        }
        Session::new(text).ok_or(ClientError::EmptySession)
    }

    /// Fetch a test payload, or deliver a prior result when `test_id` is
    /// empty and `result_token` is not.
    ///
    /// Single network read, no retry: a failed iteration is abandoned and
    /// retry is the operator's call (re-supplying the same test id). The
    /// response status is deliberately not checked; authenticity gating is
    /// entirely the origin validation on the served-from URL.
    pub async fn fetch(
        &self,
        session: &Session,
        test_id: &str,
        result_token: &str,
    ) -> ClientResult<FetchedArtifact> {
        let response = self
            .http
            .get(self.api.as_str())
            .header("token", session.as_str())
            .header("id", test_id)
            .header("dos", self.platform.as_str())
            .header("dat", result_token)
            .header("version", PROTOCOL_VERSION)
            .send()
            .await?;

        let served_from = response.url().clone();
        let body = response.bytes().await?.to_vec();
        Ok(FetchedArtifact { body, served_from })
    }

    async fn with_transport_retry<T, F, Fut>(
        &self,
        operation: &'static str,
        mut op: F,
    ) -> Result<T, reqwest::Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, reqwest::Error>>,
    {
        let mut attempt = 1u32;
        loop {
            match op().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    if attempt >= self.retry.max_attempts {
                        return Err(err);
                    }
                    let delay = self.retry.next_delay(attempt.saturating_sub(1));
                    warn!(
                        operation,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "transport call failed, retrying"
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
