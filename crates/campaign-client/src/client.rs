use crate::config::ClientConfig;
use crate::error::{extract_error_message, ConfigError, RequestError, DEFAULT_ERROR_MESSAGE};
use crate::notify::{Notification, Notifier};
use campaign_types::ApiResponse;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

const INVALID_RESPONSE_MESSAGE: &str = "Unexpected response from server";

/// Single point of outbound HTTP communication with the campaign API.
///
/// No timeout and no retry: a failed attempt is reported and returned, and
/// resubmission is left to the user.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, notifier: Arc<dyn Notifier>) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(concat!("campaign-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { client, config, notifier })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, RequestError> {
        let resp = self.execute(Method::GET, path, None::<&()>).await?;
        self.decode(resp, path).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, RequestError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.execute(Method::POST, path, Some(body)).await?;
        self.decode(resp, path).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, RequestError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.execute(Method::PUT, path, Some(body)).await?;
        self.decode(resp, path).await
    }

    /// DELETE carries no envelope; any 2xx is success.
    pub async fn delete(&self, path: &str) -> Result<(), RequestError> {
        self.execute(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, RequestError>
    where
        B: Serialize + Sync + ?Sized,
    {
        tracing::debug!("{} {}", method, path);
        let mut request: RequestBuilder =
            self.client.request(method.clone(), self.config.endpoint(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("{} {} failed: {}", method, path, e);
                return Err(self.fail(RequestError::Transport {
                    message: DEFAULT_ERROR_MESSAGE.to_string(),
                }));
            }
        };

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        tracing::warn!("{} {} returned {}", method, path, status);
        Err(self.fail(RequestError::Status {
            status: status.as_u16(),
            message: extract_error_message(&body),
        }))
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        resp: Response,
        path: &str,
    ) -> Result<ApiResponse<T>, RequestError> {
        match resp.json::<ApiResponse<T>>().await {
            Ok(envelope) => Ok(envelope),
            Err(e) => {
                tracing::warn!("Invalid response body from {}: {}", path, e);
                Err(self.fail(RequestError::InvalidResponse {
                    message: INVALID_RESPONSE_MESSAGE.to_string(),
                }))
            }
        }
    }

    /// Report a failure to the user, once, and hand it back.
    fn fail(&self, error: RequestError) -> RequestError {
        self.notifier.notify(Notification::error(error.message()));
        error
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("config", &self.config).finish_non_exhaustive()
    }
}
