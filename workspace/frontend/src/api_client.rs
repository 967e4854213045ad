pub mod records;
pub mod summary;

use common::ClientError;
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use yew::prelude::*;

use crate::settings::AppSettings;

/// Handle to the backend, shared with components through a context.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    settings: AppSettings,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}

impl ApiClient {
    pub fn new(settings: AppSettings) -> Self {
        Self { settings }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.backend_url
    }

    async fn send_get(&self, endpoint: &str) -> Result<Response, ClientError> {
        let url = self.settings.api_url(endpoint);
        log::debug!("GET request to: {}", url);

        let response = Request::get(&url).send().await.map_err(|e| {
            log::error!("GET {} - request failed: {}", endpoint, e);
            ClientError::Network(e.to_string())
        })?;

        if !response.ok() {
            log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
            return Err(ClientError::Status {
                status: response.status(),
                detail: None,
            });
        }

        Ok(response)
    }

    /// GET `endpoint` and decode the JSON body.
    pub async fn get<T>(&self, endpoint: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let response = self.send_get(endpoint).await?;

        log::trace!("GET {} - Response received, parsing JSON", endpoint);
        let data = response.json::<T>().await.map_err(|e| {
            log::error!("GET {} - failed to parse response: {}", endpoint, e);
            ClientError::Decode(e.to_string())
        })?;

        log::info!("GET {} - Success", endpoint);
        Ok(data)
    }

    /// GET `endpoint` and hand back the raw body, for callers that parse leniently.
    pub async fn get_text(&self, endpoint: &str) -> Result<String, ClientError> {
        let response = self.send_get(endpoint).await?;

        let body = response.text().await.map_err(|e| {
            log::error!("GET {} - failed to read body: {}", endpoint, e);
            ClientError::Decode(e.to_string())
        })?;

        log::info!("GET {} - Success", endpoint);
        Ok(body)
    }

    /// GET `endpoint` and report only the status of a successful response.
    pub async fn get_status(&self, endpoint: &str) -> Result<u16, ClientError> {
        let response = self.send_get(endpoint).await?;
        Ok(response.status())
    }

    /// POST a JSON body. The response body of a success is ignored.
    pub async fn post<B>(&self, endpoint: &str, body: &B) -> Result<(), ClientError>
    where
        B: Serialize,
    {
        let url = self.settings.api_url(endpoint);
        log::debug!("POST request to: {}", url);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| {
                log::error!("POST {} - failed to serialize request: {}", endpoint, e);
                ClientError::Decode(e.to_string())
            })?
            .send()
            .await
            .map_err(|e| {
                log::error!("POST {} - request failed: {}", endpoint, e);
                ClientError::Network(e.to_string())
            })?;

        if !response.ok() {
            log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
            let body = response.text().await.unwrap_or_default();
            let error = ClientError::creation_failure(response.status(), &body);
            log::error!("POST {} - API error: {:?}", endpoint, error);
            return Err(error);
        }

        log::info!("POST {} - Success", endpoint);
        Ok(())
    }
}

/// The client provided by the app root.
#[hook]
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| {
        log::warn!("No ApiClient in context, falling back to default settings");
        ApiClient::default()
    })
}
