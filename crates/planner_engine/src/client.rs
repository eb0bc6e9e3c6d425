use std::time::Duration;

use planner_core::{ApiConfig, HealthStatus, MealPlanRequest, MealPlanResult, SupportedMeals};
use planner_logging::{planner_debug, planner_warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

pub const HEALTH_PATH: &str = "/health";
pub const CONFIG_PATH: &str = "/api/config";
pub const SUPPORTED_MEALS_PATH: &str = "/api/meal-plans";
pub const MEAL_PLAN_PATH: &str = "/api/meal-plan";

/// Connection settings. Timeouts are off unless the embedding app sets them.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl ClientSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// The four backend calls. Implementations never retry.
#[async_trait::async_trait]
pub trait ApiClient: Send + Sync {
    async fn health_check(&self) -> Result<HealthStatus, ApiError>;

    async fn get_config(&self) -> Result<ApiConfig, ApiError>;

    async fn get_supported_meals(&self) -> Result<SupportedMeals, ApiError>;

    async fn generate_meal_plan(
        &self,
        request: &MealPlanRequest,
    ) -> Result<MealPlanResult, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestApiClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::transport)?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Base URL followed by `path`, without doubling the separating slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        let result = self.send(method.clone(), &url, body).await;
        if let Err(err) = &result {
            planner_warn!("API request failed: {} {}: {}", method, url, err);
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T, ApiError> {
        let mut builder = self.client.request(method.clone(), url);
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await.map_err(ApiError::transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::transport)?;
        planner_debug!("{} {} -> {} ({} bytes)", method, url, status, bytes.len());

        // The body is parsed before the status is looked at, so a non-JSON
        // error page is a decode failure whatever the status.
        let body = serde_json::from_slice::<Value>(&bytes).map_err(ApiError::decode)?;

        if !status.is_success() {
            let message = error_message(&body)
                .unwrap_or_else(|| format!("HTTP error, status {}", status.as_u16()));
            return Err(ApiError::Application {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_value(body).map_err(ApiError::decode)
    }
}

#[async_trait::async_trait]
impl ApiClient for ReqwestApiClient {
    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.request(Method::GET, HEALTH_PATH, None).await
    }

    async fn get_config(&self) -> Result<ApiConfig, ApiError> {
        self.request(Method::GET, CONFIG_PATH, None).await
    }

    async fn get_supported_meals(&self) -> Result<SupportedMeals, ApiError> {
        self.request(Method::GET, SUPPORTED_MEALS_PATH, None).await
    }

    async fn generate_meal_plan(
        &self,
        request: &MealPlanRequest,
    ) -> Result<MealPlanResult, ApiError> {
        let body = serde_json::to_vec(request).map_err(ApiError::decode)?;
        self.request(Method::POST, MEAL_PLAN_PATH, Some(body)).await
    }
}

fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
