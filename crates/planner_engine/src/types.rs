use std::io;

use planner_core::{ApiConfig, HealthStatus, MealPlanResult, SupportedMeals};

/// Failure of a single backend call. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Connection, DNS or timeout failure.
    #[error("{message}")]
    Transport { message: String },
    /// Backend answered with a non-success status.
    #[error("{message}")]
    Application { status: u16, message: String },
    /// Body was not JSON or did not have the expected shape.
    #[error("{message}")]
    Decode { message: String },
}

impl ApiError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        ApiError::Transport {
            message: err.to_string(),
        }
    }

    pub(crate) fn decode(err: serde_json::Error) -> Self {
        ApiError::Decode {
            message: err.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Application { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] ApiError),
}

/// Completion of a command issued through [`crate::EngineHandle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    HealthChecked(Result<HealthStatus, ApiError>),
    ConfigLoaded(Result<ApiConfig, ApiError>),
    SupportedMealsLoaded(Result<SupportedMeals, ApiError>),
    MealPlanGenerated(Result<MealPlanResult, ApiError>),
}
