//! Meal planner engine: backend transport and background request execution.
mod client;
mod engine;
mod types;

pub use client::{
    ApiClient, ClientSettings, ReqwestApiClient, CONFIG_PATH, DEFAULT_BASE_URL, HEALTH_PATH,
    MEAL_PLAN_PATH, SUPPORTED_MEALS_PATH,
};
pub use engine::EngineHandle;
pub use types::{ApiError, EngineError, EngineEvent};
