//! Meal planner core: wire model, pure state machine and view-model helpers.
mod effect;
mod form;
mod model;
mod msg;
mod projection;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use form::FormDraft;
pub use model::{
    ApiConfig, CookingSkill, GroceryItem, HealthStatus, MealPlanRequest, MealPlanResult,
    MealPlanningOutput, RequestInfo, Servings, ShoppingOutput, ShoppingSection, SupportedMeals,
    TaskOutputs, UnknownCookingSkill, DEFAULT_MEAL_SUGGESTIONS, DEFAULT_SERVINGS,
    DIETARY_OPTIONS, MAX_SERVINGS, MIN_SERVINGS,
};
pub use msg::Msg;
pub use projection::{
    project_tab, project_tab_id, MealDetailsView, ResultTab, ShoppingSectionView, TabContent,
    UnknownTab, BUDGET_FALLBACK, LEFTOVERS_FALLBACK, SHOPPING_FALLBACK, SUMMARY_FALLBACK,
    UNKNOWN_TAB_FALLBACK,
};
pub use state::{AppState, BackendStatus, View};
pub use update::update;
pub use view_model::{AppViewModel, FormView, ResultsView, Screen, LOADING_MESSAGE};
